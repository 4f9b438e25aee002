//! Common type definitions for fsystem.
//!
//! - [`LineEnding`]: the line-ending convention detected in a file
//! - [`FileNameList`]: names returned by the directory lister

use std::ffi::OsString;

use strum::{Display, EnumIter};

use crate::config::{CODE_UNIX, CODE_UNKNOWN, CODE_WINDOWS};

/// Names of the regular files in a directory, in enumeration order.
///
/// Names are kept as the raw bytes the file system returned, so each one can
/// be joined back onto the directory even when it is not valid UTF-8.
pub type FileNameList = Vec<OsString>;

/// Line-ending convention of a text file.
///
/// Decided by the first newline found in the leading window of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LineEnding {
    /// Empty file, or no newline inside the window.
    #[default]
    Unknown,

    /// A bare `\n` came first.
    Unix,

    /// A `\r\n` pair came first.
    Windows,
}

impl LineEnding {
    /// Integer code returned to Lua by `fileFormat`.
    #[inline]
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Unknown => CODE_UNKNOWN,
            Self::Unix => CODE_UNIX,
            Self::Windows => CODE_WINDOWS,
        }
    }

    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            CODE_UNKNOWN => Some(Self::Unknown),
            CODE_UNIX => Some(Self::Unix),
            CODE_WINDOWS => Some(Self::Windows),
            _ => None,
        }
    }
}
