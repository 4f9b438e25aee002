//! Error type shared by every fsystem operation.
//!
//! Failures are always returned to the caller; nothing in this crate ends the
//! process. The Lua binding turns these values into Lua errors, the command
//! line front end into a non-zero exit status.

use std::io;
use std::path::{Path, PathBuf};

use strum::Display;
use thiserror::Error;

/// Result alias used by the library operations.
pub type Result<T, E = FsError> = std::result::Result<T, E>;

/// Coarse classification of an [`FsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    Io,
    InvalidArgument,
}

#[derive(Debug, Error)]
pub enum FsError {
    /// The path does not exist.
    #[error("not found: {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The operating system refused access to the path.
    #[error("permission denied: {}: {source}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other open, read or close failure.
    #[error("I/O error: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The caller supplied a missing or empty path.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FsError {
    /// Classifies an I/O failure on `path` by its [`io::ErrorKind`].
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::Io { .. } => ErrorKind::Io,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// The path the failing operation was working on, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. } | Self::PermissionDenied { path, .. } | Self::Io { path, .. } => Some(path),
            Self::InvalidArgument(_) => None,
        }
    }
}
