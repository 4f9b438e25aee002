//! fsystem - file-system helpers for Lua.
//!
//! A native Lua module with two functions:
//! - `readdirFile(path)`: names of the regular files directly inside a directory
//! - `fileFormat(path)`: line-ending convention of a text file (0 unknown, 1 Unix, 2 Windows)
//!
//! The same operations are available to Rust callers through [`file`], and
//! report failures as [`FsError`] values instead of terminating the process.

pub mod config;
pub mod error;
pub mod file;
pub mod lua;
pub mod types;

pub use error::{ErrorKind, FsError, Result};
pub use file::{classify, detect_line_ending, detect_line_ending_from, list_regular_files};
pub use types::{FileNameList, LineEnding};
