//! Global Configuration Constants
//!
//! This module contains the fixed parameters of the fsystem module: the size
//! of the window inspected by the line-ending detector, and the names and
//! integer codes exposed to Lua.
//!
//! ## Compatibility
//!
//! The Lua-facing names and codes are part of the module's public contract.
//! Existing Lua scripts call `readdirFile` and `fileFormat` and compare the
//! result with `0`, `1` and `2`, so these values must not change.

/// Name under which the module is loaded with `require`.
///
/// The loadable library exports `luaopen_fsystem`, so the shared object must
/// be installed as `fsystem.so` (or `fsystem.dll`) on the host's `cpath`.
pub const MODULE_NAME: &str = "fsystem";

/// Crate version, published to Lua as `fsystem._VERSION`.
pub const MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of leading bytes inspected by the line-ending detector.
///
/// Bytes past this offset are never read. A file whose first newline sits
/// beyond the window is reported as having no known line ending.
pub const SNIFF_WINDOW: usize = 1024;

// === Lua function names ===

/// Lua name of the directory listing function.
pub const LUA_READDIR_FILE: &str = "readdirFile";

/// Lua name of the line-ending detection function.
pub const LUA_FILE_FORMAT: &str = "fileFormat";

// === Line ending codes ===
// Integer values returned by `fileFormat` and published as table constants.

/// No newline found in the window, or the file is empty.
pub const CODE_UNKNOWN: i64 = 0;

/// Bare `\n` seen first.
pub const CODE_UNIX: i64 = 1;

/// `\r\n` seen first.
pub const CODE_WINDOWS: i64 = 2;
