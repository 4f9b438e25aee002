//! File-system operations exposed by fsystem.
//!
//! Both operations are stateless and blocking: each call opens what it needs,
//! releases it before returning, and reports failures as [`FsError`] values.

pub mod format;
pub mod listing;

use std::path::Path;

pub use format::{classify, detect_line_ending, detect_line_ending_from};
pub use listing::list_regular_files;

use crate::error::{FsError, Result};

/// Rejects an empty path before it reaches the file system.
fn require_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(FsError::invalid_argument("path must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_require_path() {
        assert!(require_path(Path::new("a")).is_ok());

        let err = require_path(Path::new("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
