use std::fs::{self, DirEntry};
use std::path::Path;

use tracing::{debug, trace};

use super::require_path;
use crate::error::{FsError, Result};
use crate::types::FileNameList;

/// Lists the names of the regular files directly inside `path`.
///
/// Subdirectories, symlinks, sockets, FIFOs and devices are skipped, and the
/// listing does not recurse. Names come back in the order the operating
/// system enumerates them, which is not sorted, and are returned unconverted.
///
/// # Errors
///
/// [`FsError::NotFound`] or [`FsError::PermissionDenied`] when the directory
/// cannot be opened, [`FsError::Io`] when `path` is not a directory or reading
/// an entry fails, [`FsError::InvalidArgument`] for an empty path.
pub fn list_regular_files(path: impl AsRef<Path>) -> Result<FileNameList> {
    let path = path.as_ref();
    require_path(path)?;
    debug!(path = %path.display(), "listing regular files");

    let entries = fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;

    let mut names = FileNameList::new();
    for entry in entries {
        let entry = entry.map_err(|e| FsError::from_io(path, e))?;
        if is_regular_file(&entry) {
            names.push(entry.file_name());
        }
    }

    debug!(path = %path.display(), count = names.len(), "listed regular files");
    Ok(names)
}

// `file_type` uses the dirent type hint when the platform provides one and
// falls back to lstat otherwise, so symlinks are never followed.
fn is_regular_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Ok(file_type) => {
            if !file_type.is_file() {
                trace!(entry = %entry.path().display(), ?file_type, "skipping non-regular entry");
            }
            file_type.is_file()
        }
        Err(e) => {
            debug!(entry = %entry.path().display(), error = %e, "cannot determine entry type, skipping");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::tempdir;

    use super::*;
    use crate::error::ErrorKind;

    fn sorted(mut names: FileNameList) -> FileNameList {
        names.sort();
        names
    }

    #[test]
    fn test_lists_only_regular_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join("b.lua")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("inner.txt")).unwrap();

        let names = list_regular_files(dir.path()).unwrap();
        assert_eq!(sorted(names), vec![".hidden", "a.txt", "b.lua"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        File::create(dir.path().join("target.txt")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        symlink(dir.path().join("target.txt"), dir.path().join("link-to-file")).unwrap();
        symlink(dir.path().join("sub"), dir.path().join("link-to-dir")).unwrap();
        symlink(dir.path().join("missing"), dir.path().join("dangling")).unwrap();

        let names = list_regular_files(dir.path()).unwrap();
        assert_eq!(names, vec!["target.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_socket() {
        use std::os::unix::net::UnixListener;

        let dir = tempdir().unwrap();
        File::create(dir.path().join("plain")).unwrap();
        let _listener = UnixListener::bind(dir.path().join("sock")).unwrap();

        let names = list_regular_files(dir.path()).unwrap();
        assert_eq!(names, vec!["plain"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_stay_distinct() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        use crate::file::detect_line_ending;
        use crate::types::LineEnding;

        let dir = tempdir().unwrap();
        let first = OsStr::from_bytes(b"a\xff");
        let second = OsStr::from_bytes(b"a\xfe");
        fs::write(dir.path().join(first), b"unix\n").unwrap();
        fs::write(dir.path().join(second), b"dos\r\n").unwrap();

        let names = sorted(list_regular_files(dir.path()).unwrap());
        assert_eq!(names, vec![second.to_os_string(), first.to_os_string()]);

        assert_eq!(detect_line_ending(dir.path().join(&names[0])).unwrap(), LineEnding::Windows);
        assert_eq!(detect_line_ending(dir.path().join(&names[1])).unwrap(), LineEnding::Unix);
    }

    #[test]
    fn test_no_duplicates() {
        let dir = tempdir().unwrap();
        for i in 0..50 {
            File::create(dir.path().join(format!("file-{i:02}"))).unwrap();
        }

        let mut names = list_regular_files(dir.path()).unwrap();
        assert_eq!(names.len(), 50);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 50);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let names = list_regular_files(dir.path()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_nonexistent_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = list_regular_files(&missing).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Some(missing.as_path()));
    }

    #[test]
    fn test_path_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();

        let err = list_regular_files(&file).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_empty_path() {
        let err = list_regular_files("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
