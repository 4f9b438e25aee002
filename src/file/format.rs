use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use super::require_path;
use crate::config::SNIFF_WINDOW;
use crate::error::{FsError, Result};
use crate::types::LineEnding;

/// Detects the line-ending convention of the file at `path`.
///
/// Only the first [`SNIFF_WINDOW`] bytes are read; see [`classify`] for how
/// they are interpreted.
///
/// # Errors
///
/// [`FsError::NotFound`], [`FsError::PermissionDenied`] or [`FsError::Io`]
/// when the file cannot be opened or read (opening a directory fails here on
/// the first read), [`FsError::InvalidArgument`] for an empty path.
pub fn detect_line_ending(path: impl AsRef<Path>) -> Result<LineEnding> {
    let path = path.as_ref();
    require_path(path)?;

    let file = File::open(path).map_err(|e| FsError::from_io(path, e))?;
    let ending = detect_line_ending_from(file).map_err(|e| FsError::from_io(path, e))?;

    debug!(path = %path.display(), %ending, "detected line ending");
    Ok(ending)
}

/// Reads at most [`SNIFF_WINDOW`] bytes from `reader` and classifies them.
///
/// Short reads are retried until the window is full or the reader is
/// exhausted. Nothing past the window is consumed.
pub fn detect_line_ending_from<R: Read>(reader: R) -> io::Result<LineEnding> {
    let mut window = Vec::with_capacity(SNIFF_WINDOW);
    reader.take(SNIFF_WINDOW as u64).read_to_end(&mut window)?;
    Ok(classify(&window))
}

/// Classifies a byte window by its first newline.
///
/// Scans left to right: a `\r` immediately followed by `\n` is
/// [`LineEnding::Windows`], a `\n` that does not complete such a pair is
/// [`LineEnding::Unix`]. A trailing `\r` has no partner inside the window and
/// does not count.
#[must_use]
pub fn classify(window: &[u8]) -> LineEnding {
    for (i, &byte) in window.iter().enumerate() {
        match byte {
            b'\r' if window.get(i + 1) == Some(&b'\n') => return LineEnding::Windows,
            b'\n' => return LineEnding::Unix,
            _ => {}
        }
    }

    LineEnding::Unknown
}
