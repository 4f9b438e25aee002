//! Display utilities for listing and line-ending results.

use std::ffi::OsString;
use std::fmt::Display;
use std::path::Path;

use console::style;
use fsystem::{FsError, LineEnding};

/// Prints the regular files of `dir`, one per line, followed by a count.
///
/// Names that are not valid UTF-8 are shown with replacement characters.
pub fn show_file_list(dir: &Path, names: &[OsString]) {
    if names.is_empty() {
        println!("{}", style(format!("No regular files in {}", dir.display())).yellow());
        return;
    }

    for name in names {
        println!("{}", name.to_string_lossy());
    }

    println!();
    println!("{} {}", style("✓").green(), style(format!("{} regular file(s) in {}", names.len(), dir.display())).bold());
}

/// Formats one `path  label` report line.
pub fn report_line(path: &Path, label: impl Display) -> String {
    format!("{}  {label}", path.display())
}

/// Prints one `path  ending` line.
pub fn show_line_ending(path: &Path, ending: LineEnding) {
    let label = match ending {
        LineEnding::Unknown => style(ending).yellow(),
        LineEnding::Unix => style(ending).green(),
        LineEnding::Windows => style(ending).cyan(),
    };

    println!("{}", report_line(path, label));
}

/// Prints a failed operation to stderr.
pub fn show_failure(err: &FsError) {
    eprintln!("{} {}", style("✗").red(), style(err).red());
}
