use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use fsystem::{detect_line_ending, list_regular_files};
use rayon::prelude::*;
use tracing::Level;

use crate::ui::display::{show_failure, show_file_list, show_line_ending};

#[derive(Subcommand)]
pub enum Commands {
    /// List the regular files directly inside a directory.
    List {
        /// Directory to list.
        dir: PathBuf,
    },

    /// Detect the line-ending convention of one or more files.
    Format {
        /// Files to inspect.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Parser)]
#[command(name = "fsystem", version, about = "List regular files and detect Unix or Windows line endings.")]
pub struct App {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(log_level(app.verbose))
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(app)
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::List { dir } => Self::run_list(&dir),
            Commands::Format { files } => Self::run_format(&files),
        }
    }

    fn run_list(dir: &Path) -> Result<()> {
        let names = list_regular_files(dir).with_context(|| format!("cannot list directory: {}", dir.display()))?;
        show_file_list(dir, &names);
        Ok(())
    }

    fn run_format(files: &[PathBuf]) -> Result<()> {
        let results: Vec<_> = files.par_iter().map(detect_line_ending).collect();

        let mut failed = 0usize;
        for (path, result) in files.iter().zip(results) {
            match result {
                Ok(ending) => show_line_ending(path, ending),
                Err(err) => {
                    show_failure(&err);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            bail!("{failed} of {} file(s) could not be read", files.len());
        }

        Ok(())
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
