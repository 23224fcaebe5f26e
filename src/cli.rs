//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Logging flags only affect the tracing subscriber; status lines always print.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, Layout, LogLevel, MatchMode};

/// Copy the contents of named folders out of a source tree into one output directory.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Locate named folders in a source tree and stage their files into an output directory"
)]
pub struct Args {
    /// Root directory to search.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Name of the output directory, created relative to the current directory.
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: String,

    /// Folder names to locate under SOURCE (case-insensitive).
    #[arg(short = 'f', long = "folder", value_name = "FOLDER", num_args = 1.., required = true)]
    pub folders: Vec<String>,

    /// File names to leave out of the output (case-insensitive, each used once).
    #[arg(short = 'i', long = "ignore", value_name = "IGNORE", num_args = 1..)]
    pub ignore: Vec<String>,

    /// Keep each folder's directory structure instead of flattening.
    #[arg(short = 'k', long = "keep")]
    pub keep: bool,

    /// Match folder names by substring instead of exact name.
    #[arg(short = 'm', long = "match")]
    pub substring: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append log lines to this file as well as stderr.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Build the run configuration. The output is resolved against the current directory.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::new(&self.source, self.output.clone(), self.folders.iter().cloned())
            .with_ignore(&self.ignore)
            .with_match_mode(if self.substring {
                MatchMode::Substring
            } else {
                MatchMode::Exact
            })
            .with_layout(if self.keep {
                Layout::KeepStructure
            } else {
                Layout::Flatten
            });
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        cfg.log_file = self.log_file.clone();
        cfg.json_logs = self.json;
        cfg
    }
}

pub fn parse() -> Args {
    Args::parse()
}
