//! Core configuration types.
//! - Config holds one run's settings, built from the CLI.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors; status lines still print (default)
    #[default]
    Normal,
    /// Per-file progress
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// How a requested folder name is compared against directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Lowercased names must be equal.
    #[default]
    Exact,
    /// Lowercased target must be contained in the lowercased directory name.
    Substring,
}

impl MatchMode {
    /// Compare a directory name against an already-lowercased target.
    pub fn matches(self, dir_name: &str, target_lower: &str) -> bool {
        let name = dir_name.to_lowercase();
        match self {
            MatchMode::Exact => name == target_lower,
            MatchMode::Substring => name.contains(target_lower),
        }
    }
}

/// Output layout of the staged directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Every file lands directly in the output directory.
    #[default]
    Flatten,
    /// Each matched folder is mirrored under the output directory.
    KeepStructure,
}

/// Runtime configuration for one staging run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Root directory searched for the requested folders
    pub source: PathBuf,
    /// Name of the output directory, resolved against `output_parent`
    pub output: String,
    /// Directory the output name is resolved against (empty = current dir)
    pub output_parent: PathBuf,
    /// Folder names to locate, in request order
    pub folders: Vec<String>,
    /// File names to leave out, stored lowercased
    pub ignore: BTreeSet<String>,
    pub match_mode: MatchMode,
    pub layout: Layout,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Emit JSON log lines
    pub json_logs: bool,
}

impl Config {
    /// Construct a Config with the required fields; other fields use defaults.
    pub fn new(
        source: impl Into<PathBuf>,
        output: impl Into<String>,
        folders: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            folders: folders.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Builder-style: add file names to ignore (case-insensitive).
    pub fn with_ignore(mut self, names: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        self.ignore
            .extend(names.into_iter().map(|n| n.as_ref().to_lowercase()));
        self
    }

    /// Builder-style: resolve the output name against `dir` instead of the current dir.
    pub fn with_output_parent(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_parent = dir.into();
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}
