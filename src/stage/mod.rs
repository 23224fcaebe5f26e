//! Staging pipeline: resolve folders, then flatten or keep structure, then publish.
//!
//! `run` performs no console output. Everything the user should see comes back
//! in the `Report` (outcome plus diagnostics) or as a typed `StageError`.

mod flatten;
pub mod ignore;
mod keep;
pub mod publish;

use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{Config, Layout};
use crate::errors::StageError;
use crate::fs_ops::{find_folder, io_error_with_help};

pub use ignore::IgnoreSet;
pub use publish::{Staging, available_destination};

/// Something noteworthy found while staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A file left out because its name was in the ignore list.
    SkippedFile(PathBuf),
    /// A requested folder name that matched no directory.
    MissingFolder(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SkippedFile(p) => write!(f, "Skipping file: {}", p.display()),
            Diagnostic::MissingFolder(name) => write!(f, "Folder not found: {name}/"),
        }
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output directory published at this absolute path.
    Published(PathBuf),
    /// Flatten mode found nothing left to copy; nothing was created.
    NoFiles,
    /// Keep mode had no folders to copy; nothing was created.
    NoFolders,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Published(p) => write!(f, "Output generated: {}", p.display()),
            Outcome::NoFiles => f.write_str("No files found"),
            Outcome::NoFolders => f.write_str("No folders found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    pub diagnostics: Vec<Diagnostic>,
}

/// Validate `cfg`, locate its folders and stage them with the configured layout.
///
/// Fails with `StageError::MissingFolders` before touching the filesystem when
/// any requested folder is absent. I/O failures surface as anyhow errors with
/// the operation and path attached.
pub fn run(cfg: &Config) -> Result<Report> {
    cfg.validate()?;

    let folders = resolve_folders(cfg)?;
    let target = output_target(cfg)?;
    debug!(target = %target.display(), layout = ?cfg.layout, "staging");

    let mut ignore = IgnoreSet::new(&cfg.ignore);
    let mut diagnostics = Vec::new();
    let outcome = match cfg.layout {
        Layout::Flatten => flatten::stage_flatten(&folders, &mut ignore, &target, &mut diagnostics)?,
        Layout::KeepStructure => keep::stage_keep(&folders, &mut ignore, &target, &mut diagnostics)?,
    };

    Ok(Report {
        outcome,
        diagnostics,
    })
}

/// Locate every requested folder under the source root, in request order.
pub fn resolve_folders(cfg: &Config) -> Result<Vec<PathBuf>> {
    let mut found = Vec::with_capacity(cfg.folders.len());
    let mut missing = Vec::new();
    for name in &cfg.folders {
        match find_folder(&cfg.source, name, cfg.match_mode)? {
            Some(dir) => found.push(dir),
            None => {
                info!(folder = %name, "folder not found");
                missing.push(name.clone());
            }
        }
    }
    if !missing.is_empty() {
        return Err(StageError::MissingFolders(missing).into());
    }
    Ok(found)
}

/// Absolute output path: `output_parent` (or the current dir) joined with the output name.
pub fn output_target(cfg: &Config) -> Result<PathBuf> {
    let base = if cfg.output_parent.as_os_str().is_empty() {
        std::env::current_dir().map_err(io_error_with_help("read current directory", Path::new(".")))?
    } else {
        std::path::absolute(&cfg.output_parent)
            .map_err(io_error_with_help("resolve output parent", &cfg.output_parent))?
    };
    Ok(base.join(&cfg.output))
}
