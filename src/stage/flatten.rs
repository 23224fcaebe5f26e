//! Flatten strategy: every located file lands directly in the output directory.

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::fs_ops::{copy_file, list_files};

use super::ignore::IgnoreSet;
use super::publish::Staging;
use super::{Diagnostic, Outcome};

/// List, filter, stage and publish the files under `folders`.
pub(super) fn stage_flatten(
    folders: &[PathBuf],
    ignore: &mut IgnoreSet,
    target: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Outcome> {
    let mut candidates = Vec::new();
    for folder in folders {
        let files = list_files(folder)?;
        debug!(folder = %folder.display(), files = files.len(), "listed folder");
        candidates.extend(files);
    }

    let files = filter_candidates(candidates, ignore, diagnostics);
    if files.is_empty() {
        return Ok(Outcome::NoFiles);
    }

    let staging = Staging::create(target)?;
    for file in &files {
        let name = file
            .file_name()
            .ok_or_else(|| anyhow!("file has no name: {}", file.display()))?;
        // Same-named files overwrite each other; the last one listed wins.
        copy_file(file, &staging.path().join(name))?;
    }
    debug!(files = files.len(), "staged flattened files");

    Ok(Outcome::Published(staging.publish()?))
}

/// Drop each candidate whose name can be claimed from `ignore`, in order.
pub(super) fn filter_candidates(
    candidates: Vec<PathBuf>,
    ignore: &mut IgnoreSet,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<PathBuf> {
    let mut kept = Vec::with_capacity(candidates.len());
    for file in candidates {
        if ignore.claim_path(&file) {
            info!(path = %file.display(), "skipping ignored file");
            diagnostics.push(Diagnostic::SkippedFile(file));
        } else {
            kept.push(file);
        }
    }
    kept
}
