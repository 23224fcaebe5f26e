//! Keep-structure strategy: each located folder is mirrored under the output directory.
//! Ignored names are removed after the copy, from inside the staging tree.

use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::fs_ops::{copy_entries, io_error_with_help, list_entries, list_files};

use super::ignore::IgnoreSet;
use super::publish::Staging;
use super::{Diagnostic, Outcome};

pub(super) fn stage_keep(
    folders: &[PathBuf],
    ignore: &mut IgnoreSet,
    target: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Outcome> {
    if folders.is_empty() {
        return Ok(Outcome::NoFolders);
    }

    // List every tree before the staging dir exists, so it can never list itself.
    let mut plans = Vec::with_capacity(folders.len());
    for folder in folders {
        let name = folder
            .file_name()
            .ok_or_else(|| anyhow!("folder has no name: {}", folder.display()))?;
        let entries = list_entries(folder, true)?;
        plans.push((folder, name, entries));
    }

    let staging = Staging::create(target)?;
    for (folder, name, entries) in &plans {
        let files = copy_entries(folder, entries, &staging.path().join(name))?;
        debug!(folder = %folder.display(), files, "staged folder tree");
    }

    remove_ignored(staging.path(), ignore, diagnostics)?;

    Ok(Outcome::Published(staging.publish()?))
}

/// Delete staged files whose names can be claimed from `ignore`.
/// Diagnostics carry the path relative to the staging root.
fn remove_ignored(
    root: &Path,
    ignore: &mut IgnoreSet,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<()> {
    if ignore.is_empty() {
        return Ok(());
    }
    for file in list_files(root)? {
        if !ignore.claim_path(&file) {
            continue;
        }
        fs::remove_file(&file).map_err(io_error_with_help("remove ignored file", &file))?;
        let rel = file.strip_prefix(root).unwrap_or(&file).to_path_buf();
        info!(path = %rel.display(), "skipping ignored file");
        diagnostics.push(Diagnostic::SkippedFile(rel));
    }
    Ok(())
}
