//! Folder locator.
//! Finds the first directory below a root whose name matches a requested folder name.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use super::walk::walk_error;
use crate::config::MatchMode;

/// Search `root` depth-first, pre-order, for a directory matching `target`.
///
/// A directory is checked before anything below it and before its later
/// siblings, so the first hit in that order wins and the walk stops there.
/// Matching is case-insensitive; `mode` picks equality or containment.
/// A blank `target` never matches. `root` itself is not a candidate.
/// Symlinked directories are candidates and are searched like real ones.
pub fn find_folder(root: &Path, target: &str, mode: MatchMode) -> io::Result<Option<PathBuf>> {
    if target.trim().is_empty() {
        return Ok(None);
    }
    let target_lower = target.to_lowercase();

    for entry in WalkDir::new(root).min_depth(1).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if mode.matches(&name, &target_lower) {
            debug!(folder = target, found = %entry.path().display(), "folder located");
            return Ok(Some(entry.into_path()));
        }
    }

    debug!(folder = target, root = %root.display(), "folder not found");
    Ok(None)
}
