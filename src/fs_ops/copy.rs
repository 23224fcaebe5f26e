//! Copy helpers used while populating the staging directory.
//! - copy_file: single file, destination parent created on demand.
//! - copy_entries: mirror a listed subtree under a new root.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::trace;

use super::helpers::io_error_with_help;
use super::walk::WalkEntry;

/// Copy `src` to `dst`, overwriting an existing file at `dst`.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(io_error_with_help("create directory", parent))?;
    }
    let bytes = fs::copy(src, dst).map_err(io_error_with_help("copy file", src))?;
    trace!(src = %src.display(), dst = %dst.display(), bytes, "copied file");
    Ok(bytes)
}

/// Recreate `entries` (listed earlier with `list_entries(src_dir, true)`) under
/// `dst_dir`, keeping their paths relative to `src_dir`. `dst_dir` is created if
/// missing; anything created under `src_dir` after the listing is not copied.
/// Returns the number of files copied.
pub fn copy_entries(src_dir: &Path, entries: &[WalkEntry], dst_dir: &Path) -> Result<usize> {
    fs::create_dir_all(dst_dir).map_err(io_error_with_help("create directory", dst_dir))?;

    let mut files = 0usize;
    for entry in entries {
        let rel = entry
            .path
            .strip_prefix(src_dir)
            .with_context(|| format!("entry {} outside {}", entry.path.display(), src_dir.display()))?;
        let target = dst_dir.join(rel);
        if entry.is_dir {
            fs::create_dir_all(&target).map_err(io_error_with_help("create directory", &target))?;
        } else {
            copy_file(&entry.path, &target)?;
            files += 1;
        }
    }
    Ok(files)
}
