//! Tree walker.
//! Lists everything below a root depth first. walkdir keeps its own stack of
//! open directories, so deep trees never grow the call stack.

use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

use super::helpers::io_error_with_help_io;

/// One path found below the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Return every entry below `root` (root excluded) in depth-first pre-order.
///
/// - Entries within one directory are visited sorted by file name.
/// - Directories appear only when `include_dirs` is set, each exactly once.
/// - Symlinks are followed; entries below a linked directory keep the link's path.
///   A link back to an ancestor is an error.
/// - Returned paths are absolute when `root` is.
pub fn list_entries(root: &Path, include_dirs: bool) -> io::Result<Vec<WalkEntry>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        let is_dir = entry.file_type().is_dir();
        if is_dir && !include_dirs {
            continue;
        }
        trace!(path = %entry.path().display(), is_dir, "walk entry");
        out.push(WalkEntry {
            path: entry.into_path(),
            is_dir,
        });
    }
    Ok(out)
}

/// Turn a walkdir failure into an io::Error naming the path that failed.
pub(crate) fn walk_error(root: &Path, err: walkdir::Error) -> io::Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    io_error_with_help_io("walk directory", &path)(err.into())
}

/// Convenience: only the non-directory paths below `root`.
pub fn list_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    Ok(list_entries(root, false)?
        .into_iter()
        .map(WalkEntry::into_path)
        .collect())
}
