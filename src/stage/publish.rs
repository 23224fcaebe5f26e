//! Staging directory and publish step.
//! - Staging::create makes a hidden temp dir next to the final output path.
//! - Staging::publish renames it onto the output name in one step.
//! - Dropping an unpublished Staging removes the temp dir and its contents.

use anyhow::{Context, Result, anyhow};
use rand::Rng;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::fs_ops::{io_error_with_help, try_atomic_move};

const STAGING_PREFIX: &str = ".get_files.staging.";

/// Upper bound (exclusive) for the random suffix: at most 7 hex digits.
const SUFFIX_SPACE: u32 = 0x1000_0000;

#[derive(Debug)]
pub struct Staging {
    dir: TempDir,
    target: PathBuf,
}

impl Staging {
    /// Create a staging directory in the parent of `target`.
    /// The parent is created when missing.
    pub fn create(target: &Path) -> Result<Self> {
        let parent = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| anyhow!("output path has no parent: {}", target.display()))?;
        fs::create_dir_all(parent).map_err(io_error_with_help("create output parent", parent))?;

        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)
            .map_err(io_error_with_help("create staging directory", parent))?;
        debug!(staging = %dir.path().display(), target = %target.display(), "staging directory created");
        Ok(Self {
            dir,
            target: target.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Rename the staging directory onto the output path and return its absolute form.
    /// If the rename fails the staging directory is removed.
    pub fn publish(self) -> Result<PathBuf> {
        let dest = available_destination(&self.target);
        let staged = self.dir.keep();
        relax_permissions(&staged);

        if let Err(e) = try_atomic_move(&staged, &dest) {
            let _ = fs::remove_dir_all(&staged);
            return Err(e).context("publish output directory");
        }

        let resolved = dunce::canonicalize(&dest).unwrap_or(dest);
        info!(output = %resolved.display(), "output published");
        Ok(resolved)
    }
}

/// Return `desired` when nothing exists there, else `<name>_<hex>` beside it.
///
/// The alternate name is not checked again.
// TODO: loop until a free name is found instead of trusting a single random suffix.
pub fn available_destination(desired: &Path) -> PathBuf {
    if fs::symlink_metadata(desired).is_err() {
        return desired.to_path_buf();
    }
    let mut name: OsString = desired
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push("_");
    name.push(random_suffix());
    let alt = desired.with_file_name(name);
    warn!(
        desired = %desired.display(),
        alternate = %alt.display(),
        "output path already exists; using a suffixed name"
    );
    alt
}

fn random_suffix() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..SUFFIX_SPACE);
    format!("{n:x}")
}

/// Temp dirs are created 0700; the published output should look like any other directory.
#[cfg(unix)]
fn relax_permissions(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let _ = fs::set_permissions(dir, fs::Permissions::from_mode(0o755));
}

#[cfg(not(unix))]
fn relax_permissions(_dir: &Path) {}
