//! Config validation logic.
//! Verifies the source root and the requested names before anything touches the filesystem.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error};

use crate::errors::StageError;

use super::types::Config;

impl Config {
    /// Validate the source root, the folder list and the output name.
    pub fn validate(&self) -> Result<()> {
        ensure_dir_exists_and_is_dir(&self.source)?;

        fs::read_dir(&self.source).with_context(|| {
            format!(
                "Cannot read source directory '{}'; check permissions",
                self.source.display()
            )
        })?;

        if self.folders.is_empty() {
            error!("No folders requested");
            return Err(StageError::NoFoldersRequested.into());
        }

        if !is_valid_output_name(&self.output) {
            error!(output = %self.output, "Invalid output name");
            return Err(StageError::InvalidOutputName(self.output.clone()).into());
        }

        debug!(
            source = %self.source.display(),
            output = %self.output,
            folders = ?self.folders,
            "Config validated"
        );
        Ok(())
    }
}

fn ensure_dir_exists_and_is_dir(p: &Path) -> Result<()> {
    if !p.exists() {
        error!("Source does not exist: {}", p.display());
        return Err(StageError::SourceNotFound(p.to_path_buf()).into());
    }
    if !p.is_dir() {
        error!("Source is not a directory: {}", p.display());
        return Err(StageError::SourceNotDirectory(p.to_path_buf()).into());
    }
    Ok(())
}

/// The output name must name something: not blank and not just `.`/`..`.
fn is_valid_output_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && Path::new(trimmed).file_name().is_some()
}
