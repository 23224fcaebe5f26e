//! Typed error definitions for get_files.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    /// One or more requested folders could not be located under the source root.
    #[error("Unable to find folders: {}", folder_list(.0))]
    MissingFolders(Vec<String>),

    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source path is not a directory: {0}")]
    SourceNotDirectory(PathBuf),

    #[error("Invalid output name: '{0}'")]
    InvalidOutputName(String),

    #[error("No folders requested")]
    NoFoldersRequested,
}

impl StageError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            StageError::MissingFolders(_) => 10,
            StageError::SourceNotFound(_) => 20,
            StageError::SourceNotDirectory(_) => 21,
            StageError::InvalidOutputName(_) => 30,
            StageError::NoFoldersRequested => 31,
        }
    }
}

/// Render folder names as "a/, b/".
pub fn folder_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("{n}/"))
        .collect::<Vec<_>>()
        .join(", ")
}
