//! Core library for `get_files`.
//!
//! Locates named folders under a source tree and stages their files into a
//! single output directory, flattened or with each folder's structure kept.
//! The output is assembled in a hidden staging directory and published with
//! one rename, so it never appears half-written.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod stage;

pub use config::{Config, Layout, LogLevel, MatchMode, path_has_symlink_ancestor};
pub use errors::StageError;
pub use stage::{Diagnostic, IgnoreSet, Outcome, Report, run};
