//! Config module.
//! Provides the run configuration types, path helpers and validation.

pub mod paths;
pub mod types;
mod validate;

pub use paths::path_has_symlink_ancestor;
pub use types::{Config, Layout, LogLevel, MatchMode};
