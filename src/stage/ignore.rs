//! Consumable ignore set.
//! Each name suppresses at most one file: a successful claim removes it.

use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    pub fn new(names: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Remove `name` (case-insensitive) from the set. Returns true if it was present.
    pub fn claim(&mut self, name: &str) -> bool {
        self.names.remove(&name.to_lowercase())
    }

    /// Claim by the final component of `path`.
    pub fn claim_path(&mut self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|n| self.claim(&n.to_string_lossy()))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
