use std::collections::HashSet;
use std::path::Path;

use crate::io::store::{PathStore, StoreError};
use crate::model::builtin::builtin_entries;
use crate::model::entry::Entry;

/// Error type for registry operations. All of these leave the registry
/// unchanged.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("path is empty")]
    EmptyPath,
    #[error("path already exists in the list: {0}")]
    Duplicate(String),
    #[error("only custom paths can be removed: {0}")]
    NotRemovable(String),
}

/// Result of a mutation that was applied in memory. `warning` is set when
/// the custom paths could not be written back to the store.
#[derive(Debug)]
pub struct Saved<T> {
    pub value: T,
    pub warning: Option<StoreError>,
}

/// All bookmarked paths: built-ins first, then custom entries in the order
/// they were loaded or added.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Entry>,
    store: PathStore,
}

impl Registry {
    /// Build the registry from the built-ins for `home` plus whatever the
    /// store holds. Stored entries whose path is already present are
    /// dropped.
    pub fn load(store: PathStore, home: &Path) -> Self {
        let mut entries = builtin_entries(home);
        let mut seen: HashSet<String> = entries.iter().map(|e| e.path.clone()).collect();

        for entry in store.load() {
            if seen.insert(entry.path.clone()) {
                entries.push(entry);
            } else {
                tracing::debug!(path = %entry.path, "skipping duplicate saved path");
            }
        }

        Registry { entries, store }
    }

    /// Build the registry for the current user's home directory.
    pub fn initialize(store: PathStore) -> Self {
        Self::load(store, &crate::model::builtin::home_dir())
    }

    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn custom(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_custom())
    }

    pub fn find(&self, path: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn store(&self) -> &PathStore {
        &self.store
    }

    /// Append a custom entry for `path` and persist the custom set.
    pub fn add(&mut self, path: &str) -> Result<Saved<Entry>, RegistryError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(RegistryError::EmptyPath);
        }
        if self.find(path).is_some() {
            return Err(RegistryError::Duplicate(path.to_string()));
        }

        let entry = Entry::custom(path);
        self.entries.push(entry.clone());
        tracing::debug!(path = %entry.path, name = %entry.name, "added custom path");
        Ok(Saved {
            value: entry,
            warning: self.persist(),
        })
    }

    /// Remove the custom entry at `path` and persist the custom set.
    /// Built-in entries cannot be removed. `path` is trimmed like in `add`.
    pub fn remove(&mut self, path: &str) -> Result<Saved<Entry>, RegistryError> {
        let path = path.trim();
        let idx = self
            .entries
            .iter()
            .position(|e| e.path == path && e.is_custom())
            .ok_or_else(|| RegistryError::NotRemovable(path.to_string()))?;

        let removed = self.entries.remove(idx);
        tracing::debug!(path = %removed.path, "removed custom path");
        Ok(Saved {
            value: removed,
            warning: self.persist(),
        })
    }

    fn persist(&self) -> Option<StoreError> {
        let custom: Vec<Entry> = self.custom().cloned().collect();
        match self.store.save(&custom) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "custom paths were not saved");
                Some(e)
            }
        }
    }
}
