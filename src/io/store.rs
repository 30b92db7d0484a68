use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::entry::{CUSTOM_CATEGORY, Entry, display_name_for};

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "saved_paths.json";

/// Error type for store writes. Reads never fail; see [`PathStore::load`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("could not serialize saved paths: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One item of `custom_paths` as found on disk. Older files hold bare path
/// strings; current ones hold records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredItem {
    Legacy(String),
    Record {
        #[serde(default)]
        name: Option<String>,
        path: String,
    },
}

impl StoredItem {
    /// Normalize into a custom entry. Everything in the store is custom,
    /// whatever category the record claims.
    fn into_entry(self) -> Option<Entry> {
        match self {
            StoredItem::Legacy(path) => {
                if path.is_empty() {
                    return None;
                }
                Some(Entry::custom(path))
            }
            StoredItem::Record { name, path } => {
                if path.is_empty() {
                    return None;
                }
                let name = name
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| display_name_for(&path));
                Some(Entry::new(name, path, CUSTOM_CATEGORY))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct StoredFile {
    #[serde(default)]
    custom_paths: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct StoredFileRef<'a> {
    custom_paths: Vec<&'a Entry>,
}

/// The on-disk home of the custom entries
#[derive(Debug, Clone)]
pub struct PathStore {
    path: PathBuf,
}

impl PathStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PathStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved custom entries.
    ///
    /// Never fails: a missing or unreadable file yields no entries, and a
    /// malformed one is backed up as `.bak` before yielding no entries.
    /// Individual items that are neither a path string nor a record with a
    /// `path` are skipped.
    pub fn load(&self) -> Vec<Entry> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no saved paths file");
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read saved paths");
                return Vec::new();
            }
        };

        let file: StoredFile = match serde_json::from_str(&content) {
            Ok(f) => f,
            Err(e) => {
                let bak = self.backup_path();
                match fs::copy(&self.path, &bak) {
                    Ok(_) => tracing::warn!(
                        path = %self.path.display(),
                        backup = %bak.display(),
                        error = %e,
                        "could not parse saved paths, starting empty"
                    ),
                    Err(copy_err) => {
                        tracing::warn!(
                            path = %self.path.display(),
                            error = %e,
                            "could not parse saved paths, starting empty"
                        );
                        tracing::warn!(
                            backup = %bak.display(),
                            error = %copy_err,
                            "could not back up saved paths; the next save replaces them"
                        );
                    }
                }
                return Vec::new();
            }
        };

        file.custom_paths
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<StoredItem>(value) {
                Ok(item) => item.into_entry(),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unrecognized saved path item");
                    None
                }
            })
            .collect()
    }

    /// Write the custom entries, replacing the whole file.
    ///
    /// Entries outside the custom category are left out. The write goes
    /// through a temp file in the same directory, so readers see either the
    /// old file or the new one.
    pub fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let doc = StoredFileRef {
            custom_paths: entries.iter().filter(|e| e.is_custom()).collect(),
        };
        let mut content = serde_json::to_string_pretty(&doc)?;
        content.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        atomic_write(&self.path, content.as_bytes()).map_err(|e| self.io_error(e))?;
        tracing::debug!(
            path = %self.path.display(),
            count = doc.custom_paths.len(),
            "saved custom paths"
        );
        Ok(())
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for PathStore {
    fn default() -> Self {
        PathStore::new(DEFAULT_STORE_FILE)
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, PathStore) {
        let tmp = TempDir::new().unwrap();
        let store = PathStore::new(tmp.path().join("saved_paths.json"));
        (tmp, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_tmp, store) = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let (_tmp, store) = temp_store();
        let entries = vec![
            Entry::custom("/srv/b"),
            Entry::new("Alpha", "/srv/a", CUSTOM_CATEGORY),
            Entry::custom("/srv/c"),
        ];
        store.save(&entries).unwrap();
        assert_eq!(store.load(), entries);
    }

    #[test]
    fn save_writes_keyed_records() {
        let (_tmp, store) = temp_store();
        store
            .save(&[Entry::new("proj", "/tmp/proj", CUSTOM_CATEGORY)])
            .unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        insta::assert_snapshot!(content.trim_end(), @r#"
        {
          "custom_paths": [
            {
              "name": "proj",
              "path": "/tmp/proj",
              "category": "Custom Paths"
            }
          ]
        }
        "#);
    }

    #[test]
    fn save_skips_non_custom_entries() {
        let (_tmp, store) = temp_store();
        store
            .save(&[
                Entry::new("Desktop", "/home/u/Desktop", "User Folders"),
                Entry::custom("/tmp/proj"),
            ])
            .unwrap();
        let loaded = store.load();
        assert_eq!(loaded, vec![Entry::custom("/tmp/proj")]);
    }

    #[test]
    fn save_replaces_previous_content() {
        let (_tmp, store) = temp_store();
        store
            .save(&[Entry::custom("/a"), Entry::custom("/b")])
            .unwrap();
        store.save(&[Entry::custom("/b")]).unwrap();
        assert_eq!(store.load(), vec![Entry::custom("/b")]);
    }

    #[test]
    fn save_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let store = PathStore::new(tmp.path().join("nested").join("dir").join("saved.json"));
        store.save(&[Entry::custom("/x")]).unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn save_failure_is_reported() {
        let tmp = TempDir::new().unwrap();
        // A directory where the file should go cannot be replaced by a file
        let target = tmp.path().join("saved.json");
        fs::create_dir_all(target.join("occupied")).unwrap();
        let store = PathStore::new(&target);
        let err = store.save(&[Entry::custom("/x")]).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn legacy_strings_are_upgraded() {
        let (_tmp, store) = temp_store();
        fs::write(store.path(), r#"{"custom_paths": ["/a/b/c", "/"]}"#).unwrap();
        let loaded = store.load();
        assert_eq!(
            loaded,
            vec![
                Entry::new("c", "/a/b/c", CUSTOM_CATEGORY),
                Entry::new("/", "/", CUSTOM_CATEGORY),
            ]
        );
    }

    #[test]
    fn mixed_legacy_and_records() {
        let (_tmp, store) = temp_store();
        fs::write(
            store.path(),
            r#"{"custom_paths": [
                "/old/style",
                {"name": "New", "path": "/new/style", "category": "Custom Paths"}
            ]}"#,
        )
        .unwrap();
        let loaded = store.load();
        assert_eq!(loaded[0], Entry::new("style", "/old/style", CUSTOM_CATEGORY));
        assert_eq!(loaded[1], Entry::new("New", "/new/style", CUSTOM_CATEGORY));
    }

    #[test]
    fn records_are_normalized_to_custom() {
        let (_tmp, store) = temp_store();
        fs::write(
            store.path(),
            r#"{"custom_paths": [{"name": "X", "path": "/x", "category": "User Folders"}, {"path": "/y"}]}"#,
        )
        .unwrap();
        let loaded = store.load();
        assert_eq!(
            loaded,
            vec![
                Entry::new("X", "/x", CUSTOM_CATEGORY),
                Entry::new("y", "/y", CUSTOM_CATEGORY),
            ]
        );
    }

    #[test]
    fn unrecognized_items_are_skipped() {
        let (_tmp, store) = temp_store();
        fs::write(
            store.path(),
            r#"{"custom_paths": [42, {"name": "no path"}, "", "/kept"]}"#,
        )
        .unwrap();
        assert_eq!(store.load(), vec![Entry::custom("/kept")]);
    }

    #[test]
    fn missing_key_loads_empty() {
        let (_tmp, store) = temp_store();
        fs::write(store.path(), r#"{"something_else": []}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupted_file_is_backed_up() {
        let (_tmp, store) = temp_store();
        fs::write(store.path(), "not json {{{").unwrap();
        assert!(store.load().is_empty());
        let bak = store.path().with_extension("json.bak");
        assert_eq!(fs::read_to_string(bak).unwrap(), "not json {{{");
    }

    #[test]
    fn failed_backup_still_loads_empty() {
        let (_tmp, store) = temp_store();
        fs::write(store.path(), "not json {{{").unwrap();
        // A directory in the way makes the copy fail
        let bak = store.path().with_extension("json.bak");
        fs::create_dir(&bak).unwrap();

        assert!(store.load().is_empty());
        assert!(bak.is_dir());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json {{{");
    }
}
