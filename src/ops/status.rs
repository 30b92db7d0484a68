use std::path::Path;

use crate::model::entry::Entry;

/// Whether something is currently on disk at the entry's path.
/// Checked fresh on every call.
pub fn exists(entry: &Entry) -> bool {
    Path::new(&entry.path).exists()
}

/// On-disk status of an entry, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Present,
    Missing,
}

impl Status {
    pub fn of(entry: &Entry) -> Self {
        if exists(entry) {
            Status::Present
        } else {
            Status::Missing
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Status::Present => "\u{2713}",
            Status::Missing => "\u{2717}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Present => "ok",
            Status::Missing => "missing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn tracks_the_filesystem() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("here");
        let entry = Entry::custom(dir.to_string_lossy());
        assert!(!exists(&entry));
        assert_eq!(Status::of(&entry), Status::Missing);

        fs::create_dir(&dir).unwrap();
        assert!(exists(&entry));
        assert_eq!(Status::of(&entry), Status::Present);

        fs::remove_dir(&dir).unwrap();
        assert!(!exists(&entry));
    }

    #[test]
    fn files_count_as_present() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("notes.txt");
        fs::write(&file, "x").unwrap();
        assert!(exists(&Entry::custom(file.to_string_lossy())));
    }

    #[test]
    fn labels() {
        assert_eq!(Status::Present.label(), "ok");
        assert_eq!(Status::Missing.label(), "missing");
    }
}
