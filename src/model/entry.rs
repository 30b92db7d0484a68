use serde::{Deserialize, Serialize};

/// The one category that is persisted and user-removable
pub const CUSTOM_CATEGORY: &str = "Custom Paths";

pub const USER_FOLDERS: &str = "User Folders";
pub const SYSTEM_FOLDERS: &str = "System Folders";
pub const SPECIAL_FOLDERS: &str = "Special Folders";

/// A bookmarked filesystem location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub path: String,
    pub category: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, path: impl Into<String>, category: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            path: path.into(),
            category: category.into(),
        }
    }

    /// A user-added entry, named after the final segment of its path.
    pub fn custom(path: impl Into<String>) -> Self {
        let path = path.into();
        Entry {
            name: display_name_for(&path),
            path,
            category: CUSTOM_CATEGORY.to_string(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.category == CUSTOM_CATEGORY
    }
}

/// Derive a display name from a path: its last segment, or the whole path
/// when that segment is empty (e.g. `/`, `C:\` or `/tmp/proj/`).
///
/// Both `/` and `\` count as separators so Windows paths stored on disk get
/// the same name on every platform.
pub fn display_name_for(path: &str) -> String {
    let last = path.rsplit(['/', '\\']).next().unwrap_or("");
    if last.is_empty() || last.ends_with(':') {
        path.to_string()
    } else {
        last.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_last_segment() {
        assert_eq!(display_name_for("/a/b/c"), "c");
        assert_eq!(display_name_for("/tmp/proj"), "proj");
    }

    #[test]
    fn trailing_separator_keeps_full_path() {
        assert_eq!(display_name_for("/a/b/c/"), "/a/b/c/");
        assert_eq!(display_name_for(r"D:\work\"), r"D:\work\");
        assert_eq!(Entry::custom("/tmp/proj/").name, "/tmp/proj/");
    }

    #[test]
    fn name_handles_windows_separators() {
        assert_eq!(display_name_for(r"C:\Users\me\proj"), "proj");
    }

    #[test]
    fn name_falls_back_to_full_path() {
        assert_eq!(display_name_for("/"), "/");
        assert_eq!(display_name_for(r"C:\"), r"C:\");
        assert_eq!(display_name_for("relative"), "relative");
    }

    #[test]
    fn custom_entry_uses_custom_category() {
        let e = Entry::custom("/srv/data");
        assert_eq!(e.name, "data");
        assert_eq!(e.path, "/srv/data");
        assert!(e.is_custom());
    }
}
