use std::path::PathBuf;

use crate::model::builtin::home_dir;

/// `canonicalize` on Windows returns `\\?\C:\...`; strip that so stored
/// paths look like the ones users type.
pub fn strip_verbatim(path: &str) -> &str {
    path.strip_prefix(r"\\?\").unwrap_or(path)
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(input: &str) -> PathBuf {
    if input == "~" {
        return home_dir();
    }
    match input.strip_prefix("~/").or_else(|| input.strip_prefix("~\\")) {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(input),
    }
}

/// Resolve user input to an absolute path of something that exists.
pub fn resolve_existing(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    std::fs::canonicalize(expand_tilde(input))
        .ok()
        .map(|p| strip_verbatim(&p.to_string_lossy()).to_string())
}
