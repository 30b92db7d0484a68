use serde::Serialize;

use crate::model::entry::Entry;
use crate::ops::filter::Group;
use crate::ops::status::{self, Status};
use crate::util::unicode;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct EntryJson {
    pub name: String,
    pub path: String,
    pub category: String,
    pub custom: bool,
    pub exists: bool,
    /// "ok" or "missing"
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct GroupJson {
    pub title: String,
    pub entries: Vec<EntryJson>,
}

#[derive(Serialize)]
pub struct CountJson {
    pub total: usize,
    pub custom: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn entry_to_json(entry: &Entry) -> EntryJson {
    EntryJson {
        name: entry.name.clone(),
        path: entry.path.clone(),
        category: entry.category.clone(),
        custom: entry.is_custom(),
        exists: status::exists(entry),
        status: Status::of(entry).label(),
    }
}

pub fn groups_to_json(groups: &[Group]) -> Vec<GroupJson> {
    groups
        .iter()
        .map(|g| GroupJson {
            title: g.title.clone(),
            entries: g.entries.iter().map(|e| entry_to_json(e)).collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Render groups as an indented listing with a status column.
pub fn format_groups(groups: &[Group]) -> String {
    let name_w = groups
        .iter()
        .flat_map(|g| g.entries.iter())
        .map(|e| unicode::display_width(&e.name))
        .max()
        .unwrap_or(0)
        .min(32);

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} ({})\n", group.title, group.len()));
        for entry in &group.entries {
            let name = unicode::truncate_to_width(&entry.name, name_w);
            let pad = name_w.saturating_sub(unicode::display_width(&name));
            let st = Status::of(entry);
            out.push_str(&format!(
                "  {} {}{}  {}\n",
                st.symbol(),
                name,
                " ".repeat(pad),
                entry.path
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::{CUSTOM_CATEGORY, USER_FOLDERS};
    use crate::ops::filter::group_by_category;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_aligns_names() {
        let entries = vec![
            Entry::new("Desktop", "/nonexistent/Desktop", USER_FOLDERS),
            Entry::new("proj", "/nonexistent/proj", CUSTOM_CATEGORY),
        ];
        let out = format_groups(&group_by_category(&entries));
        assert_eq!(
            out,
            "User Folders (1)\n  \u{2717} Desktop  /nonexistent/Desktop\n\nCustom Paths (1)\n  \u{2717} proj     /nonexistent/proj\n"
        );
    }

    #[test]
    fn json_marks_custom_entries() {
        let e = Entry::custom("/nonexistent/proj");
        let json = entry_to_json(&e);
        assert!(json.custom);
        assert!(!json.exists);
        assert_eq!(json.status, "missing");
        assert_eq!(json.name, "proj");
    }
}
