use indexmap::IndexMap;

use crate::model::entry::Entry;

/// Title of the single group shown while a search is active
pub const SEARCH_RESULTS: &str = "Search Results";

/// A titled run of entries for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub title: String,
    pub entries: Vec<&'a Entry>,
}

impl Group<'_> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Group entries by category, keeping the order in which categories are
/// first seen and the original order within each category.
pub fn group_by_category(entries: &[Entry]) -> Vec<Group<'_>> {
    let mut groups: IndexMap<&str, Vec<&Entry>> = IndexMap::new();
    for entry in entries {
        groups.entry(entry.category.as_str()).or_default().push(entry);
    }
    groups
        .into_iter()
        .map(|(title, entries)| Group {
            title: title.to_string(),
            entries,
        })
        .collect()
}

/// Whether `entry` matches an already lowercased search needle.
fn matches(entry: &Entry, needle: &str) -> bool {
    entry.name.to_lowercase().contains(needle) || entry.path.to_lowercase().contains(needle)
}

/// Project entries for display.
///
/// Blank `search_text` gives the category grouping. Otherwise every entry
/// whose name or path contains the text (ignoring case) lands in one
/// "Search Results" group; with no matches there are no groups at all.
pub fn filter<'a>(entries: &'a [Entry], search_text: &str) -> Vec<Group<'a>> {
    if search_text.trim().is_empty() {
        return group_by_category(entries);
    }

    let needle = search_text.to_lowercase();
    let hits: Vec<&Entry> = entries.iter().filter(|e| matches(e, &needle)).collect();
    if hits.is_empty() {
        return Vec::new();
    }
    vec![Group {
        title: SEARCH_RESULTS.to_string(),
        entries: hits,
    }]
}

/// All entries of a projection in display order.
pub fn flatten<'a>(groups: &[Group<'a>]) -> Vec<&'a Entry> {
    groups.iter().flat_map(|g| g.entries.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::{CUSTOM_CATEGORY, SYSTEM_FOLDERS, USER_FOLDERS};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("Desktop", "/home/u/Desktop", USER_FOLDERS),
            Entry::new("Temp", "/tmp", SYSTEM_FOLDERS),
            Entry::new("Documents", "/home/u/Documents", USER_FOLDERS),
            Entry::new("proj", "/tmp/proj", CUSTOM_CATEGORY),
            Entry::new("Logs", "/var/log", SYSTEM_FOLDERS),
        ]
    }

    fn titles(groups: &[Group]) -> Vec<String> {
        groups.iter().map(|g| g.title.clone()).collect()
    }

    fn names(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let entries = sample();
        let groups = group_by_category(&entries);
        assert_eq!(titles(&groups), vec![USER_FOLDERS, SYSTEM_FOLDERS, CUSTOM_CATEGORY]);
        assert_eq!(names(&groups[0].entries), vec!["Desktop", "Documents"]);
        assert_eq!(names(&groups[1].entries), vec!["Temp", "Logs"]);
    }

    #[test]
    fn grouping_is_a_partition() {
        let entries = sample();
        let groups = group_by_category(&entries);
        let total: usize = groups.iter().map(Group::len).sum();
        assert_eq!(total, entries.len());
        for entry in &entries {
            let hits = flatten(&groups)
                .into_iter()
                .filter(|e| std::ptr::eq(*e, entry))
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn group_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn blank_search_is_grouping() {
        let entries = sample();
        assert_eq!(filter(&entries, ""), group_by_category(&entries));
        assert_eq!(filter(&entries, "   "), group_by_category(&entries));
    }

    #[test]
    fn search_matches_name_or_path() {
        let entries = sample();
        let groups = filter(&entries, "tmp");
        assert_eq!(titles(&groups), vec![SEARCH_RESULTS]);
        assert_eq!(names(&groups[0].entries), vec!["Temp", "proj"]);

        let groups = filter(&entries, "logs");
        assert_eq!(names(&groups[0].entries), vec!["Logs"]);
    }

    #[test]
    fn search_ignores_case() {
        let entries = sample();
        let groups = filter(&entries, "DESK");
        assert_eq!(names(&groups[0].entries), vec!["Desktop"]);
    }

    #[test]
    fn search_collapses_categories_in_original_order() {
        let entries = sample();
        let groups = filter(&entries, "o");
        assert_eq!(groups.len(), 1);
        assert_eq!(
            names(&groups[0].entries),
            vec!["Desktop", "Documents", "proj", "Logs"]
        );
    }

    #[test]
    fn search_without_hits_has_no_groups() {
        let entries = sample();
        assert!(filter(&entries, "zzz").is_empty());
    }

    #[test]
    fn search_returns_exactly_the_matching_entries() {
        let entries = sample();
        for text in ["home", "U", "/", "proj", "x"] {
            let expected: Vec<&Entry> = entries
                .iter()
                .filter(|e| {
                    let t = text.to_lowercase();
                    e.name.to_lowercase().contains(&t) || e.path.to_lowercase().contains(&t)
                })
                .collect();
            assert_eq!(flatten(&filter(&entries, text)), expected, "search {:?}", text);
        }
    }
}
