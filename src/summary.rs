//! Standup summary: a condensed, tag-filterable view across sections.
//!
//! The summary covers Done, Meetings, To Do and Blockers, in that order.
//! Quick Notes is excluded by design: it holds scratch material that has no
//! place in a standup. Output is plain text; tag annotations never appear.

use serde::Serialize;

use crate::document::{extract_items, filter_by_tags};
use crate::item::parse_item;
use crate::section::SectionKey;

/// Sections included in the summary, in display order.
pub const SUMMARY_SECTIONS: [SectionKey; 4] = [
    SectionKey::Did,
    SectionKey::Meeting,
    SectionKey::Plan,
    SectionKey::Block,
];

/// Placeholder line for a group with no items.
const NO_ENTRIES: &str = "(no entries)";

/// One parsed entry inside a summary group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryItem {
    pub text: String,
    pub tags: Vec<String>,
}

/// Derived grouping of one section's (optionally filtered) items.
/// Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryGroup {
    pub title: &'static str,
    pub key: SectionKey,
    pub items: Vec<SummaryItem>,
}

/// Collect summary groups from `document`, optionally filtered by tags.
///
/// The document text must already have been read by the caller; a missing
/// file is the journal layer's Document-Not-Found, raised before this runs.
pub fn build_summary(document: &str, wanted_tags: &[String]) -> Vec<SummaryGroup> {
    SUMMARY_SECTIONS
        .iter()
        .map(|&key| {
            let raw = extract_items(document, key);
            let raw = filter_by_tags(&raw, wanted_tags);
            let items = raw
                .iter()
                .map(|line| {
                    let (text, tags) = parse_item(line);
                    SummaryItem { text, tags }
                })
                .collect();
            SummaryGroup {
                title: key.spec().summary_title,
                key,
                items,
            }
        })
        .collect()
}

/// Render groups as plain text: title line, one dashed line per item with
/// tags stripped (or `(no entries)`), exactly one blank line between groups
/// and no trailing blank line.
pub fn render_summary(groups: &[SummaryGroup]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(group.title.to_string());
        if group.items.is_empty() {
            lines.push(NO_ENTRIES.to_string());
        } else {
            for item in &group.items {
                lines.push(format!("- {}", item.text));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::insert_at_section;
    use crate::item::format_item;
    use crate::template::render_template;
    use chrono::NaiveDate;

    fn fresh() -> String {
        render_template(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap())
    }

    fn add(doc: &str, key: SectionKey, text: &str, tags: &[&str]) -> String {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        insert_at_section(doc, key, &format_item(text, &tags)).unwrap()
    }

    #[test]
    fn groups_follow_fixed_order() {
        let groups = build_summary(&fresh(), &[]);
        let titles: Vec<&str> = groups.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["DONE", "MEETINGS", "TO DO", "BLOCKERS"]);
    }

    #[test]
    fn notes_are_always_excluded() {
        let doc = add(&fresh(), SectionKey::Notes, "Quick note", &[]);
        let groups = build_summary(&doc, &[]);
        assert!(groups.iter().all(|g| g.key != SectionKey::Notes));
        assert!(!render_summary(&groups).contains("Quick note"));
    }

    #[test]
    fn render_strips_tags() {
        let doc = add(&fresh(), SectionKey::Did, "Deploy", &["cicd", "aws"]);
        let text = render_summary(&build_summary(&doc, &[]));
        assert!(text.contains("- Deploy"));
        assert!(!text.contains("#tags:"));
        assert!(!text.contains("cicd"));
    }

    #[test]
    fn render_has_no_markdown_headings() {
        let doc = add(&fresh(), SectionKey::Did, "Task", &[]);
        let text = render_summary(&build_summary(&doc, &[]));
        assert!(!text.contains("##"));
        assert!(!text.contains('✅'));
    }

    #[test]
    fn empty_groups_render_placeholder_without_trailing_blank() {
        let text = render_summary(&build_summary(&fresh(), &[]));
        let expected = "DONE\n(no entries)\n\nMEETINGS\n(no entries)\n\nTO DO\n(no entries)\n\nBLOCKERS\n(no entries)";
        assert_eq!(text, expected);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn tag_filter_applies_per_group() {
        let mut doc = fresh();
        doc = add(&doc, SectionKey::Did, "Task cicd", &["cicd"]);
        doc = add(&doc, SectionKey::Did, "Task infra", &["infra"]);
        doc = add(&doc, SectionKey::Plan, "Plan cicd", &["cicd"]);

        let text = render_summary(&build_summary(&doc, &["cicd".to_string()]));
        assert!(text.contains("Task cicd"));
        assert!(!text.contains("Task infra"));
        assert!(text.contains("Plan cicd"));
    }

    #[test]
    fn groups_serialize_with_lowercase_keys() {
        let doc = add(&fresh(), SectionKey::Did, "Deploy", &["cicd"]);
        let json = serde_json::to_string(&build_summary(&doc, &[])).unwrap();
        assert!(json.contains("\"key\":\"did\""));
        assert!(json.contains("\"title\":\"DONE\""));
        assert!(json.contains("\"tags\":[\"cicd\"]"));
    }
}
