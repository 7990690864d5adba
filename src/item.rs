//! Canonical line format for a single entry.
//!
//! An item is persisted as one line: `- <text>` or `- <text> #tags: a,b`.
//! Formatting then parsing returns the same text and tag sequence, as long
//! as the text contains no newline and no ` #tags: ` of its own.

/// Leading marker of an item line.
pub const ITEM_MARKER: &str = "- ";

/// Prefix token of the trailing tag annotation.
pub const TAG_MARKER: &str = "#tags:";

/// Delimiter between tags inside the annotation payload.
pub const TAG_DELIMITER: char = ',';

/// Render an item as its canonical line (without trailing newline).
///
/// Text is not escaped; callers must not pass text containing line breaks.
pub fn format_item(text: &str, tags: &[String]) -> String {
    if tags.is_empty() {
        format!("{ITEM_MARKER}{text}")
    } else {
        format!(
            "{ITEM_MARKER}{text} {TAG_MARKER} {}",
            tags.join(&TAG_DELIMITER.to_string())
        )
    }
}

/// Parse an item line back into text and tags.
///
/// Accepts lines with or without the leading `- ` marker (the section
/// extractor hands out marker-stripped lines). A stray `#tags:` with no
/// payload segment is treated as plain text, never an error: reads degrade
/// gracefully, writes stay exact. Empty-string tags from trailing delimiters
/// are preserved so that parsing stays the exact inverse of formatting.
pub fn parse_item(line: &str) -> (String, Vec<String>) {
    let body = line.strip_prefix(ITEM_MARKER).unwrap_or(line);

    // A bare trailing marker has no payload segment at all; the whole body
    // is text, even when an earlier annotation-shaped token precedes it.
    if body.ends_with(TAG_MARKER) {
        return (body.to_string(), Vec::new());
    }

    // The annotation is the trailing segment; rsplit keeps any earlier
    // occurrence of the token inside the text itself.
    match body.rsplit_once(format!(" {TAG_MARKER} ").as_str()) {
        Some((text, payload)) => {
            let tags = payload
                .split(TAG_DELIMITER)
                .map(str::to_string)
                .collect();
            (text.to_string(), tags)
        }
        None => (body.to_string(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn format_without_tags() {
        assert_eq!(format_item("Completed task", &[]), "- Completed task");
    }

    #[test]
    fn format_with_tags() {
        assert_eq!(
            format_item("Deploy", &tags(&["cicd", "aws"])),
            "- Deploy #tags: cicd,aws"
        );
    }

    #[test]
    fn round_trip_with_tags() {
        let line = format_item("Deploy", &tags(&["cicd", "aws"]));
        assert_eq!(parse_item(&line), ("Deploy".to_string(), tags(&["cicd", "aws"])));
    }

    #[test]
    fn round_trip_without_tags() {
        let line = format_item("Review PR", &[]);
        assert_eq!(parse_item(&line), ("Review PR".to_string(), vec![]));
    }

    #[test]
    fn round_trip_preserves_empty_tags() {
        // A trailing delimiter produces an empty tag; parsing must keep it.
        let line = format_item("x", &tags(&["a", ""]));
        assert_eq!(line, "- x #tags: a,");
        assert_eq!(parse_item(&line), ("x".to_string(), tags(&["a", ""])));
    }

    #[test]
    fn parse_accepts_marker_stripped_lines() {
        assert_eq!(
            parse_item("Deploy #tags: cicd"),
            ("Deploy".to_string(), tags(&["cicd"]))
        );
    }

    #[test]
    fn stray_marker_without_payload_is_plain_text() {
        let (text, parsed) = parse_item("- fix the #tags: handling #tags:");
        assert_eq!(text, "fix the #tags: handling #tags:");
        assert!(parsed.is_empty(), "got tags: {parsed:?}");
    }

    #[test]
    fn bare_marker_alone_is_plain_text() {
        let (text, parsed) = parse_item("- #tags:");
        assert_eq!(text, "#tags:");
        assert!(parsed.is_empty());
    }

    #[test]
    fn annotation_in_text_resolves_to_trailing_segment() {
        let (text, parsed) = parse_item("- a #tags: b #tags: c,d");
        assert_eq!(text, "a #tags: b");
        assert_eq!(parsed, tags(&["c", "d"]));
    }
}
