//! Line-oriented operations on the sections of a daily document.
//!
//! A section is not stored separately: it is a view computed on demand as
//! the lines strictly between a known heading and the next known heading
//! (or end of document). Edits are whole-document transforms: the full text
//! goes in, a full new text comes out, and every byte outside the target
//! section is preserved verbatim.

use miette::Diagnostic;
use thiserror::Error;

use crate::item::{ITEM_MARKER, parse_item};
use crate::section::{SECTIONS, SectionKey};

/// Errors from document edits.
#[derive(Debug, Error, Diagnostic)]
pub enum DocumentError {
    #[error("section heading \"{heading}\" not found in document")]
    #[diagnostic(
        code(daily::document::section_not_found),
        help(
            "The file was likely hand-edited. Restore the heading line, \
             or move the file aside so the next write recreates the template."
        )
    )]
    SectionNotFound { heading: String },
}

pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Line range of a located section's content. `start..end` excludes the
/// heading line itself and the boundary line that terminates the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Find the content span of `key`'s section in `document`.
///
/// Heading matching is exact after trimming trailing whitespace. The span
/// runs to the first following line that matches any *other* known heading,
/// or to the end of the document. If a heading is duplicated, only the first
/// occurrence is addressable; later copies are ordinary content lines.
pub fn locate_section(document: &str, key: SectionKey) -> Option<Span> {
    let lines: Vec<&str> = document.lines().collect();
    let heading = key.heading();

    let at = lines.iter().position(|l| l.trim_end() == heading)?;
    let start = at + 1;
    let end = lines[start..]
        .iter()
        .position(|l| {
            let t = l.trim_end();
            SECTIONS.iter().any(|s| s.key != key && s.heading == t)
        })
        .map(|off| start + off)
        .unwrap_or(lines.len());

    Some(Span { start, end })
}

/// Append `line` as the new last line of `key`'s section.
///
/// The line lands immediately before the boundary that terminates the span,
/// so repeated inserts keep their call order. Fails when the heading is
/// missing; the editor never repairs a document.
///
/// Documents are LF-terminated (the template only ever emits `\n`); a
/// hand-edited CRLF file is rewritten with LF endings throughout.
pub fn insert_at_section(document: &str, key: SectionKey, line: &str) -> DocumentResult<String> {
    let span = locate_section(document, key).ok_or_else(|| DocumentError::SectionNotFound {
        heading: key.heading().to_string(),
    })?;

    let mut lines: Vec<&str> = document.lines().collect();
    lines.insert(span.end, line);

    let mut out = lines.join("\n");
    if document.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// All item lines within `key`'s section, in document order, with the
/// leading marker stripped and the tag annotation left intact.
///
/// A missing heading yields an empty list, never an error: reading a section
/// is safe on a freshly templated or hand-mangled document.
pub fn extract_items(document: &str, key: SectionKey) -> Vec<String> {
    let Some(span) = locate_section(document, key) else {
        return Vec::new();
    };

    document
        .lines()
        .skip(span.start)
        .take(span.end - span.start)
        .filter_map(|l| l.strip_prefix(ITEM_MARKER))
        .map(str::to_string)
        .collect()
}

/// Keep the items whose parsed tag list contains at least one of `wanted`
/// (exact, case-sensitive). An empty `wanted` passes everything through;
/// untagged items are dropped whenever a filter is given.
pub fn filter_by_tags(items: &[String], wanted: &[String]) -> Vec<String> {
    if wanted.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            let (_, tags) = parse_item(item);
            tags.iter().any(|t| wanted.contains(t))
        })
        .cloned()
        .collect()
}
