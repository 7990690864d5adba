//! Skeleton for a brand-new daily document.

use chrono::NaiveDate;

use crate::section::SECTIONS;

/// Render the initial document for `date`: a metadata block, then the five
/// section headings in table order, each left empty.
///
/// This is the only producer of a new document. Callers must not invoke it
/// for a date whose file already exists (see `Journal::ensure_exists`).
pub fn render_template(date: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str("---\n");
    out.push_str("type: daily\n");
    out.push_str(&format!("date: {}\n", date.format("%Y-%m-%d")));
    out.push_str("---\n");
    out.push('\n');

    for spec in &SECTIONS {
        out.push_str(spec.heading);
        out.push('\n');
        out.push('\n');
    }
    out
}
