//! The fixed section table for daily documents.
//!
//! Every component that addresses a section (locator, template renderer,
//! summary builder, CLI) consults this one table instead of repeating
//! heading literals.

use std::str::FromStr;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Errors from section-key resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum SectionError {
    #[error("invalid section \"{given}\"; valid sections: did, plan, block, meeting, notes")]
    #[diagnostic(
        code(daily::section::invalid_key),
        help(
            "Sections map to the fixed parts of a daily file: did (Done), \
             plan (To Do), block (Blockers), meeting (Meetings), notes (Quick Notes)."
        )
    )]
    InvalidKey { given: String },
}

pub type SectionResult<T> = std::result::Result<T, SectionError>;

/// Identifier for one of the five fixed sections of a daily document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Did,
    Plan,
    Block,
    Meeting,
    Notes,
}

/// One row of the section table.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub key: SectionKey,
    /// Heading line as persisted in the document. This is a storage format
    /// contract: changing it breaks section addressing in existing files.
    pub heading: &'static str,
    /// Plain-text title used by the standup summary.
    pub summary_title: &'static str,
}

/// All five sections, in document order.
pub static SECTIONS: [SectionSpec; 5] = [
    SectionSpec {
        key: SectionKey::Did,
        heading: "## ✅ Done",
        summary_title: "DONE",
    },
    SectionSpec {
        key: SectionKey::Plan,
        heading: "## ▶️ To Do",
        summary_title: "TO DO",
    },
    SectionSpec {
        key: SectionKey::Block,
        heading: "## 🚧 Blockers",
        summary_title: "BLOCKERS",
    },
    SectionSpec {
        key: SectionKey::Meeting,
        heading: "## 🗓 Meetings",
        summary_title: "MEETINGS",
    },
    SectionSpec {
        key: SectionKey::Notes,
        heading: "## 🧠 Quick Notes",
        summary_title: "QUICK NOTES",
    },
];

impl SectionKey {
    /// Look up this key's row in the section table.
    pub fn spec(self) -> &'static SectionSpec {
        let idx = match self {
            SectionKey::Did => 0,
            SectionKey::Plan => 1,
            SectionKey::Block => 2,
            SectionKey::Meeting => 3,
            SectionKey::Notes => 4,
        };
        &SECTIONS[idx]
    }

    /// Heading line for this section.
    pub fn heading(self) -> &'static str {
        self.spec().heading
    }

    /// Command-surface name (`did`, `plan`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Did => "did",
            SectionKey::Plan => "plan",
            SectionKey::Block => "block",
            SectionKey::Meeting => "meeting",
            SectionKey::Notes => "notes",
        }
    }
}

impl FromStr for SectionKey {
    type Err = SectionError;

    fn from_str(s: &str) -> SectionResult<Self> {
        match s {
            "did" => Ok(SectionKey::Did),
            "plan" => Ok(SectionKey::Plan),
            "block" => Ok(SectionKey::Block),
            "meeting" => Ok(SectionKey::Meeting),
            "notes" => Ok(SectionKey::Notes),
            other => Err(SectionError::InvalidKey {
                given: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.heading, b.heading);
            }
        }
    }

    #[test]
    fn key_round_trips_through_str() {
        for spec in &SECTIONS {
            let parsed: SectionKey = spec.key.as_str().parse().unwrap();
            assert_eq!(parsed, spec.key);
        }
    }

    #[test]
    fn invalid_key_is_rejected() {
        let err = "standup".parse::<SectionKey>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("standup"));
        // The message must enumerate the valid keys.
        for key in ["did", "plan", "block", "meeting", "notes"] {
            assert!(msg.contains(key), "message should list {key}: {msg}");
        }
    }

    #[test]
    fn spec_lookup_matches_table_order() {
        assert_eq!(SectionKey::Did.heading(), "## ✅ Done");
        assert_eq!(SectionKey::Notes.heading(), "## 🧠 Quick Notes");
        assert_eq!(SectionKey::Meeting.spec().summary_title, "MEETINGS");
    }
}
