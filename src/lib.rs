//! # daily
//!
//! Section-structured daily standup notes: one Markdown document per
//! calendar day, divided into five fixed sections (Done, To Do, Blockers,
//! Meetings, Quick Notes). Entries are appended as tagged bullet lines and
//! read back as a condensed, tag-filterable standup summary.
//!
//! ## Architecture
//!
//! - **Section table** (`section`): the fixed `{key, heading, title}` records
//!   every other component consults
//! - **Item format** (`item`): the `- text #tags: a,b` line codec
//! - **Document model** (`document`): locate/append/extract on section spans
//! - **Journal** (`journal`): whole-file read-modify-write storage per date
//! - **Summary** (`summary`): the derived standup view (Quick Notes excluded)
//!
//! ## Library usage
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use daily::journal::Journal;
//! use daily::section::SectionKey;
//!
//! let journal = Journal::new("/tmp/dailies");
//! let date = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
//! let tags = vec!["cicd".to_string()];
//! journal.add_entry(SectionKey::Did, "Deploy", &tags, date).unwrap();
//! println!("{}", journal.summary_text(&[], date).unwrap());
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod item;
pub mod journal;
pub mod section;
pub mod summary;
pub mod template;

pub use config::Config;
pub use error::{DailyError, Result};
pub use journal::Journal;
pub use section::SectionKey;
pub use summary::{SummaryGroup, SummaryItem};
