//! Read-modify-write access to per-day documents on disk.
//!
//! Every mutation reads the whole file, transforms it in memory and writes
//! the whole file back. There is no locking: one writer per date is assumed,
//! and concurrent invocations race with last-writer-wins semantics.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info};

use crate::document::{self, DocumentError};
use crate::item::format_item;
use crate::section::SectionKey;
use crate::summary::{self, SummaryGroup};
use crate::template::render_template;

/// Errors from journal storage operations.
#[derive(Debug, Error, Diagnostic)]
pub enum JournalError {
    #[error("no daily file exists for {filename}")]
    #[diagnostic(
        code(daily::journal::document_not_found),
        help(
            "Daily files are created on first append. Add an entry first, \
             e.g. `daily did \"finished the report\"`."
        )
    )]
    DocumentNotFound { filename: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),

    #[error("failed to read daily file: {path}")]
    #[diagnostic(
        code(daily::journal::read),
        help("Check that the dailies directory is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write daily file: {path}")]
    #[diagnostic(
        code(daily::journal::write),
        help("Check that the dailies directory exists and is writable.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize summary: {message}")]
    #[diagnostic(code(daily::journal::summary_json))]
    SummaryJson { message: String },
}

pub type JournalResult<T> = std::result::Result<T, JournalError>;

/// Daily filenames are `YYYY-MM-DD-daily.md`.
const FILE_SUFFIX: &str = "-daily.md";

/// One journal: a directory of per-day documents.
///
/// The directory is resolved and created by the caller at startup (see
/// [`crate::config::Config`]); the journal itself never consults the
/// process environment.
#[derive(Debug, Clone)]
pub struct Journal {
    dailies_dir: PathBuf,
}

impl Journal {
    pub fn new(dailies_dir: impl Into<PathBuf>) -> Self {
        Self {
            dailies_dir: dailies_dir.into(),
        }
    }

    pub fn dailies_dir(&self) -> &Path {
        &self.dailies_dir
    }

    /// Storage location for `date`'s document.
    pub fn file_path(&self, date: NaiveDate) -> PathBuf {
        self.dailies_dir
            .join(format!("{}{FILE_SUFFIX}", date.format("%Y-%m-%d")))
    }

    /// Create `date`'s document from the template iff it is absent.
    /// An existing file is never touched, whatever its content.
    pub fn ensure_exists(&self, date: NaiveDate) -> JournalResult<PathBuf> {
        let path = self.file_path(date);
        if !path.exists() {
            let template = render_template(date);
            std::fs::write(&path, template).map_err(|e| JournalError::Write {
                path: path.display().to_string(),
                source: e,
            })?;
            info!(path = %path.display(), "created daily file from template");
        }
        Ok(path)
    }

    /// Read `date`'s document. Missing file is Document-Not-Found.
    pub fn read(&self, date: NaiveDate) -> JournalResult<String> {
        let path = self.file_path(date);
        if !path.exists() {
            return Err(JournalError::DocumentNotFound {
                filename: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            });
        }
        std::fs::read_to_string(&path).map_err(|e| JournalError::Read {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Overwrite `date`'s document with `content`.
    pub fn write(&self, date: NaiveDate, content: &str) -> JournalResult<PathBuf> {
        let path = self.file_path(date);
        std::fs::write(&path, content).map_err(|e| JournalError::Write {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(path)
    }

    /// Append one entry to a section of `date`'s document, creating the
    /// document from the template on first write for that date.
    pub fn add_entry(
        &self,
        key: SectionKey,
        text: &str,
        tags: &[String],
        date: NaiveDate,
    ) -> JournalResult<PathBuf> {
        self.ensure_exists(date)?;

        let content = self.read(date)?;
        let line = format_item(text, tags);
        let updated = document::insert_at_section(&content, key, &line)?;

        debug!(section = %key, %date, "appended entry");
        self.write(date, &updated)
    }

    /// All entries in a section of `date`'s document, marker stripped,
    /// tag annotations intact. The document must exist.
    pub fn entries(&self, key: SectionKey, date: NaiveDate) -> JournalResult<Vec<String>> {
        let content = self.read(date)?;
        Ok(document::extract_items(&content, key))
    }

    /// Like [`entries`](Self::entries), keeping only items carrying at
    /// least one of `wanted` tags.
    pub fn entries_tagged(
        &self,
        key: SectionKey,
        wanted: &[String],
        date: NaiveDate,
    ) -> JournalResult<Vec<String>> {
        let items = self.entries(key, date)?;
        Ok(document::filter_by_tags(&items, wanted))
    }

    /// Structured standup summary for `date`, optionally tag-filtered.
    pub fn summary(
        &self,
        wanted_tags: &[String],
        date: NaiveDate,
    ) -> JournalResult<Vec<SummaryGroup>> {
        let content = self.read(date)?;
        Ok(summary::build_summary(&content, wanted_tags))
    }

    /// Plain-text standup summary for `date`.
    pub fn summary_text(&self, wanted_tags: &[String], date: NaiveDate) -> JournalResult<String> {
        let groups = self.summary(wanted_tags, date)?;
        Ok(summary::render_summary(&groups))
    }

    /// JSON standup summary for `date`.
    pub fn summary_json(&self, wanted_tags: &[String], date: NaiveDate) -> JournalResult<String> {
        let groups = self.summary(wanted_tags, date)?;
        serde_json::to_string_pretty(&groups).map_err(|e| JournalError::SummaryJson {
            message: e.to_string(),
        })
    }
}
