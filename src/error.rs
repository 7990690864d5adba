//! Rich diagnostic error types for the daily crate.
//!
//! Each module defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text so users know exactly what
//! went wrong and how to fix it. This module ties them together.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::document::DocumentError;
use crate::journal::JournalError;
use crate::section::SectionError;

/// Top-level error type for the daily crate.
///
/// Each variant wraps a module-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum DailyError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Journal(#[from] JournalError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, DailyError>;
