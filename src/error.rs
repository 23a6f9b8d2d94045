//! Error types for the report analyzer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a single report line can fail to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The line has fewer whitespace-separated fields than a record needs.
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// A counter field is not an `<observed>/<expected>` integer pair.
    #[error("field {index} is not an <observed>/<expected> pair: {token:?}")]
    BadRatio { index: usize, token: String },
}

/// Top-level analyzer errors.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The report file is missing or became unreadable.
    #[error("cannot read report file {path:?}: {source}")]
    FileAccess { path: PathBuf, source: io::Error },

    /// A report line failed to parse. Line numbers are 1-based.
    #[error("malformed record at line {line_number}: {source}")]
    MalformedLine {
        line_number: usize,
        source: RecordError,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
