//! Error type shared by loading, mining and reporting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the miner can surface. None of them are recovered locally.
#[derive(Debug, Error)]
pub enum AprioriError {
    /// The database file could not be opened or read.
    #[error("failed to read database {path}: {source}")]
    DatabaseRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input has no header line at all.
    #[error("database is empty: expected header `<transactions> <items>`")]
    MissingHeader,

    /// The header line is not two non-negative integers.
    #[error("line {line}: malformed header {content:?}, expected `<transactions> <items>`")]
    MalformedHeader { line: usize, content: String },

    /// A transaction row contains a token that is not an item id.
    #[error("line {line}: invalid item {token:?}")]
    InvalidItem { line: usize, token: String },

    /// A transaction row names an item outside `[0, universe)`.
    #[error("line {line}: item {item} outside declared universe of {universe} items")]
    ItemOutOfRange {
        line: usize,
        item: usize,
        universe: usize,
    },

    /// The header's transaction count disagrees with the rows that follow.
    #[error("header declares {declared} transactions but {actual} rows follow")]
    TransactionCountMismatch { declared: usize, actual: usize },

    #[error("minimum support must be a fraction in (0, 1], got {0}")]
    InvalidMinSupport(f64),

    /// Candidate generation for `level` would exceed the configured guard.
    #[error("level {level} would generate {candidates} candidates, limit is {limit}")]
    CandidateLimitExceeded {
        level: usize,
        candidates: usize,
        limit: usize,
    },

    #[error("mining cancelled before level {level}")]
    Cancelled { level: usize },

    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = AprioriError> = std::result::Result<T, E>;
