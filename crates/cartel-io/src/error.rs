//! Error types for reading festival sources.

use thiserror::Error;

/// Why a single festival line could not be turned into a festival.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Fewer than five colon-separated fields.
    #[error("expected at least 5 fields (name:venue:date:days:style), found {found}")]
    MissingFields { found: usize },

    /// The start date is not in `dd-mm-yyyy` form.
    #[error("invalid start date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    /// The duration is not a non-negative integer.
    #[error("invalid duration '{value}': {source}")]
    InvalidDuration {
        value: String,
        source: std::num::ParseIntError,
    },

    /// A style token is not one of the known styles.
    #[error("unknown style '{0}'")]
    UnknownStyle(String),

    /// The fields parsed but do not form a valid festival.
    #[error(transparent)]
    InvalidFestival(#[from] cartel_core::Error),
}

/// Errors that can occur while loading a whole festival source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line failed to parse. Loading stops at the first bad line.
    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },
}

impl LoadError {
    /// The 1-based line number of a parse failure.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}

/// Convenience alias for load results.
pub type LoadResult<T> = std::result::Result<T, LoadError>;
