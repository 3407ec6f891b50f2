use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the search engine.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The frontier emptied before any goal (or resolved candidate) was found.
    #[error("search space exhausted after expanding {expanded} entries without reaching a goal")]
    ExhaustedSearchSpace { expanded: u64 },

    /// Raised when grid rows are empty or not all the same width.
    #[error("invalid grid: {message}")]
    InvalidGrid { message: String },

    /// Raised when search options could not be interpreted.
    #[error("invalid search options: {message}")]
    InvalidOptions { message: String },

    /// Raised when an options file could not be read.
    #[error("failed to read search options from {path}: {source}")]
    OptionsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is the definite "no solution" outcome of a search.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::ExhaustedSearchSpace { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_message_mentions_expansions() {
        let error = Error::ExhaustedSearchSpace { expanded: 7 };
        assert!(error.is_exhausted());
        assert!(format!("{error}").contains("after expanding 7 entries"));
    }

    #[test]
    fn grid_error_is_not_exhaustion() {
        let error = Error::InvalidGrid {
            message: "ragged rows".to_string(),
        };
        assert!(!error.is_exhausted());
        assert_eq!(format!("{error}"), "invalid grid: ragged rows");
    }
}
