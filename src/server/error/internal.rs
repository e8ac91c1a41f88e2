use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Persisted Discord ids are stored as strings, so this indicates a corrupt row.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A background task panicked or could not be joined.
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}
