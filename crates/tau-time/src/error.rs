//! Error types for tau instants

use thiserror::Error;

/// Errors from constructing instants out of text timestamps
#[derive(Error, Debug)]
pub enum TimeError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
}

/// Result type for tau-time operations
pub type TimeResult<T> = Result<T, TimeError>;
