//! Error types for Marquee Core

use thiserror::Error;

/// Result type alias for player front-end operations
pub type Result<T> = std::result::Result<T, Error>;

/// Front-end error types
///
/// Expected-absence conditions (empty catalog, out-of-range selection,
/// missing host window, repeated teardown) are modeled as no-ops or empty
/// results, not as errors. These variants cover genuinely invalid input.
#[derive(Error, Debug)]
pub enum Error {
    // Source configuration errors
    #[error("invalid source uri: {0}")]
    InvalidSourceUri(#[from] url::ParseError),

    #[error("unsupported source scheme: {0}")]
    UnsupportedScheme(String),
}

impl Error {
    /// Returns the error code for log correlation
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidSourceUri(_) => "INVALID_SOURCE_URI",
            Error::UnsupportedScheme(_) => "UNSUPPORTED_SCHEME",
        }
    }
}
