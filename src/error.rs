//! Error type shared by configuration loading, content export and the terminal front end.
//!
//! The active-section scan itself is total and never produces one of these.

use thiserror::Error;

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up or driving the page.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Terminal or filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("Invalid config {path}: {reason}")]
    Config {
        /// File the configuration was read from.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// Content could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A section name did not match any anchor on the page.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// The log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}
