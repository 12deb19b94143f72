//! Question source error types.
//!
//! Every way a question list can fail to load. These are surfaced to the
//! user before anything reaches the engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while obtaining a question list.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The path does not name a `.json` file.
    #[error("not a JSON file: {0}")]
    NotJson(PathBuf),

    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON.
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level value is not an array.
    #[error("{0} must contain an array of questions")]
    NotAnArray(String),

    /// The array holds no questions.
    #[error("{0} contains no questions")]
    Empty(String),

    /// An item is missing a required field or has an empty one (1-based index).
    #[error("question {index} has an invalid structure: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// A network error occurred.
    #[error("network error fetching {url}: {message}")]
    Fetch { url: String, message: String },
}
