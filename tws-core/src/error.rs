//! Error types for loading dashboard data.
use thiserror::Error;

/// The single failure kind of the dashboard: one of the two resources could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a response
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("Request to {url} returned HTTP {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },

    /// The request was aborted after the configured timeout
    #[error("Request to {url} timed out after {timeout_ms} ms")]
    Timeout { url: String, timeout_ms: u32 },

    /// The body was not valid JSON for the expected resource
    #[error("Failed to parse {resource}: {source}")]
    Parse {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but did not have the expected shape
    #[error("Invalid {resource}: {reason}")]
    InvalidShape {
        resource: &'static str,
        reason: String,
    },
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
