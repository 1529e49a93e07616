//! Error handling for vidlink

use thiserror::Error;

/// Main error type for vidlink
///
/// A URL that matches no provider is not an error; detection reports it as
/// `None`. These variants cover registry construction, settings and the
/// oEmbed round-trip.
#[derive(Debug, Error)]
pub enum VidlinkError {
    #[error("Invalid pattern for provider '{key}': {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern '{pattern}' of provider '{key}' has no capture group")]
    MissingCaptureGroup { key: String, pattern: String },

    #[error("Duplicate provider key: {0}")]
    DuplicateProvider(String),

    #[error("Invalid provider '{key}': {reason}")]
    InvalidProvider { key: String, reason: String },

    #[error("Invalid embed host '{0}': only letters, digits, '.' and '-' are allowed")]
    InvalidHost(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("oEmbed request failed: {0}")]
    OEmbedError(String),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, VidlinkError>;
