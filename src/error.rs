//! Error types for readable-md.
//!
//! Extraction itself absorbs every internal failure (bad markup, bad URLs,
//! broken JSON-LD). The only error surfaced to callers is an invalid
//! configuration.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An option value is outside its documented range.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
