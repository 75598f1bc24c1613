//! Error handling for claim analytics.
//!
//! Both analysis pipelines degrade gracefully on malformed input, so the
//! taxonomy is deliberately narrow: a missing required identifier is the
//! only rejection the core itself produces. The remaining variants surface
//! from loading raw record files in the binary driver.

use std::io;

/// Specialized error type for claim analytics operations
#[derive(Debug, thiserror::Error)]
pub enum ClaimscanError {
    /// A query was made without the provider identifier it requires
    #[error("provider id is required")]
    MissingProviderId,

    /// Error opening or reading a record file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding raw records from JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for claim analytics operations
pub type Result<T> = std::result::Result<T, ClaimscanError>;
