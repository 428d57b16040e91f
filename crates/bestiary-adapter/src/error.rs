//! Error types for the adapter layer

use thiserror::Error;

/// Errors raised while building an adapter
///
/// Failures during a fetch are reported as the domain's `SourceError`.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
