//! Creature Source - Abstract supplier of raw creature records
//!
//! This trait defines what the domain needs from the outside world:
//! one decoded payload, or a failure. Where it comes from (HTTP, a
//! file, memory) is not our concern here.

use crate::model::raw::RawValue;

/// Errors a creature source can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The call did not succeed (non-ok status, transport failure)
    FetchFailed { status: String },
    /// The payload could not be decoded, or is not a sequence
    MalformedPayload { message: String },
}

impl SourceError {
    pub fn fetch_failed(status: impl Into<String>) -> Self {
        SourceError::FetchFailed {
            status: status.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        SourceError::MalformedPayload {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for SourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SourceError::FetchFailed { status } => {
                write!(f, "Failed to fetch creatures: {}", status)
            }
            SourceError::MalformedPayload { message } => {
                write!(f, "Failed to parse creature data: {}", message)
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Creature Source Trait
///
/// This is a PORT in hexagonal architecture.
/// The domain defines what it needs; adapters provide implementations.
///
/// The returned value is the whole decoded payload. Checking that it
/// is a sequence is left to the caller, so a source never has to
/// trust the shape of what it received.
pub trait CreatureSource {
    /// Decoded value type produced by this source
    type Value: RawValue;

    /// Fetch the raw creature list
    fn fetch(
        &self,
    ) -> impl core::future::Future<Output = Result<Self::Value, SourceError>> + Send;
}
