//! Error types for the bestiary use cases

use bestiary_domain::{RankingError, SourceError};
use thiserror::Error;

/// Anything that can abort a summary run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BestiaryError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Ranking(#[from] RankingError),
}
