//! SummarizeBestiary - The one use case of the bestiary
//!
//! 1. Fetch: ask the source for the raw creature list
//! 2. Validate: the payload must be a sequence
//! 3. Classify: keep the records that qualify as creatures
//! 4. Rank: difficulty, quickest swimmer, fastest fliers
//! 5. Report: three summary lines, or one error
//!
//! A run is all or nothing. If any step fails, the sink receives a
//! single error description and no summary lines.

use bestiary_domain::{admit, CreatureSource, Ranking, RawValue, SourceError};
use tracing::{debug, info};

use crate::error::BestiaryError;
use crate::loading::LoadingFlag;
use crate::summary::{Summary, SummarySink};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Summary emitted
    Completed,
    /// Error emitted
    Failed,
}

/// The summary use case, bound to one creature source
pub struct SummarizeBestiary<S> {
    source: S,
    ranking: Ranking,
    loading: LoadingFlag,
}

impl<S: CreatureSource> SummarizeBestiary<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            ranking: Ranking::new(),
            loading: LoadingFlag::new(),
        }
    }

    /// Builder: report progress through an existing flag
    pub fn with_loading_flag(mut self, loading: LoadingFlag) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading(&self) -> &LoadingFlag {
        &self.loading
    }

    /// Fetch, classify and rank. Errors propagate unchanged.
    pub async fn summarize(&self) -> Result<Summary, BestiaryError> {
        let payload = self.source.fetch().await?;

        let records = payload
            .into_sequence()
            .ok_or_else(|| SourceError::malformed("expected a list of creatures"))?;
        let received = records.len();

        let creatures = admit(records);
        debug!(
            received,
            admitted = creatures.len(),
            "Classified creature records"
        );

        let rankings = self.ranking.rank(&creatures)?;
        Ok(Summary::from(&rankings))
    }

    /// Run once and report to the sink.
    ///
    /// Never fails: errors are handed to the sink. The loading flag is
    /// raised for the duration of the run.
    pub async fn run(&self, sink: &mut impl SummarySink) -> RunOutcome {
        let _loading = self.loading.begin();

        match self.summarize().await {
            Ok(summary) => {
                info!(
                    creatures = summary.by_difficulty.len(),
                    fliers = summary.fastest_fliers.len(),
                    "Bestiary summary ready"
                );
                sink.summary(&summary);
                RunOutcome::Completed
            }
            Err(err) => {
                debug!(error = %err, "Bestiary run failed");
                sink.error(&err.to_string());
                RunOutcome::Failed
            }
        }
    }
}
