//! In-Memory Creature Source
//!
//! Returns the same payload (or the same failure) on every fetch.
//! Useful for testing and development.

use std::future::Future;

use bestiary_domain::{CreatureSource, SourceError};
use serde_json::Value;

use crate::gateway::json_record::JsonRecord;

/// In-memory Creature Source
#[derive(Debug, Clone)]
pub struct InMemoryCreatureSource {
    response: Result<Value, SourceError>,
}

impl InMemoryCreatureSource {
    /// A source that always answers with this payload
    pub fn new(payload: Value) -> Self {
        Self {
            response: Ok(payload),
        }
    }

    /// A source that always fails with this error
    pub fn failing(error: SourceError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl CreatureSource for InMemoryCreatureSource {
    type Value = JsonRecord;

    fn fetch(&self) -> impl Future<Output = Result<JsonRecord, SourceError>> + Send {
        let response = self.response.clone().map(JsonRecord::new);
        async move { response }
    }
}
