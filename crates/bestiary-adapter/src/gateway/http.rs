//! HttpCreatureSource - Fetch the creature list over HTTP
//!
//! One GET per run. No retries, no pagination, no authentication.

use std::future::Future;
use std::time::Duration;

use bestiary_domain::{CreatureSource, SourceError};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::json_record::JsonRecord;
use crate::error::AdapterError;

/// Default endpoint of the creature API
pub const DEFAULT_CREATURE_URL: &str = "https://www.api.com/creatures/list";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Creature API client
#[derive(Debug, Clone)]
pub struct HttpCreatureSource {
    http: Client,
    url: Url,
}

impl HttpCreatureSource {
    /// Create a new client for the given endpoint
    pub fn new(url: &str, timeout: Duration) -> Result<Self, AdapterError> {
        let url = Url::parse(url).map_err(|e| AdapterError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl CreatureSource for HttpCreatureSource {
    type Value = JsonRecord;

    fn fetch(&self) -> impl Future<Output = Result<JsonRecord, SourceError>> + Send {
        async move {
            debug!(url = %self.url, "Fetching creature list");

            let response = self
                .http
                .get(self.url.clone())
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| SourceError::fetch_failed(e.to_string()))?;

            check_status(response.status())?;

            let value: Value = response
                .json()
                .await
                .map_err(|e| SourceError::malformed(e.to_string()))?;

            Ok(JsonRecord::new(value))
        }
    }
}

/// Map a non-success status to a fetch failure carrying its description
fn check_status(status: StatusCode) -> Result<(), SourceError> {
    if status.is_success() {
        return Ok(());
    }

    warn!(%status, "Creature API returned an error status");
    let description = status.canonical_reason().unwrap_or(status.as_str());
    Err(SourceError::fetch_failed(description))
}
