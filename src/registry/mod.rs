//! ClinicalTrials.gov v2 search client.

pub mod summary;

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::{config::Settings, error::AppError, translate::ParamMap};

const STUDIES_PATH: &str = "/api/v2/studies";

#[derive(Debug, Deserialize)]
struct StudiesResponse {
    #[serde(default)]
    studies: Vec<Value>,
}

/// Single-attempt fetcher for the registry's studies-search operation.
#[derive(Clone)]
pub struct RegistryFetcher {
    client: reqwest::Client,
    url: String,
}

impl RegistryFetcher {
    /// Build a fetcher against an explicit base URL with a bounded timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let base: String = base_url.into();
        let url = format!("{}{STUDIES_PATH}", base.trim_end_matches('/'));
        let client = reqwest::Client::builder()
            .user_agent(concat!("trial-scout/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("building registry http client: {e}")))?;
        Ok(Self { client, url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        Self::new(
            &settings.registry_base_url,
            Duration::from_secs(settings.registry_timeout_secs),
        )
    }

    /// Run one search with the translated parameters. An empty `studies`
    /// array is a successful empty result, not an error. No retries.
    pub async fn fetch_studies(&self, params: &ParamMap) -> Result<Vec<Value>, AppError> {
        let mut query: Vec<(&str, String)> = vec![("format", "json".to_string())];
        for (key, value) in params {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            query.push((key.as_str(), rendered));
        }

        let response = self
            .client
            .get(&self.url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("registry request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("registry returned {status}")));
        }

        let payload: StudiesResponse = response
            .json()
            .await
            .map_err(|e| AppError::Fetch(format!("malformed registry response: {e}")))?;

        info!(count = payload.studies.len(), "registry search complete");
        Ok(payload.studies)
    }
}
