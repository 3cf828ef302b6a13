//! Runtime configuration for trial-scout.

use std::env;

use serde::Deserialize;

/// Default completion-provider endpoint (OpenAI-compatible).
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
/// Default completion model used for query translation.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";
/// Default ClinicalTrials.gov endpoint.
pub const DEFAULT_REGISTRY_BASE_URL: &str = "https://clinicaltrials.gov";

/// Application configuration resolved from `.env` and defaults.
///
/// All outbound-call parameters live here; nothing else in the crate reads
/// the process environment after startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Completion-provider credential (`OPENAI_API_KEY`). Optional at load
    /// time; the translator refuses to build without it.
    pub openai_api_key: Option<String>,
    /// Completion-provider base URL.
    pub openai_base_url: String,
    /// Completion model identifier.
    pub openai_model: String,
    /// Registry base URL.
    pub registry_base_url: String,
    /// Per-request timeout for the registry search, in seconds.
    pub registry_timeout_secs: u64,
    /// Per-request timeout for the completion call, in seconds.
    pub completion_timeout_secs: u64,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string());
        let registry_base_url = env::var("REGISTRY_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_REGISTRY_BASE_URL.to_string());
        let registry_timeout_secs = env::var("REGISTRY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        let completion_timeout_secs = env::var("COMPLETION_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            openai_api_key,
            openai_base_url,
            openai_model,
            registry_base_url,
            registry_timeout_secs,
            completion_timeout_secs,
        })
    }
}
