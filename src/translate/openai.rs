//! HTTP client for OpenAI-compatible chat completions.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::{config::Settings, error::AppError, translate::ChatClient};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// Bounded output budget for the parameter mapping.
const MAX_TOKENS: u32 = 200;
/// Most deterministic sampling the API offers.
const TEMPERATURE: f32 = 0.0;

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Completion-provider client used by the query translator.
///
/// The credential is injected at construction; the client never reads the
/// process environment itself.
#[derive(Debug)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl OpenAiClient {
    /// Create a client with an explicit credential, model, and endpoint.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let base: String = base_url.into();
        let url = format!("{}{COMPLETIONS_PATH}", base.trim_end_matches('/'));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("building completion http client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            url,
        })
    }

    /// Build from loaded settings; fails with [`AppError::MissingCredential`]
    /// when no credential is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let key = settings
            .openai_api_key
            .as_deref()
            .ok_or(AppError::MissingCredential)?;
        Self::new(
            key,
            &settings.openai_model,
            &settings.openai_base_url,
            Duration::from_secs(settings.completion_timeout_secs),
        )
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = ApiRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Translation(format!("completion request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "completion provider returned an error");
            return Err(AppError::Translation(format!(
                "completion provider returned {status}"
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Translation(format!("malformed completion response: {e}")))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::Translation("completion response had no content".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_without_credential() -> Settings {
        Settings {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com".into(),
            openai_model: "gpt-4.1-mini".into(),
            registry_base_url: "https://clinicaltrials.gov".into(),
            registry_timeout_secs: 5,
            completion_timeout_secs: 30,
        }
    }

    #[test]
    fn missing_credential_is_rejected_at_construction() {
        let err = OpenAiClient::from_settings(&settings_without_credential()).unwrap_err();
        assert!(matches!(err, AppError::MissingCredential));
    }

    #[test]
    fn credential_present_builds_a_client() {
        let mut settings = settings_without_credential();
        settings.openai_api_key = Some("sk-test".into());
        assert!(OpenAiClient::from_settings(&settings).is_ok());
    }
}
