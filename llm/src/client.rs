//! HTTP client for Groq's OpenAI-compatible chat completions API.
//!
//! This module provides the [`GroqClient`] type which implements the
//! [`CompletionClient`] trait. Any server speaking the same
//! `/chat/completions` protocol can be targeted by changing the base URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{CompletionRequest, CompletionResponse};
use crate::traits::{CompletionClient, LLMError};

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Upper bound on a single completion round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct GroqClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GroqClient {
    /// Create a client authenticating with `api_key` against `base_url`
    /// (e.g. `https://api.groq.com/openai/v1`).
    ///
    /// # Errors
    ///
    /// Returns [`LLMError::Config`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl AsRef<str>,
        timeout: Duration,
    ) -> Result<Self, LLMError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LLMError::Config(e.to_string()))?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: format!("{}/chat/completions", base_url.as_ref().trim_end_matches('/')),
        })
    }

    /// Full URL completions are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

fn api_error(status: u16, body: String) -> LLMError {
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body,
    };
    LLMError::Api { status, message }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError> {
        debug!(endpoint = %self.endpoint, model = %request.model, "requesting completion");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }

        let body: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;
        body.into_first_content()
    }
}
