//! The [`ToneConverter`] and the request/result types it works with.

use std::sync::Arc;

use llm::{CompletionClient, CompletionRequest, LLMError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::persona::Persona;

/// Model used unless [`ToneConverter::with_model`] overrides it.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// Text to convert and the audience to convert it for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConversionRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "target_persona")]
    pub persona: Option<String>,
}

impl ConversionRequest {
    pub fn new(text: impl Into<String>, persona: Option<&str>) -> Self {
        Self {
            text: Some(text.into()),
            persona: persona.map(str::to_string),
        }
    }

    /// The text to convert, unless it is absent or empty.
    fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Successful conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub converted_text: String,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Missing 'text' in request")]
    InvalidRequest,
    #[error("Server configuration error: AI service unavailable")]
    ServiceUnavailable,
    #[error("Failed to process request: {0}")]
    ServiceError(#[from] LLMError),
}

/// Rewrites text for a [`Persona`] through a completion service.
///
/// The client is optional: a converter built without one rejects every
/// conversion with [`ConvertError::ServiceUnavailable`] and never touches
/// the network.
#[derive(Clone)]
pub struct ToneConverter {
    client: Option<Arc<dyn CompletionClient>>,
    model: String,
}

impl ToneConverter {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self::from_client(Some(client))
    }

    pub fn unconfigured() -> Self {
        Self::from_client(None)
    }

    pub fn from_client(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the outbound request for `text` addressed to `persona`.
    pub fn completion_request(&self, text: &str, persona: Persona) -> CompletionRequest {
        CompletionRequest::new(self.model.clone(), persona.instruction(), text)
    }

    /// Convert `request.text` into the tone of `request.persona`.
    ///
    /// Validation happens first, then the configuration check, and only then
    /// the single call to the completion service.
    pub async fn convert(&self, request: ConversionRequest) -> Result<Conversion, ConvertError> {
        let text = request.text().ok_or(ConvertError::InvalidRequest)?;
        let client = self
            .client
            .as_ref()
            .ok_or(ConvertError::ServiceUnavailable)?;

        let persona = Persona::from_label(request.persona.as_deref());
        let completion = self.completion_request(text, persona);
        debug!(%persona, model = %self.model, chars = text.len(), "converting text");

        match client.complete(&completion).await {
            Ok(converted_text) => Ok(Conversion { converted_text }),
            Err(e) => {
                error!(error = %e, "completion request failed");
                Err(ConvertError::ServiceError(e))
            }
        }
    }
}
