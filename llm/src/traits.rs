use async_trait::async_trait;
use thiserror::Error;

use crate::model::CompletionRequest;

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("network error: {0}")]
    Network(String),
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("client configuration error: {0}")]
    Config(String),
}

/// Something that can turn a [`CompletionRequest`] into generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `request` and return the content of the first completion choice.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError>;
}
