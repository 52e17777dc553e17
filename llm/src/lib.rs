//! Client for a remote chat-completion service.
//!
//! The `llm` crate defines a [`CompletionClient`] trait along with the
//! [`GroqClient`] implementation, which talks to any OpenAI-compatible
//! `/chat/completions` endpoint. Callers describe a single exchange with a
//! [`CompletionRequest`] and get back the text of the first choice.

pub mod client;
pub mod model;
pub mod traits;

pub use client::{GroqClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use model::{ChatMessage, CompletionRequest, CompletionResponse, Role};
pub use traits::{CompletionClient, LLMError};
