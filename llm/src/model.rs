//! Request and response shapes for a chat completion.
//!
//! A [`CompletionRequest`] describes one system instruction plus one user
//! message. It serializes to the OpenAI-compatible wire format understood by
//! [`crate::GroqClient`]; [`CompletionResponse`] is the matching reply.

use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

use crate::traits::LLMError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A single system-instruction + user-text exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub user_text: String,
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl CompletionRequest {
    /// Sampling temperature used unless overridden.
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;
    /// Upper bound on generated tokens used unless overridden.
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

    pub fn new(
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        user_text: impl Into<String>,
    ) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_text: user_text.into(),
            model: model.into(),
            temperature: Self::DEFAULT_TEMPERATURE,
            max_output_tokens: Self::DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// The system message followed by the user message.
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::new(Role::System, self.system_instruction.clone()),
            ChatMessage::new(Role::User, self.user_text.clone()),
        ]
    }
}

impl Serialize for CompletionRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("CompletionRequest", 4)?;
        body.serialize_field("model", &self.model)?;
        body.serialize_field("messages", &self.messages())?;
        body.serialize_field("temperature", &self.temperature)?;
        body.serialize_field("max_tokens", &self.max_output_tokens)?;
        body.end()
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Content of the first choice, verbatim.
    pub fn into_first_content(self) -> Result<String, LLMError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::InvalidResponse("no completion choices returned".into()))?;
        choice.message.content.ok_or_else(|| {
            LLMError::InvalidResponse("completion choice has no message content".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_chat_wire_format() {
        let req = CompletionRequest::new("m", "be formal", "hi there");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["model"], "m");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "be formal");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hi there");
        assert_eq!(value["temperature"], 0.7);
        assert_eq!(value["max_tokens"], 1024);
    }

    #[test]
    fn first_content_is_returned_verbatim() {
        let resp: CompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Dear boss,\n"}},{"message":{"content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.into_first_content().unwrap(), "  Dear boss,\n");
    }

    #[test]
    fn empty_choices_are_invalid() {
        let resp: CompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            resp.into_first_content(),
            Err(LLMError::InvalidResponse(_))
        ));
    }

    #[test]
    fn null_content_is_invalid() {
        let resp: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(resp.into_first_content().is_err());
    }
}
