//! Wire types for the OpenAI-compatible chat-completions API.
//!
//! Only the fields this client sends or reads are modelled; everything else
//! in the response is ignored.

use router_application::ports::llm_gateway::{GatewayError, Role};
use serde::{Deserialize, Serialize};

/// `POST /chat/completions` request body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Chat message as sent on the wire
#[derive(Debug, Serialize)]
pub struct WireMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

/// Response body
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`
    pub fn into_text(self) -> Result<String, GatewayError> {
        self.choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::Protocol("response has no choices".to_string()))?
            .message
            .and_then(|m| m.content)
            .ok_or_else(|| GatewayError::Protocol("first choice has no message content".to_string()))
    }
}

/// Parse a 2xx response body into the reply text
pub fn parse_completion(body: &str) -> Result<String, GatewayError> {
    serde_json::from_str::<ChatCompletionResponse>(body)
        .map_err(|e| GatewayError::Protocol(format!("invalid response body: {}", e)))?
        .into_text()
}
