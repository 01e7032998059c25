//! LLM Gateway port
//!
//! Defines the interface for reaching a chat-completion endpoint.
//! One call per pipeline step, no sessions, no streaming.

use async_trait::async_trait;
use router_domain::StepProfile;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Protocol(String),
}

impl GatewayError {
    /// Network failure, timeout or non-2xx status
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GatewayError::Transport(_) | GatewayError::Timeout | GatewayError::Status { .. }
        )
    }

    /// The endpoint answered 2xx but the body had no usable content
    pub fn is_protocol(&self) -> bool {
        matches!(self, GatewayError::Protocol(_))
    }
}

/// Chat role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One entry of a chat history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A single chat-completion request
///
/// The system prompt is optional; when absent the gateway supplies its
/// configured default. `messages` never contains a system message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub step: &'static str,
    pub system: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl CompletionRequest {
    /// System prompt plus one user prompt
    pub fn new(profile: StepProfile, system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            step: profile.name,
            system: Some(system.into()),
            messages: vec![ChatMessage::user(prompt)],
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
            timeout: profile.timeout,
        }
    }

    /// A multi-turn history sent after the gateway's default system prompt
    pub fn chat(profile: StepProfile, history: Vec<ChatMessage>) -> Self {
        Self {
            step: profile.name,
            system: None,
            messages: history,
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
            timeout: profile.timeout,
        }
    }

    /// Replace the default system prompt
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Text of the last user message, if any
    pub fn last_user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

/// Gateway for LLM communication
///
/// Implementations (adapters) live in the infrastructure layer. A call
/// returns the text of the first choice; there is no retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(GatewayError::Timeout.is_transport());
        assert!(
            GatewayError::Status {
                status: 502,
                body: "bad gateway".into()
            }
            .is_transport()
        );
        assert!(GatewayError::Protocol("no choices".into()).is_protocol());
        assert!(!GatewayError::Protocol("no choices".into()).is_transport());
    }

    #[test]
    fn test_request_from_profile() {
        let profile = StepProfile::new("math.solve", 0.7).with_max_tokens(512);
        let request = CompletionRequest::new(profile, "sys", "user prompt");
        assert_eq!(request.step, "math.solve");
        assert_eq!(request.system.as_deref(), Some("sys"));
        assert_eq!(request.max_tokens, 512);
        assert_eq!(request.last_user_prompt(), Some("user prompt"));
    }

    #[test]
    fn test_chat_request_uses_default_system() {
        let profile = StepProfile::new("chat", 0.2);
        let request = CompletionRequest::chat(
            profile,
            vec![
                ChatMessage::user("first"),
                ChatMessage::assistant("reply"),
                ChatMessage::user("second"),
            ],
        );
        assert!(request.system.is_none());
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.last_user_prompt(), Some("second"));

        let request = request.with_system("custom");
        assert_eq!(request.system.as_deref(), Some("custom"));
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&ChatMessage::assistant("x")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"x"}"#);
    }
}
