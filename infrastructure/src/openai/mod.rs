//! OpenAI-compatible chat-completions adapter
//!
//! Implements the [`LlmGateway`](router_application::LlmGateway) port over
//! plain HTTPS with `reqwest`.

pub mod gateway;
pub mod protocol;

pub use gateway::ChatCompletionsGateway;
