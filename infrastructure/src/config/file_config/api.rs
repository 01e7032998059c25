//! Endpoint configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL; requests go to `{base_url}/chat/completions`
    pub base_url: String,
    /// Bearer token
    pub api_key: String,
    /// Model name sent in every request
    pub model: String,
    /// System prompt used by requests that do not bring their own
    pub system_prompt: String,
    /// Overrides every per-step timeout when set
    pub timeout_seconds: Option<u64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://10.4.58.53:41701/v1".to_string(),
            api_key: "cse476".to_string(),
            model: "bens_model".to_string(),
            system_prompt: "You are a helpful reasoning assistant.".to_string(),
            timeout_seconds: None,
        }
    }
}
