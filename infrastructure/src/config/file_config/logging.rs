//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of prompts and replies
    pub conversation_log: Option<PathBuf>,
    /// Diagnostic log file, in addition to stderr
    pub file: Option<PathBuf>,
}
