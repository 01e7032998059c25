//! Answer value object

use serde::{Deserialize, Serialize};

/// Answers must stay strictly below this many characters.
pub const MAX_OUTPUT_CHARS: usize = 5000;

/// Prefix marking an answer produced from a failure rather than a model reply.
pub const ERROR_PREFIX: &str = "Error: ";

/// A single answer record in the output file (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    output: String,
}

impl Answer {
    /// Create an answer from pipeline output
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Create an error answer: `Error: <message>`
    pub fn error(message: impl AsRef<str>) -> Self {
        Self {
            output: format!("{}{}", ERROR_PREFIX, message.as_ref()),
        }
    }

    /// Get the answer text
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Length in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.output.chars().count()
    }

    /// Whether this answer records a failure
    pub fn is_error(&self) -> bool {
        self.output.starts_with(ERROR_PREFIX)
    }
}
