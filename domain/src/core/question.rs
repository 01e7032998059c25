//! Question value object

use super::error::DomainError;
use super::task_domain::TaskDomain;
use serde::{Deserialize, Serialize};

/// A question read from the input file (Value Object)
///
/// Only `input` is required. Development data sets also carry a `domain`
/// field, which can be used as a routing hint instead of asking the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
}

impl Question {
    /// Create a new question without a domain hint
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            domain: None,
        }
    }

    /// Attach a domain hint (as found in the `domain` field of the input file)
    pub fn with_domain_hint(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Get the question text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get the raw domain hint, if any
    pub fn domain_hint(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// The domain hint parsed as a [`TaskDomain`], if present and recognized
    pub fn hinted_domain(&self) -> Option<TaskDomain> {
        self.domain.as_deref().and_then(|d| d.parse().ok())
    }

    /// Whether the question text is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Reject questions no pipeline can answer
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_blank() {
            return Err(DomainError::InvalidQuestion("empty input".to_string()));
        }
        Ok(())
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}
