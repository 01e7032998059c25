//! Stage errors
//!
//! Each pipeline step returns `Result<String, StageError>`. The error keeps
//! enough structure for callers to tell a transport failure from a reply
//! that never produced a usable value, without sniffing answer strings.

use crate::core::answer::Answer;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a stage failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageErrorKind {
    /// Network failure, timeout or non-2xx HTTP status
    Transport,
    /// The endpoint answered, but not with `choices[0].message.content`
    Protocol,
    /// Every sample failed, so there is nothing to aggregate
    NoAnswer,
    /// Post-processing left nothing to return
    EmptyOutput,
    /// The question itself cannot be processed
    InvalidInput,
}

impl StageErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageErrorKind::Transport => "transport",
            StageErrorKind::Protocol => "protocol",
            StageErrorKind::NoAnswer => "no_answer",
            StageErrorKind::EmptyOutput => "empty_output",
            StageErrorKind::InvalidInput => "invalid_input",
        }
    }
}

/// A failed pipeline stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StageError {
    stage: String,
    kind: StageErrorKind,
    message: String,
}

impl From<DomainError> for StageError {
    fn from(error: DomainError) -> Self {
        Self::new("input", StageErrorKind::InvalidInput, error.to_string())
    }
}

/// Result of a pipeline stage or of a whole pipeline
pub type StageResult<T = String> = Result<T, StageError>;

impl StageError {
    pub fn new(
        stage: impl Into<String>,
        kind: StageErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stage: stage.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn transport(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(stage, StageErrorKind::Transport, message)
    }

    pub fn protocol(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(stage, StageErrorKind::Protocol, message)
    }

    /// The step that failed, e.g. `math.solve`
    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn kind(&self) -> StageErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render as an answer record: `Error: <message>`
    pub fn to_answer(&self) -> Answer {
        Answer::error(&self.message)
    }
}

/// Collapse a pipeline result into the answer that goes to the output file
pub fn into_answer(result: StageResult) -> Answer {
    match result {
        Ok(text) => Answer::new(text),
        Err(error) => error.to_answer(),
    }
}
