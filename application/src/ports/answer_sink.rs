//! Answer sink port
//!
//! Answers are persisted one at a time as they are produced, so a run that
//! dies halfway still leaves every finished answer on disk.

use router_domain::Answer;
use thiserror::Error;

/// The sink could not persist an answer
#[derive(Error, Debug)]
#[error("Failed to write answers to {target}: {message}")]
pub struct AnswerSinkError {
    pub target: String,
    pub message: String,
}

impl AnswerSinkError {
    pub fn new(target: impl Into<String>, message: impl ToString) -> Self {
        Self {
            target: target.into(),
            message: message.to_string(),
        }
    }
}

/// Destination for answers, written incrementally
///
/// Call order is `begin`, any number of `append`, then `finish`.
pub trait AnswerSink: Send {
    /// Start a fresh output, discarding anything previously written
    fn begin(&mut self) -> Result<(), AnswerSinkError>;

    /// Persist one answer
    fn append(&mut self, answer: &Answer) -> Result<(), AnswerSinkError>;

    /// Close the output
    fn finish(&mut self) -> Result<(), AnswerSinkError>;
}

/// Keeps answers in memory
#[derive(Debug, Default)]
pub struct MemoryAnswerSink {
    answers: Vec<Answer>,
    finished: bool,
}

impl MemoryAnswerSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl AnswerSink for MemoryAnswerSink {
    fn begin(&mut self) -> Result<(), AnswerSinkError> {
        self.answers.clear();
        self.finished = false;
        Ok(())
    }

    fn append(&mut self, answer: &Answer) -> Result<(), AnswerSinkError> {
        self.answers.push(answer.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), AnswerSinkError> {
        self.finished = true;
        Ok(())
    }
}
