//! Output file shape validation
//!
//! Runs once, after every answer has been written and the file read back.
//! This is the only check that aborts a run.

use crate::core::answer::MAX_OUTPUT_CHARS;
use serde_json::Value;
use thiserror::Error;

/// A violation of the answer file contract, with the offending index
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Mismatched lengths: {questions} questions vs {answers} answers.")]
    LengthMismatch { questions: usize, answers: usize },

    #[error("Missing 'output' field for answer index {index}.")]
    MissingOutput { index: usize },

    #[error("Answer at index {index} has non-string output: {found}")]
    NonStringOutput { index: usize, found: &'static str },

    #[error("Answer at index {index} has an empty output.")]
    EmptyOutput { index: usize },

    #[error(
        "Answer at index {index} exceeds {limit} characters ({chars} chars). \
         Please make sure your answer does not include any intermediate results."
    )]
    TooLong {
        index: usize,
        chars: usize,
        limit: usize,
    },
}

impl ValidationError {
    /// Index of the offending answer, if the error concerns a single answer
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::LengthMismatch { .. } => None,
            ValidationError::MissingOutput { index }
            | ValidationError::NonStringOutput { index, .. }
            | ValidationError::EmptyOutput { index }
            | ValidationError::TooLong { index, .. } => Some(*index),
        }
    }
}

/// Limits applied by [`validate_answers`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerLimits {
    /// Outputs must have strictly fewer characters than this
    pub max_chars: usize,
}

impl Default for AnswerLimits {
    fn default() -> Self {
        Self {
            max_chars: MAX_OUTPUT_CHARS,
        }
    }
}

/// Validate answers read back from the output file against the question count.
///
/// Answers are raw JSON values so that a missing or non-string `output`
/// can be reported instead of failing deserialization.
pub fn validate_answers(
    question_count: usize,
    answers: &[Value],
    limits: AnswerLimits,
) -> Result<(), ValidationError> {
    if question_count != answers.len() {
        return Err(ValidationError::LengthMismatch {
            questions: question_count,
            answers: answers.len(),
        });
    }

    for (index, answer) in answers.iter().enumerate() {
        let output = answer
            .get("output")
            .ok_or(ValidationError::MissingOutput { index })?;

        let text = output.as_str().ok_or(ValidationError::NonStringOutput {
            index,
            found: json_type_name(output),
        })?;

        if text.is_empty() {
            return Err(ValidationError::EmptyOutput { index });
        }

        let chars = text.chars().count();
        if chars >= limits.max_chars {
            return Err(ValidationError::TooLong {
                index,
                chars,
                limit: limits.max_chars,
            });
        }
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn limits() -> AnswerLimits {
        AnswerLimits::default()
    }

    #[test]
    fn test_valid_answers() {
        let answers = vec![json!({"output": "42"}), json!({"output": "(feast d c)"})];
        assert!(validate_answers(2, &answers, limits()).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let answers = vec![json!({"output": "42"})];
        let err = validate_answers(2, &answers, limits()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                questions: 2,
                answers: 1
            }
        );
        assert!(err.index().is_none());
    }

    #[test]
    fn test_missing_output_reports_index() {
        let answers = vec![json!({"output": "ok"}), json!({"answer": "x"})];
        let err = validate_answers(2, &answers, limits()).unwrap_err();
        assert_eq!(err, ValidationError::MissingOutput { index: 1 });
    }

    #[test]
    fn test_non_string_output() {
        let answers = vec![json!({"output": 5})];
        let err = validate_answers(1, &answers, limits()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonStringOutput {
                index: 0,
                found: "number"
            }
        );
    }

    #[test]
    fn test_non_object_entry_is_missing_output() {
        let answers = vec![json!("bare string")];
        let err = validate_answers(1, &answers, limits()).unwrap_err();
        assert_eq!(err.index(), Some(0));
    }

    #[test]
    fn test_empty_output() {
        let answers = vec![json!({"output": ""})];
        let err = validate_answers(1, &answers, limits()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyOutput { index: 0 });
    }

    #[test]
    fn test_length_cap_is_exclusive() {
        let at_limit = "a".repeat(MAX_OUTPUT_CHARS);
        let under = "a".repeat(MAX_OUTPUT_CHARS - 1);
        let answers = vec![json!({"output": under}), json!({"output": at_limit})];

        let err = validate_answers(2, &answers, limits()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                index: 1,
                chars: MAX_OUTPUT_CHARS,
                limit: MAX_OUTPUT_CHARS
            }
        );
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 3 bytes per char, 2000 chars: over 5000 bytes but under the char cap
        let answers = vec![json!({"output": "预".repeat(2000)})];
        assert!(validate_answers(1, &answers, limits()).is_ok());
    }
}
