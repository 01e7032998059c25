//! Input file: a JSON array of `{"input": ..., "domain"?: ...}`

use router_domain::Question;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum QuestionFileError {
    #[error("Failed to read questions from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid question file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the questions to answer, in file order
pub fn load_questions(path: &Path) -> Result<Vec<Question>, QuestionFileError> {
    let text = read(path)?;
    let questions: Vec<Question> =
        serde_json::from_str(&text).map_err(|source| QuestionFileError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Load the raw records, keeping every field (for display)
pub fn load_question_records(path: &Path) -> Result<Vec<Value>, QuestionFileError> {
    let text = read(path)?;
    serde_json::from_str(&text).map_err(|source| QuestionFileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, QuestionFileError> {
    fs::read_to_string(path).map_err(|source| QuestionFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
