//! Infrastructure layer for answer-router
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileLoggingConfig,
    FilePathsConfig, FilePipelineConfig,
};
pub use logging::JsonlConversationLogger;
pub use openai::ChatCompletionsGateway;
pub use storage::{
    AnswerFileError, JsonAnswerFile, QuestionFileError, load_question_records, load_questions,
    read_answers, read_answers_lenient,
};
