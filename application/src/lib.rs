//! Application layer for answer-router
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{BehaviorConfig, PipelineConfig};
pub use ports::{
    answer_sink::{AnswerSink, AnswerSinkError, MemoryAnswerSink},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{ChatMessage, CompletionRequest, GatewayError, LlmGateway, Role},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::build_answers::{
    AnsweredQuestion, BuildAnswersError, BuildAnswersUseCase, BuildReport,
};
pub use use_cases::classify_domain::{
    Classification, ClassificationSource, ClassifyDomainUseCase, parse_classification,
};
pub use use_cases::pipelines::{
    CodingPipeline, CommonSensePipeline, FuturePredictionPipeline, MathPipeline, PlanningPipeline,
};
pub use use_cases::shared::StepRunner;
