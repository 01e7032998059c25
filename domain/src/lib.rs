//! Domain layer for answer-router
//!
//! Pure types and text logic. No I/O, no async, no knowledge of how the
//! model is reached.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! Every [`Question`] is assigned one [`TaskDomain`] and answered by that
//! domain's pipeline. The result is always an [`Answer`]; failures become
//! `Error: <message>` answers instead of aborting the run.
//!
//! ## Markers
//!
//! Pipelines ask the model to end with a keyword such as `FINAL:` or
//! `FINAL_ANSWER:`. [`Marker`] parses those replies into `Option`s and a
//! named [`Fallback`] decides what happens when the marker is missing.

pub mod core;
pub mod extraction;
pub mod pipeline;
pub mod prompt;
pub mod validation;

// Re-export commonly used types
pub use self::core::{
    answer::{Answer, ERROR_PREFIX, MAX_OUTPUT_CHARS},
    error::DomainError,
    question::Question,
    string::preview,
    task_domain::{TaskDomain, UnknownDomain},
};
pub use extraction::{
    Fallback, Marker, MarkerSpan, NO_ANSWER_FOUND, Occurrence, VoteTally, canonical_plan,
    extract_answer, majority_vote, normalize_numeric, strip_code_fences,
    strip_fences_and_language_tag,
};
pub use pipeline::{StageError, StageErrorKind, StageResult, StepProfile, into_answer};
pub use prompt::{
    ClassifierPrompts, CodingPrompts, CommonSensePrompts, MathPrompts, PlanningPrompts,
    PredictionPrompts,
};
pub use validation::{AnswerLimits, ValidationError, validate_answers};
