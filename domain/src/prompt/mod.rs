//! Prompt domain
//!
//! Templates and generation profiles for every LLM call a pipeline makes.
//! Each template struct pairs `*_system()` prompts with user prompt builders
//! and exposes one [`StepProfile`](crate::pipeline::StepProfile) per step.

mod classifier;
mod coding;
mod common_sense;
mod math;
mod planning;
mod prediction;

pub use classifier::ClassifierPrompts;
pub use coding::CodingPrompts;
pub use common_sense::CommonSensePrompts;
pub use math::MathPrompts;
pub use planning::PlanningPrompts;
pub use prediction::PredictionPrompts;
