//! Per-domain answer pipelines
//!
//! Each pipeline is a fixed sequence of LLM calls. A failed call ends the
//! pipeline with a [`StageError`](router_domain::StageError); only the math
//! pipeline tolerates failed samples.

mod coding;
mod common_sense;
mod math;
mod planning;
mod prediction;

pub use coding::CodingPipeline;
pub use common_sense::CommonSensePipeline;
pub use math::MathPipeline;
pub use planning::PlanningPipeline;
pub use prediction::FuturePredictionPipeline;
