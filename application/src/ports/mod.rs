//! Port definitions
//!
//! Interfaces implemented by the infrastructure and presentation layers.

pub mod answer_sink;
pub mod conversation_logger;
pub mod llm_gateway;
pub mod progress;
