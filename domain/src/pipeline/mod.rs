//! Pipeline building blocks shared by all domains.
//!
//! - [`profile::StepProfile`]: temperature, token budget and timeout per step
//! - [`error::StageError`]: typed failure threaded through each stage

pub mod error;
pub mod profile;

pub use error::{StageError, StageErrorKind, StageResult, into_answer};
pub use profile::StepProfile;
