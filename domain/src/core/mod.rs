//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a question read from the input file
//! - [`answer::Answer`]: a single `{output}` record
//! - [`task_domain::TaskDomain`]: the five routing labels
//! - [`error::DomainError`]: domain-level errors

pub mod answer;
pub mod error;
pub mod question;
pub mod string;
pub mod task_domain;
