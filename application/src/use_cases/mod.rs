//! Use cases
//!
//! - [`classify_domain`] routes a question to a [`TaskDomain`](router_domain::TaskDomain)
//! - [`pipelines`] answer a routed question
//! - [`build_answers`] runs a whole question file through both

pub mod build_answers;
pub mod classify_domain;
pub mod pipelines;
pub mod shared;
