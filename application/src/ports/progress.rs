//! Progress notification port
//!
//! Defines the interface for reporting progress while answers are built.

use router_domain::TaskDomain;

/// Callback for progress updates during an answer run
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first question
    fn on_run_start(&self, total_questions: usize);

    /// Called when a question has been routed
    fn on_question_classified(&self, _index: usize, _domain: TaskDomain) {}

    /// Called after the answer for a question was written.
    ///
    /// `domain` is `None` when the question failed before classification.
    fn on_question_complete(&self, index: usize, domain: Option<TaskDomain>, success: bool);

    /// Called once after the last answer
    fn on_run_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_run_start(&self, _total_questions: usize) {}
    fn on_question_complete(&self, _index: usize, _domain: Option<TaskDomain>, _success: bool) {}
}
