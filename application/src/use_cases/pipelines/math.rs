//! Math pipeline: self-consistency over plan → solve → critique.

use crate::use_cases::shared::StepRunner;
use router_domain::{
    MathPrompts, NO_ANSWER_FOUND, StageError, StageErrorKind, StageResult, VoteTally,
    extract_answer, normalize_numeric,
};
use tracing::{debug, info};

const STAGE: &str = "math";

/// Solves numeric problems by majority vote over independent samples
pub struct MathPipeline {
    samples: usize,
}

impl MathPipeline {
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    pub async fn run(&self, steps: &StepRunner<'_>, question: &str) -> StageResult {
        let mut answers = Vec::with_capacity(self.samples);

        for sample in 0..self.samples {
            match self.sample(steps, question).await {
                Ok(answer) => {
                    debug!(sample, answer = %answer, "Math sample finished");
                    answers.push(answer);
                }
                // Already logged by the runner; the remaining samples still vote
                Err(e) => debug!(sample, "Math sample failed: {}", e),
            }
        }

        if answers.is_empty() {
            let error = StageError::new(STAGE, StageErrorKind::NoAnswer, "No answers generated");
            steps.record_failure(&error);
            return Err(error);
        }

        let tally = VoteTally::from_answers(
            answers
                .iter()
                .filter(|a| !a.contains("Error"))
                .map(|a| normalize_numeric(a)),
        );

        match tally.winner() {
            Some(winner) => {
                info!(votes = %tally.summary(), "Math vote");
                Ok(winner.to_string())
            }
            None => {
                // Every sample ended without a FINAL line
                let error =
                    StageError::new(STAGE, StageErrorKind::NoAnswer, first_message(&answers));
                steps.record_failure(&error);
                Err(error)
            }
        }
    }

    /// One plan → solve → critique pass. Returns the critique's `FINAL:`
    /// value, or the no-answer sentinel.
    async fn sample(&self, steps: &StepRunner<'_>, question: &str) -> StageResult {
        let plan = steps
            .run(
                MathPrompts::PLAN,
                MathPrompts::plan_system(),
                MathPrompts::plan(question),
            )
            .await?;
        let plan = plan.trim();

        let reasoning = steps
            .run(
                MathPrompts::SOLVE,
                MathPrompts::solve_system(),
                MathPrompts::solve(question, plan),
            )
            .await?;
        debug!(
            answer = extract_answer(&reasoning).as_deref().unwrap_or(NO_ANSWER_FOUND),
            "Solver answer before critique"
        );

        let critique = steps
            .run(
                MathPrompts::CRITIQUE,
                MathPrompts::critique_system(),
                MathPrompts::critique(question, plan, &reasoning),
            )
            .await?;

        Ok(extract_answer(&critique).unwrap_or_else(|| NO_ANSWER_FOUND.to_string()))
    }
}

/// Message of the first sample, without the error prefix `Answer::error` adds back
fn first_message(answers: &[String]) -> String {
    let first = answers.first().map(String::as_str).unwrap_or(NO_ANSWER_FOUND);
    first.strip_prefix("Error: ").unwrap_or(first).to_string()
}
