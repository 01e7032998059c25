//! Common-sense pipeline: self-answered sub-questions → solve → extract.

use crate::use_cases::shared::StepRunner;
use router_domain::{CommonSensePrompts, StageResult};

pub struct CommonSensePipeline;

impl CommonSensePipeline {
    pub async fn run(&self, steps: &StepRunner<'_>, question: &str) -> StageResult {
        let context = steps
            .run(
                CommonSensePrompts::SUBQUESTIONS,
                CommonSensePrompts::subquestions_system(),
                CommonSensePrompts::subquestions(question),
            )
            .await?;

        let reasoning = steps
            .run(
                CommonSensePrompts::SOLVE,
                CommonSensePrompts::solve_system(),
                CommonSensePrompts::solve(question, context.trim()),
            )
            .await?;

        let answer = steps
            .run(
                CommonSensePrompts::EXTRACT,
                CommonSensePrompts::extract_system(),
                CommonSensePrompts::extract(question, reasoning.trim()),
            )
            .await?;

        steps.require_text(
            CommonSensePrompts::EXTRACT.name,
            answer.trim().to_string(),
            "Extractor returned an empty answer",
        )
    }
}
