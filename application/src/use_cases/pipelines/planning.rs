//! Planning pipeline: extract → draft → validate → format → clean.
//!
//! The plan is never simulated locally. The last step only filters the
//! reply down to canonical `(action arg ...)` lines.

use crate::use_cases::shared::StepRunner;
use router_domain::{PlanningPrompts, StageError, StageErrorKind, StageResult, canonical_plan};
use tracing::debug;

pub struct PlanningPipeline;

impl PlanningPipeline {
    pub async fn run(&self, steps: &StepRunner<'_>, question: &str) -> StageResult {
        let normalized = steps
            .run(
                PlanningPrompts::EXTRACT,
                PlanningPrompts::extract_system(),
                PlanningPrompts::extract(question),
            )
            .await?;

        let draft = steps
            .run(
                PlanningPrompts::DRAFT,
                PlanningPrompts::draft_system(),
                PlanningPrompts::draft(&normalized),
            )
            .await?;

        let validated = steps
            .run(
                PlanningPrompts::VALIDATE,
                PlanningPrompts::validate_system(),
                PlanningPrompts::validate(&normalized, &draft),
            )
            .await?;

        let formatted = steps
            .run(
                PlanningPrompts::FORMAT,
                PlanningPrompts::format_system(),
                PlanningPrompts::format(&validated),
            )
            .await?;

        let cleaned = steps
            .run(
                PlanningPrompts::CLEAN,
                PlanningPrompts::clean_system(),
                PlanningPrompts::clean(&formatted),
            )
            .await?;

        let plan = canonical_plan(&cleaned);
        if plan.is_empty() {
            let error = StageError::new(
                PlanningPrompts::CLEAN.name,
                StageErrorKind::EmptyOutput,
                "Plan contained no action lines",
            );
            steps.record_failure(&error);
            return Err(error);
        }

        debug!(actions = plan.lines().count(), "Plan ready");
        Ok(plan)
    }
}
