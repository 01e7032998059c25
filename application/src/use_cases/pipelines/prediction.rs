//! Future-prediction pipeline
//!
//! Independent predictions are judged into one, formatted as a boxed list
//! of strings and verified:
//!
//! ```text
//! sample ×N → aggregate → format → verify
//! ```

use crate::use_cases::shared::StepRunner;
use router_domain::{Fallback, Marker, PredictionPrompts, StageResult};
use tracing::debug;

pub struct FuturePredictionPipeline {
    samples: usize,
}

impl FuturePredictionPipeline {
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    pub async fn run(&self, steps: &StepRunner<'_>, question: &str) -> StageResult {
        let mut candidates = Vec::with_capacity(self.samples);
        for _ in 0..self.samples {
            let reply = steps
                .run(
                    PredictionPrompts::SAMPLE,
                    PredictionPrompts::sample_system(),
                    PredictionPrompts::sample(question),
                )
                .await?;
            candidates.push(marker_value(Marker::INTERNAL_PREDICTION, &reply));
        }
        debug!(?candidates, "Prediction candidates");

        let judged = steps
            .run(
                PredictionPrompts::AGGREGATE,
                PredictionPrompts::aggregate_system(),
                PredictionPrompts::aggregate(question, &candidates),
            )
            .await?;
        let aggregated = Marker::INTERNAL_PREDICTION
            .render(&marker_value(Marker::AGGREGATED_PREDICTION, &judged));

        let prediction = marker_value(Marker::INTERNAL_PREDICTION, &aggregated);
        let formatted = steps
            .run(
                PredictionPrompts::FORMAT,
                PredictionPrompts::format_system(),
                PredictionPrompts::format(&prediction, question),
            )
            .await?;

        let current = marker_value(Marker::LIST_PREDICTION, &formatted);
        let verified = steps
            .run(
                PredictionPrompts::VERIFY,
                PredictionPrompts::verify_system(),
                PredictionPrompts::verify(&current),
            )
            .await?;

        steps.require_text(
            PredictionPrompts::VERIFY.name,
            marker_value(Marker::FINAL_ANSWER, &verified),
            "Verifier returned an empty prediction",
        )
    }
}

/// Value after `marker`, or the whole trimmed reply
fn marker_value(marker: Marker, reply: &str) -> String {
    marker
        .find_or(reply, Fallback::WholeText)
        .unwrap_or_default()
}
