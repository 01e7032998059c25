//! Coding pipeline: plan → generate → critique → remove preamble.
//!
//! The code is never executed; correctness is left to the critique step.

use crate::use_cases::shared::StepRunner;
use router_domain::{
    CodingPrompts, Fallback, Marker, StageResult, strip_code_fences,
    strip_fences_and_language_tag,
};

pub struct CodingPipeline;

impl CodingPipeline {
    pub async fn run(&self, steps: &StepRunner<'_>, question: &str) -> StageResult {
        let plan = steps
            .run(
                CodingPrompts::PLAN,
                CodingPrompts::plan_system(),
                CodingPrompts::plan(question),
            )
            .await?;
        let plan = plan.trim();

        let code = steps
            .run(
                CodingPrompts::GENERATE,
                CodingPrompts::generate_system(),
                CodingPrompts::generate(question, plan),
            )
            .await?;
        let code = strip_code_fences(&code);

        let review = steps
            .run(
                CodingPrompts::CRITIQUE,
                CodingPrompts::critique_system(),
                CodingPrompts::critique(question, plan, &code),
            )
            .await?;
        let final_code = final_code(&review);

        let body = steps
            .run(
                CodingPrompts::REMOVE_PREAMBLE,
                CodingPrompts::remove_preamble_system(),
                CodingPrompts::remove_preamble(question, &final_code),
            )
            .await?;

        steps.require_text(
            CodingPrompts::REMOVE_PREAMBLE.name,
            strip_fences_and_language_tag(&body),
            "Preamble remover returned no code",
        )
    }
}

/// Code after the last `FINAL CODE:` marker, or the whole review
fn final_code(review: &str) -> String {
    let code = Marker::FINAL_CODE
        .find_or(review, Fallback::WholeText)
        .unwrap_or_default();
    strip_fences_and_language_tag(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorConfig;
    use crate::ports::conversation_logger::NoConversationLogger;
    use crate::ports::llm_gateway::GatewayError;
    use crate::test_support::ScriptedGateway;
    use router_domain::StageErrorKind;

    #[test]
    fn test_final_code_uses_last_marker() {
        let review = "FINAL CODE: draft\nOn reflection...\nFINAL CODE:\n```python\ndef f():\n    return 1\n```";
        assert_eq!(final_code(review), "def f():\n    return 1");
    }

    #[test]
    fn test_final_code_without_marker() {
        assert_eq!(final_code("```\nx = 1\n```"), "x = 1");
    }

    #[tokio::test]
    async fn test_pipeline_steps_and_cleanup() {
        let gateway = ScriptedGateway::with_texts([
            "1. Loop. 2. Sum.",
            "```python\ndef task_func(xs):\n    return sum(xs)\n```",
            "All requirements hold.\nFINAL CODE:\n```python\ndef task_func(xs):\n    return sum(xs)\n```",
            "```python\n    return sum(xs)\n```",
        ]);
        let behavior = BehaviorConfig::default();
        let steps = StepRunner::new(&gateway, &NoConversationLogger, &behavior);

        let code = CodingPipeline.run(&steps, "Sum a list").await.unwrap();
        assert_eq!(code, "return sum(xs)");
        assert_eq!(
            gateway.steps(),
            vec![
                "coding.plan",
                "coding.generate",
                "coding.critique",
                "coding.remove_preamble"
            ]
        );

        // The critic sees fence-free code from the generator
        let critique = gateway.requests()[2].last_user_prompt().unwrap().to_string();
        assert!(critique.contains("Code:\ndef task_func(xs):\n    return sum(xs)\n\n"));

        // The preamble remover gets the critic's final code
        let remover = gateway.requests()[3].last_user_prompt().unwrap().to_string();
        assert!(remover.contains("Full Solution Code:\ndef task_func(xs):"));
    }

    #[tokio::test]
    async fn test_bare_fence_from_remover_is_empty_output() {
        let gateway = ScriptedGateway::with_texts([
            "plan",
            "def f():\n    return 1",
            "FINAL CODE:\ndef f():\n    return 1",
            "```",
        ]);
        let behavior = BehaviorConfig::default();
        let steps = StepRunner::new(&gateway, &NoConversationLogger, &behavior);

        let err = CodingPipeline.run(&steps, "q").await.unwrap_err();
        assert_eq!(err.kind(), StageErrorKind::EmptyOutput);
        assert_eq!(err.stage(), "coding.remove_preamble");
        assert_eq!(
            err.to_answer().output(),
            "Error: Preamble remover returned no code"
        );
    }

    #[tokio::test]
    async fn test_error_stops_pipeline() {
        let gateway = ScriptedGateway::new(vec![
            Ok("plan".into()),
            Err(GatewayError::Status {
                status: 500,
                body: "boom".into(),
            }),
        ]);
        let behavior = BehaviorConfig::default();
        let steps = StepRunner::new(&gateway, &NoConversationLogger, &behavior);

        let err = CodingPipeline.run(&steps, "q").await.unwrap_err();
        assert_eq!(err.kind(), StageErrorKind::Transport);
        assert_eq!(err.stage(), "coding.generate");
        assert_eq!(err.to_answer().output(), "Error: HTTP 500: boom");
        assert_eq!(gateway.requests().len(), 2);
    }
}
