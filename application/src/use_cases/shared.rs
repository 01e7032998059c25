//! Shared utilities for use cases.
//!
//! [`StepRunner`] issues one LLM call per pipeline step, records it in the
//! transcript and converts gateway failures into [`StageError`]s.

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use router_domain::{StageError, StageErrorKind, StageResult, StepProfile, preview};
use tracing::{debug, warn};

/// Executes single pipeline steps against the gateway
pub struct StepRunner<'a> {
    gateway: &'a dyn LlmGateway,
    logger: &'a dyn ConversationLogger,
    behavior: &'a BehaviorConfig,
}

impl<'a> StepRunner<'a> {
    pub fn new(
        gateway: &'a dyn LlmGateway,
        logger: &'a dyn ConversationLogger,
        behavior: &'a BehaviorConfig,
    ) -> Self {
        Self {
            gateway,
            logger,
            behavior,
        }
    }

    /// Send `system` + `prompt` with the step's generation settings
    pub async fn run(&self, profile: StepProfile, system: &str, prompt: String) -> StageResult {
        let request = CompletionRequest::new(self.behavior.profile(profile), system, prompt);
        self.send(&request).await
    }

    /// Send a prepared request
    pub async fn send(&self, request: &CompletionRequest) -> StageResult {
        let prompt = request.last_user_prompt().unwrap_or_default();
        debug!(step = request.step, prompt = %preview(prompt, 80), "Sending step");
        self.logger.log(ConversationEvent::llm_request(
            request.step,
            request.system.as_deref(),
            prompt,
        ));

        match self.gateway.complete(request).await {
            Ok(text) => {
                debug!(step = request.step, chars = text.len(), "Step completed");
                self.logger
                    .log(ConversationEvent::llm_response(request.step, &text));
                Ok(text)
            }
            Err(e) => {
                let error = stage_error(request.step, &e);
                warn!(step = request.step, "Step failed: {}", e);
                self.logger.log(ConversationEvent::stage_failed(&error));
                Err(error)
            }
        }
    }

    /// Pass `text` through unless it is blank, which fails `stage` with
    /// `EmptyOutput`
    pub fn require_text(&self, stage: &str, text: String, message: &str) -> StageResult {
        if text.trim().is_empty() {
            let error = StageError::new(stage, StageErrorKind::EmptyOutput, message);
            self.record_failure(&error);
            return Err(error);
        }
        Ok(text)
    }

    /// Record a failure that happened after the reply came back
    pub fn record_failure(&self, error: &StageError) {
        warn!(step = error.stage(), kind = error.kind().as_str(), "{}", error);
        self.logger.log(ConversationEvent::stage_failed(error));
    }
}

fn stage_error(step: &str, error: &GatewayError) -> StageError {
    if error.is_protocol() {
        StageError::protocol(step, error.to_string())
    } else {
        StageError::transport(step, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingLogger, ScriptedGateway};
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_applies_profile_and_override() {
        let gateway = ScriptedGateway::with_texts(["ok"]);
        let logger = RecordingLogger::default();
        let behavior = BehaviorConfig::with_timeout_seconds(7);
        let runner = StepRunner::new(&gateway, &logger, &behavior);

        let profile = StepProfile::new("math.plan", 0.7).with_max_tokens(300);
        let text = runner.run(profile, "sys", "prompt".into()).await.unwrap();
        assert_eq!(text, "ok");

        let request = &gateway.requests()[0];
        assert_eq!(request.step, "math.plan");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, 300);
        assert_eq!(request.timeout, Duration::from_secs(7));
        assert_eq!(logger.event_types(), vec!["llm_request", "llm_response"]);
    }

    #[tokio::test]
    async fn test_gateway_errors_become_stage_errors() {
        let gateway = ScriptedGateway::new(vec![
            Err(GatewayError::Timeout),
            Err(GatewayError::Protocol("missing choices".into())),
        ]);
        let logger = RecordingLogger::default();
        let behavior = BehaviorConfig::default();
        let runner = StepRunner::new(&gateway, &logger, &behavior);
        let profile = StepProfile::new("coding.plan", 0.2);

        let err = runner.run(profile, "s", "p".into()).await.unwrap_err();
        assert_eq!(err.kind(), StageErrorKind::Transport);
        assert_eq!(err.stage(), "coding.plan");
        assert_eq!(err.message(), "Request timed out");

        let err = runner.run(profile, "s", "p".into()).await.unwrap_err();
        assert_eq!(err.kind(), StageErrorKind::Protocol);
        assert_eq!(
            logger.event_types(),
            vec!["llm_request", "stage_failed", "llm_request", "stage_failed"]
        );
    }

    #[test]
    fn test_require_text_rejects_blank_output() {
        let gateway = ScriptedGateway::with_texts(Vec::<String>::new());
        let logger = RecordingLogger::default();
        let behavior = BehaviorConfig::default();
        let runner = StepRunner::new(&gateway, &logger, &behavior);

        assert_eq!(
            runner.require_text("coding.remove_preamble", "x = 1".into(), "empty"),
            Ok("x = 1".to_string())
        );

        let err = runner
            .require_text("coding.remove_preamble", " \n\t".into(), "Code was empty")
            .unwrap_err();
        assert_eq!(err.kind(), StageErrorKind::EmptyOutput);
        assert_eq!(err.stage(), "coding.remove_preamble");
        assert_eq!(err.message(), "Code was empty");
        assert_eq!(logger.event_types(), vec!["stage_failed"]);
    }
}
