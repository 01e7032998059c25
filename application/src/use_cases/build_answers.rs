//! Build Answers use case
//!
//! Runs every question through classification and its domain pipeline, in
//! order, one at a time, and hands each answer to the sink as soon as it
//! exists. Per-question failures become `Error: ...` answers; only a sink
//! failure stops the run.

use crate::config::{BehaviorConfig, PipelineConfig};
use crate::ports::answer_sink::{AnswerSink, AnswerSinkError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::classify_domain::ClassifyDomainUseCase;
use crate::use_cases::pipelines::{
    CodingPipeline, CommonSensePipeline, FuturePredictionPipeline, MathPipeline, PlanningPipeline,
};
use crate::use_cases::shared::StepRunner;
use router_domain::{
    Answer, Question, StageError, StageResult, TaskDomain, into_answer, preview,
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that stop an answer run
#[derive(Error, Debug)]
pub enum BuildAnswersError {
    #[error(transparent)]
    Sink(#[from] AnswerSinkError),
}

/// One answered question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    /// `None` when the question failed before it could be routed
    pub domain: Option<TaskDomain>,
    pub answer: Answer,
}

/// Summary of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub total: usize,
    pub errors: usize,
    /// Questions that never reached a pipeline
    pub unrouted: usize,
    per_domain: HashMap<TaskDomain, usize>,
}

impl BuildReport {
    /// Count one answered question
    pub fn record(&mut self, answered: &AnsweredQuestion) {
        self.total += 1;
        if answered.answer.is_error() {
            self.errors += 1;
        }
        match answered.domain {
            Some(domain) => *self.per_domain.entry(domain).or_default() += 1,
            None => self.unrouted += 1,
        }
    }

    /// Questions routed to `domain`
    pub fn count(&self, domain: TaskDomain) -> usize {
        self.per_domain.get(&domain).copied().unwrap_or(0)
    }

    pub fn succeeded(&self) -> usize {
        self.total - self.errors
    }
}

/// Use case for answering a whole question set
pub struct BuildAnswersUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn ConversationLogger>,
    pipeline: PipelineConfig,
    behavior: BehaviorConfig,
}

impl<G: LlmGateway + 'static> BuildAnswersUseCase<G> {
    pub fn new(gateway: Arc<G>, pipeline: PipelineConfig, behavior: BehaviorConfig) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoConversationLogger),
            pipeline,
            behavior,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        questions: &[Question],
        sink: &mut dyn AnswerSink,
    ) -> Result<BuildReport, BuildAnswersError> {
        self.execute_with_progress(questions, sink, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        questions: &[Question],
        sink: &mut dyn AnswerSink,
        progress: &dyn ProgressNotifier,
    ) -> Result<BuildReport, BuildAnswersError> {
        info!("Answering {} questions", questions.len());
        progress.on_run_start(questions.len());
        sink.begin()?;

        let mut report = BuildReport::default();
        for (index, question) in questions.iter().enumerate() {
            let answered = self.answer(index, question, progress).await;

            let chars = answered.answer.char_len();
            if chars >= self.pipeline.max_output_chars {
                warn!(
                    index,
                    chars,
                    limit = self.pipeline.max_output_chars,
                    "Answer exceeds the output limit"
                );
            }

            sink.append(&answered.answer)?;
            self.logger.log(ConversationEvent::answer_written(
                index,
                answered.domain,
                answered.answer.output(),
            ));
            progress.on_question_complete(index, answered.domain, !answered.answer.is_error());
            report.record(&answered);
        }

        sink.finish()?;
        progress.on_run_complete();
        info!(
            total = report.total,
            errors = report.errors,
            "Finished answering questions"
        );
        Ok(report)
    }

    /// Route and answer a single question. Never fails; errors become
    /// `Error: ...` answers.
    pub async fn answer(
        &self,
        index: usize,
        question: &Question,
        progress: &dyn ProgressNotifier,
    ) -> AnsweredQuestion {
        info!(index, question = %preview(question.input(), 60), "Processing question");

        if let Err(error) = question.validate() {
            let error = StageError::from(error);
            warn!(index, "{}", error);
            self.logger.log(ConversationEvent::stage_failed(&error));
            return AnsweredQuestion {
                domain: None,
                answer: error.to_answer(),
            };
        }

        let steps = StepRunner::new(&*self.gateway, &*self.logger, &self.behavior);

        let classification = match ClassifyDomainUseCase::new(&self.pipeline)
            .execute(&steps, question)
            .await
        {
            Ok(classification) => classification,
            Err(error) => {
                return AnsweredQuestion {
                    domain: None,
                    answer: error.to_answer(),
                };
            }
        };

        let domain = classification.domain;
        info!(index, domain = %domain, "Routed question");
        self.logger.log(ConversationEvent::question_classified(
            index,
            domain,
            classification.source.as_str(),
        ));
        progress.on_question_classified(index, domain);

        let result = self
            .solve(&steps, domain, question.input())
            .await
            .and_then(|text| steps.require_text("answer", text, "Pipeline returned an empty answer"));
        AnsweredQuestion {
            domain: Some(domain),
            answer: into_answer(result),
        }
    }

    async fn solve(&self, steps: &StepRunner<'_>, domain: TaskDomain, question: &str) -> StageResult {
        match domain {
            TaskDomain::Math => {
                MathPipeline::new(self.pipeline.math_samples)
                    .run(steps, question)
                    .await
            }
            TaskDomain::Coding => CodingPipeline.run(steps, question).await,
            TaskDomain::FuturePrediction => {
                FuturePredictionPipeline::new(self.pipeline.prediction_samples)
                    .run(steps, question)
                    .await
            }
            TaskDomain::Planning => PlanningPipeline.run(steps, question).await,
            TaskDomain::CommonSense => CommonSensePipeline.run(steps, question).await,
        }
    }
}
