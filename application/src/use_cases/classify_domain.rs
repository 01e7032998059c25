//! Classify Domain use case
//!
//! Routes a question to one of the five task domains. The result is always
//! a valid [`TaskDomain`]; only a failed LLM call is an error.

use crate::config::PipelineConfig;
use crate::use_cases::shared::StepRunner;
use router_domain::{ClassifierPrompts, Marker, Question, StageResult, TaskDomain};
use tracing::debug;

/// How a domain was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    /// The question's own `domain` field
    Hint,
    /// `FINAL: <LABEL>` in the classifier reply
    Marker,
    /// A label mentioned elsewhere in the reply
    KeywordScan,
    /// Nothing usable in the reply
    Fallback,
}

impl ClassificationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationSource::Hint => "hint",
            ClassificationSource::Marker => "marker",
            ClassificationSource::KeywordScan => "keyword_scan",
            ClassificationSource::Fallback => "fallback",
        }
    }
}

/// Outcome of classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub domain: TaskDomain,
    pub source: ClassificationSource,
}

/// Parse a classifier reply.
///
/// An unrecognized `FINAL:` label counts as no label, so the keyword scan
/// and then `fallback` apply.
pub fn parse_classification(reply: &str, fallback: TaskDomain) -> Classification {
    if let Some(domain) = Marker::FINAL_LABEL
        .find(reply)
        .and_then(|label| label.parse::<TaskDomain>().ok())
    {
        return Classification {
            domain,
            source: ClassificationSource::Marker,
        };
    }

    match TaskDomain::scan(reply) {
        Some(domain) => Classification {
            domain,
            source: ClassificationSource::KeywordScan,
        },
        None => Classification {
            domain: fallback,
            source: ClassificationSource::Fallback,
        },
    }
}

/// Use case for routing a question
pub struct ClassifyDomainUseCase {
    fallback: TaskDomain,
    use_hints: bool,
}

impl ClassifyDomainUseCase {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            fallback: config.classification_fallback,
            use_hints: config.use_domain_hints,
        }
    }

    pub async fn execute(
        &self,
        steps: &StepRunner<'_>,
        question: &Question,
    ) -> StageResult<Classification> {
        if self.use_hints
            && let Some(domain) = question.hinted_domain()
        {
            debug!(domain = %domain, "Using domain hint");
            return Ok(Classification {
                domain,
                source: ClassificationSource::Hint,
            });
        }

        let reply = steps
            .run(
                ClassifierPrompts::CLASSIFY,
                ClassifierPrompts::system(),
                ClassifierPrompts::classify(question.input()),
            )
            .await?;

        let classification = parse_classification(&reply, self.fallback);
        debug!(
            domain = %classification.domain,
            source = classification.source.as_str(),
            "Classified question"
        );
        Ok(classification)
    }
}
