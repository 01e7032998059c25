//! Application-level configuration.
//!
//! Types that control how use cases behave: call timeouts, sample counts
//! and the routing policy. Loaded from files by the infrastructure layer.

use router_domain::{MAX_OUTPUT_CHARS, StepProfile, TaskDomain};
use std::time::Duration;

/// Application behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Replaces every per-step timeout when set.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
        }
    }

    /// If `seconds` is `None`, each step keeps its own timeout.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
        }
    }

    /// Apply the override to a step profile
    pub fn profile(&self, profile: StepProfile) -> StepProfile {
        profile.with_timeout_override(self.timeout)
    }
}

/// Pipeline and routing settings
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Independent plan/solve/critique runs voted over by the math pipeline
    pub math_samples: usize,
    /// Independent predictions handed to the judge
    pub prediction_samples: usize,
    /// Domain used when the classifier reply names no label
    pub classification_fallback: TaskDomain,
    /// Trust a recognized `domain` field on the question and skip the classifier
    pub use_domain_hints: bool,
    /// Answers must be strictly shorter than this
    pub max_output_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            math_samples: 3,
            prediction_samples: 3,
            classification_fallback: TaskDomain::CommonSense,
            use_domain_hints: false,
            max_output_chars: MAX_OUTPUT_CHARS,
        }
    }
}

impl PipelineConfig {
    pub fn with_math_samples(mut self, samples: usize) -> Self {
        self.math_samples = samples;
        self
    }

    pub fn with_prediction_samples(mut self, samples: usize) -> Self {
        self.prediction_samples = samples;
        self
    }

    pub fn with_fallback(mut self, domain: TaskDomain) -> Self {
        self.classification_fallback = domain;
        self
    }

    pub fn with_domain_hints(mut self, enabled: bool) -> Self {
        self.use_domain_hints = enabled;
        self
    }
}
