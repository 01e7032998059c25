//! Pipeline configuration from TOML (`[pipeline]` section)

use router_application::PipelineConfig;
use router_domain::{MAX_OUTPUT_CHARS, TaskDomain};
use serde::{Deserialize, Serialize};

/// Raw pipeline configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    pub math_samples: usize,
    pub prediction_samples: usize,
    /// Label used when the classifier names none, e.g. `"COMMON_SENSE"`
    pub classification_fallback: TaskDomain,
    pub use_domain_hints: bool,
    pub max_output_chars: usize,
}

impl Default for FilePipelineConfig {
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

impl FilePipelineConfig {
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            math_samples: self.math_samples,
            prediction_samples: self.prediction_samples,
            classification_fallback: self.classification_fallback,
            use_domain_hints: self.use_domain_hints,
            max_output_chars: self.max_output_chars,
        }
    }
}
