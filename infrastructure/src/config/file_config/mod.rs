//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod logging;
mod paths;
mod pipeline;

pub use api::FileApiConfig;
pub use logging::FileLoggingConfig;
pub use paths::FilePathsConfig;
pub use pipeline::FilePipelineConfig;

use router_application::{BehaviorConfig, PipelineConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.model cannot be empty")]
    EmptyModelName,

    #[error("api.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("pipeline.{0} must be at least 1")]
    ZeroSamples(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat-completion endpoint
    pub api: FileApiConfig,
    /// Sampling and routing
    pub pipeline: FilePipelineConfig,
    /// Question and answer files
    pub paths: FilePathsConfig,
    /// Transcript and diagnostic log files
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Reject settings no run could succeed with
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.api.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.pipeline.math_samples == 0 {
            return Err(ConfigValidationError::ZeroSamples("math_samples"));
        }
        if self.pipeline.prediction_samples == 0 {
            return Err(ConfigValidationError::ZeroSamples("prediction_samples"));
        }
        Ok(())
    }

    pub fn behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.api.timeout_seconds)
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        self.pipeline.to_pipeline_config()
    }
}
