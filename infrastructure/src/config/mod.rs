//! Configuration file loading for answer-router
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Command-line flags (applied by the binary)
//! 2. Environment: `API_BASE`, `OPENAI_API_KEY`, `MODEL_NAME`
//! 3. `--config <path>` specified file
//! 4. Project root: `./answer-router.toml` or `./.answer-router.toml`
//! 5. Global: `$XDG_CONFIG_HOME/answer-router/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileApiConfig, FileConfig, FileLoggingConfig, FilePathsConfig,
    FilePipelineConfig,
};
pub use loader::ConfigLoader;
