//! Per-step generation settings

use std::time::Duration;

/// Sampling and transport settings for one pipeline step
///
/// Every step has a stable name (`planning.extract`, `math.solve`, ...)
/// used in logs and stage errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepProfile {
    pub name: &'static str,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl StepProfile {
    /// Token budget used when a step does not ask for more
    pub const DEFAULT_MAX_TOKENS: u32 = 256;

    /// Timeout used when a step does not ask for more
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// A step with the default token budget and timeout
    pub const fn new(name: &'static str, temperature: f64) -> Self {
        Self {
            name,
            temperature,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub const fn with_timeout_secs(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    /// Replace the timeout when an override is configured
    pub fn with_timeout_override(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.timeout = timeout;
        }
        self
    }
}
