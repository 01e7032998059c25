//! Task domain value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five answer domains a question can be routed to (Value Object)
///
/// Labels are the upper-case tokens the classifier prompt asks the model
/// to emit after `FINAL:`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskDomain {
    Math,
    Coding,
    FuturePrediction,
    Planning,
    #[default]
    CommonSense,
}

impl TaskDomain {
    /// All domains, in keyword-scan order.
    ///
    /// When the classifier response carries no usable `FINAL:` label, the
    /// first label from this list found anywhere in the response wins.
    pub const ALL: [TaskDomain; 5] = [
        TaskDomain::Math,
        TaskDomain::Coding,
        TaskDomain::FuturePrediction,
        TaskDomain::Planning,
        TaskDomain::CommonSense,
    ];

    /// Get the upper-case label for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskDomain::Math => "MATH",
            TaskDomain::Coding => "CODING",
            TaskDomain::FuturePrediction => "FUTURE_PREDICTION",
            TaskDomain::Planning => "PLANNING",
            TaskDomain::CommonSense => "COMMON_SENSE",
        }
    }

    /// Short human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskDomain::Math => "math",
            TaskDomain::Coding => "coding",
            TaskDomain::FuturePrediction => "future prediction",
            TaskDomain::Planning => "planning",
            TaskDomain::CommonSense => "common sense",
        }
    }

    /// Find the first domain label mentioned anywhere in `text`.
    ///
    /// Matching is case-insensitive and follows [`TaskDomain::ALL`] order.
    pub fn scan(text: &str) -> Option<TaskDomain> {
        let upper = text.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|domain| upper.contains(domain.as_str()))
    }
}

impl fmt::Display for TaskDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not a known domain label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task domain: {0}")]
pub struct UnknownDomain(pub String);

impl FromStr for TaskDomain {
    type Err = UnknownDomain;

    /// Accepts labels case-insensitively, with `_`, `-` or spaces between words
    /// (`FUTURE_PREDICTION`, `future-prediction`, `common sense`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        match normalized.as_str() {
            "MATH" => Ok(TaskDomain::Math),
            "CODING" | "CODE" => Ok(TaskDomain::Coding),
            "FUTURE_PREDICTION" => Ok(TaskDomain::FuturePrediction),
            "PLANNING" => Ok(TaskDomain::Planning),
            "COMMON_SENSE" | "COMMONSENSE" => Ok(TaskDomain::CommonSense),
            _ => Err(UnknownDomain(s.to_string())),
        }
    }
}
