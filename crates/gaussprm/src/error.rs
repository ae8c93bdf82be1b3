//! Error type shared by samplers, roadmap learning, and the planner.
//!
//! Recovery policy
//! - `SamplingExhausted` is recovered locally by roadmap learning (the node attempt is skipped).
//! - `InvalidConfig`, `InvalidLimits`, and `InvalidInput` abort a planning call.
//! - "No path" is not an error; the planner reports it as an empty path.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PrmError {
    /// Planner or sampler parameters are out of range.
    InvalidConfig { reason: String },
    /// The collision checker reported unusable environment limits.
    InvalidLimits { reason: String },
    /// Start or goal list has no collision-free entry.
    InvalidInput { reason: String },
    /// A sampler spent its retry budget without producing a configuration.
    SamplingExhausted { evaluations: usize },
}

impl PrmError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_limits(reason: impl Into<String>) -> Self {
        Self::InvalidLimits {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for failures that roadmap learning absorbs by skipping the attempt.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::SamplingExhausted { .. })
    }
}

impl fmt::Display for PrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid planner config: {reason}"),
            Self::InvalidLimits { reason } => write!(f, "invalid environment limits: {reason}"),
            Self::InvalidInput { reason } => write!(f, "invalid start/goal input: {reason}"),
            Self::SamplingExhausted { evaluations } => write!(
                f,
                "sampler exhausted its retry budget after {evaluations} evaluations"
            ),
        }
    }
}

impl std::error::Error for PrmError {}
