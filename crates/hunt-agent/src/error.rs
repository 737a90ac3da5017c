//! Agent construction errors.

use thiserror::Error;

/// Rejected agent configurations.  Raised only by the builders.
#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error("{0} must be positive")]
    ZeroMaximum(&'static str),

    #[error("speed {0} must be at least 1")]
    NonPositiveSpeed(i32),

    #[error("evasion chance {0} outside [0, 1]")]
    EvasionOutOfRange(f32),

    #[error("{what} {value} exceeds its maximum {max}")]
    AboveMaximum { what: &'static str, value: f32, max: f32 },

    #[error("{what} {value} must not be negative")]
    Negative { what: &'static str, value: f32 },

    #[error("agent id is the INVALID sentinel")]
    InvalidId,
}

pub type AgentResult<T> = Result<T, AgentError>;
