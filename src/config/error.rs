//! Configuration error types.

use thiserror::Error;

/// Problems found when loading or validating a [`CardConfig`](super::CardConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Failed to parse card configuration: {0}")]
    Parse(String),

    #[error("Failed to serialize card configuration: {0}")]
    Serialize(String),

    #[error("Card height must be positive and finite (got {0})")]
    NonPositiveHeight(f32),

    #[error("Duration '{field}' must be non-negative and finite (got {value})")]
    NegativeDuration { field: &'static str, value: f32 },

    /// Interactive drags need time to scrub through
    #[error("Duration '{field}' must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("Damping ratio '{field}' must be in (0, 1] (got {value})")]
    DampingOutOfRange { field: &'static str, value: f32 },

    #[error("Close threshold must be in [0, 1] (got {0})")]
    ThresholdOutOfRange(f32),

    #[error("Background opacity must be in [0, 1] (got {0})")]
    OpacityOutOfRange(f32),
}
