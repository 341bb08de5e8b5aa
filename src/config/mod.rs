//! Card configuration.
//!
//! [`CardConfig`] gathers every tunable of the card: geometry, timing, the
//! close threshold and backdrop dimming. It deserializes from JSON with
//! defaults for any missing field, and validation reports every problem at
//! once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use floating_card::config::CardConfig;
//!
//! let config = CardConfig::from_json(r#"{ "card_height": 420.0, "close_threshold": 0.25 }"#)
//!     .unwrap();
//! assert_eq!(config.card_height, 420.0);
//! assert_eq!(config.background_opacity, 0.3);
//! assert!(config.validate().is_success());
//! ```

use crate::animation::TransitionTiming;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::ConfigError;

/// Tunables of a floating card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Open height of the card; also the drag distance that maps to full
    /// progress.
    pub card_height: f32,

    /// Duration of programmatic open/close drives, in seconds
    pub animation_duration_secs: f32,

    pub animation_damping_ratio: f32,

    /// Duration of a transition materialized by a drag, in seconds
    pub interactive_duration_secs: f32,

    pub interactive_damping_ratio: f32,

    /// Release progress below which a drag snaps back
    pub close_threshold: f32,

    /// Backdrop alpha while the card is open
    pub background_opacity: f32,

    /// Register a third, drag-handle offset animation
    pub show_drag_handle: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            card_height: 300.0,
            animation_duration_secs: 0.5,
            animation_damping_ratio: 0.9,
            interactive_duration_secs: 1.0,
            interactive_damping_ratio: 0.8,
            close_threshold: 0.3,
            background_opacity: 0.3,
            show_drag_handle: false,
        }
    }
}

type Check = Validation<(), NonEmptyVec<ConfigError>>;

impl CardConfig {
    /// Parse a JSON document; missing fields take their defaults.
    ///
    /// Parsing does not validate; call [`validated`](Self::validated) for
    /// that.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check every field, accumulating all violations.
    pub fn validate(&self) -> Check {
        let checks: Vec<Check> = vec![
            check(
                self.card_height.is_finite() && self.card_height > 0.0,
                || ConfigError::NonPositiveHeight(self.card_height),
            ),
            non_negative_duration("animation_duration_secs", self.animation_duration_secs),
            non_negative_duration("interactive_duration_secs", self.interactive_duration_secs),
            check(self.interactive_duration_secs != 0.0, || {
                ConfigError::ZeroDuration {
                    field: "interactive_duration_secs",
                }
            }),
            damping("animation_damping_ratio", self.animation_damping_ratio),
            damping("interactive_damping_ratio", self.interactive_damping_ratio),
            check(unit_interval(self.close_threshold), || {
                ConfigError::ThresholdOutOfRange(self.close_threshold)
            }),
            check(unit_interval(self.background_opacity), || {
                ConfigError::OpacityOutOfRange(self.background_opacity)
            }),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Consume the config if it is valid, or return every violation.
    pub fn validated(self) -> Result<Self, Vec<ConfigError>> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }

    /// Timing of programmatic present/dismiss drives.
    pub fn drive_timing(&self) -> TransitionTiming {
        TransitionTiming::new(
            secs(self.animation_duration_secs),
            self.animation_damping_ratio,
        )
    }

    /// Timing of transitions materialized by a drag.
    pub fn interactive_timing(&self) -> TransitionTiming {
        TransitionTiming::new(
            secs(self.interactive_duration_secs),
            self.interactive_damping_ratio,
        )
    }
}

fn check(ok: bool, error: impl FnOnce() -> ConfigError) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(error())
    }
}

fn non_negative_duration(field: &'static str, value: f32) -> Check {
    check(value.is_finite() && value >= 0.0, || {
        ConfigError::NegativeDuration { field, value }
    })
}

fn damping(field: &'static str, value: f32) -> Check {
    check(value > 0.0 && value <= 1.0, || ConfigError::DampingOutOfRange {
        field,
        value,
    })
}

fn unit_interval(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CardConfig::default();
        assert!(config.validate().is_success());
        assert_eq!(config.card_height, 300.0);
        assert_eq!(config.close_threshold, 0.3);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = CardConfig {
            card_height: -1.0,
            animation_damping_ratio: 1.5,
            close_threshold: 2.0,
            background_opacity: -0.1,
            ..CardConfig::default()
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::NonPositiveHeight(_))));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ConfigError::DampingOutOfRange {
                        field: "animation_damping_ratio",
                        ..
                    }
                )));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::ThresholdOutOfRange(_))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::OpacityOutOfRange(_))));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn zero_interactive_duration_is_rejected() {
        let config = CardConfig {
            interactive_duration_secs: 0.0,
            ..CardConfig::default()
        };
        let errors = config.validated().unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigError::ZeroDuration {
                field: "interactive_duration_secs"
            }]
        );
    }

    #[test]
    fn zero_drive_duration_is_allowed() {
        let config = CardConfig {
            animation_duration_secs: 0.0,
            ..CardConfig::default()
        };
        assert!(config.validate().is_success());
        assert!(config.drive_timing().is_immediate());
    }

    #[test]
    fn nan_values_are_rejected() {
        let config = CardConfig {
            card_height: f32::NAN,
            interactive_damping_ratio: f32::NAN,
            ..CardConfig::default()
        };
        assert!(config.validate().is_failure());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = CardConfig::from_json(r#"{ "show_drag_handle": true }"#).unwrap();
        assert!(config.show_drag_handle);
        assert_eq!(config.animation_duration_secs, 0.5);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = CardConfig::from_json("{ card_height: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn json_round_trip() {
        let config = CardConfig {
            card_height: 512.0,
            ..CardConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(CardConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn timings_follow_config() {
        let config = CardConfig::default();
        assert_eq!(config.drive_timing().duration, Duration::from_millis(500));
        assert_eq!(config.interactive_timing().duration, Duration::from_secs(1));
        assert_eq!(config.interactive_timing().curve.damping_ratio(), 0.8);
    }
}
