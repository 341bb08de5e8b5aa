//! Build errors for floating cards.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a floating card.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Card content not specified. Call .content(content) before .build()")]
    MissingContent,

    #[error("Invalid card configuration ({} problems)", .0.len())]
    InvalidConfig(Vec<ConfigError>),
}
