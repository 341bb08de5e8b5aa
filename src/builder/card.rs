//! Builder for constructing floating cards.

use crate::builder::error::BuildError;
use crate::card::FloatingCard;
use crate::config::CardConfig;
use crate::engine::CloseObserverRef;

/// Builder for [`FloatingCard`] with a fluent API.
pub struct FloatingCardBuilder<C> {
    content: Option<C>,
    config: CardConfig,
    close_observer: Option<CloseObserverRef>,
}

impl<C> FloatingCardBuilder<C> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            content: None,
            config: CardConfig::default(),
            close_observer: None,
        }
    }

    /// Set the card content (required).
    pub fn content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: CardConfig) -> Self {
        self.config = config;
        self
    }

    /// Observer notified when the card settles closed. Held weakly.
    pub fn close_observer(mut self, observer: CloseObserverRef) -> Self {
        self.close_observer = Some(observer);
        self
    }

    /// Build the card.
    /// Returns an error if content is missing or the configuration is invalid.
    pub fn build(self) -> Result<FloatingCard<C>, BuildError> {
        let content = self.content.ok_or(BuildError::MissingContent)?;
        let config = self.config.validated().map_err(BuildError::InvalidConfig)?;
        Ok(FloatingCard::new(content, config, self.close_observer))
    }
}

impl<C> Default for FloatingCardBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
