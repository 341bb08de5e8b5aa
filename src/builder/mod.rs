//! Builder API for floating cards.
//!
//! Construction fails fast: a card without content or with an invalid
//! configuration is a programming error, reported by [`BuildError`] before any
//! animation is registered.

pub mod card;
pub mod error;

pub use card::FloatingCardBuilder;
pub use error::BuildError;

use crate::card::FloatingCard;

/// Build a card around `content` with the default configuration.
///
/// # Example
///
/// ```
/// use floating_card::builder::floating_card;
/// use floating_card::core::CardState;
///
/// let mut card = floating_card(vec!["Newest", "Oldest", "Price"]).unwrap();
/// card.present();
/// assert!(!card.engine().interactions_enabled());
/// assert_eq!(card.state(), CardState::Closed);
/// ```
pub fn floating_card<C>(content: C) -> Result<FloatingCard<C>, BuildError> {
    FloatingCardBuilder::new().content(content).build()
}
