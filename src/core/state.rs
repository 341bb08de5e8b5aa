//! The binary card state.
//!
//! A card is either resting open on screen or hidden below it. There are no
//! intermediate states: anything in between is a transition, tracked by the
//! engine rather than by this type.

use serde::{Deserialize, Serialize};

/// Resting state of a floating card.
///
/// # Example
///
/// ```rust
/// use floating_card::core::CardState;
///
/// let state = CardState::Opened;
/// assert_eq!(state.next(), CardState::Closed);
/// assert_eq!(state.next().next(), state);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum CardState {
    /// The card rests at its open position with the backdrop dimmed.
    Opened,
    /// The card is hidden below the screen edge.
    #[default]
    Closed,
}

impl CardState {
    /// The opposite state, the only one a transition can target.
    pub fn next(self) -> Self {
        match self {
            Self::Opened => Self::Closed,
            Self::Closed => Self::Opened,
        }
    }

    /// Map the engine's visibility flag onto a state.
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Self::Opened
        } else {
            Self::Closed
        }
    }

    /// Whether this state shows the card.
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Opened)
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Opened => "Opened",
            Self::Closed => "Closed",
        }
    }
}
