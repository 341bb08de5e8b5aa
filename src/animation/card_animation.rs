//! Per-property card animations.

use super::value::AnimatedValue;
use crate::core::CardState;
use serde::{Deserialize, Serialize};

/// Which visual property a [`CardAnimation`] drives.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum AnimatedProperty {
    /// Vertical offset of the card below its resting position.
    CardOffset,
    /// Alpha of the dimming layer behind the card.
    BackdropOpacity,
    /// Vertical offset of the drag handle above the card.
    HandleOffset,
}

impl AnimatedProperty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CardOffset => "CardOffset",
            Self::BackdropOpacity => "BackdropOpacity",
            Self::HandleOffset => "HandleOffset",
        }
    }
}

/// One animatable property and the value it takes in each card state.
///
/// Stateless apart from the shared property cell: [`apply`](Self::apply) can
/// be called any number of times and always produces the same result.
///
/// # Example
///
/// ```rust
/// use floating_card::animation::{AnimatedValue, CardAnimation};
/// use floating_card::core::CardState;
///
/// let opacity = AnimatedValue::new(0.0);
/// let animation = CardAnimation::backdrop_opacity(opacity.clone(), 0.3);
///
/// animation.apply(CardState::Opened);
/// assert_eq!(opacity.get(), 0.3);
/// animation.apply(CardState::Closed);
/// assert_eq!(opacity.get(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct CardAnimation {
    property: AnimatedProperty,
    target: AnimatedValue,
    opened: f32,
    closed: f32,
}

impl CardAnimation {
    pub fn new(
        property: AnimatedProperty,
        target: AnimatedValue,
        opened: f32,
        closed: f32,
    ) -> Self {
        Self {
            property,
            target,
            opened,
            closed,
        }
    }

    /// Card offset: resting position when open, pushed down by its full
    /// height when closed.
    pub fn card_offset(target: AnimatedValue, card_height: f32) -> Self {
        Self::new(AnimatedProperty::CardOffset, target, 0.0, card_height)
    }

    /// Backdrop dimming: `opacity` when open, transparent when closed.
    pub fn backdrop_opacity(target: AnimatedValue, opacity: f32) -> Self {
        Self::new(AnimatedProperty::BackdropOpacity, target, opacity, 0.0)
    }

    /// Drag handle offset, travelling with the card.
    pub fn handle_offset(target: AnimatedValue, card_height: f32) -> Self {
        Self::new(AnimatedProperty::HandleOffset, target, 0.0, card_height)
    }

    pub fn property(&self) -> AnimatedProperty {
        self.property
    }

    pub fn target(&self) -> &AnimatedValue {
        &self.target
    }

    /// Value the property takes when resting in `state`.
    pub fn value_for(&self, state: CardState) -> f32 {
        match state {
            CardState::Opened => self.opened,
            CardState::Closed => self.closed,
        }
    }

    /// Set the property to its resting value for `state`.
    pub fn apply(&self, state: CardState) {
        self.target.set(self.value_for(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_offset_values() {
        let offset = AnimatedValue::new(0.0);
        let animation = CardAnimation::card_offset(offset.clone(), 300.0);

        assert_eq!(animation.property(), AnimatedProperty::CardOffset);
        assert_eq!(animation.value_for(CardState::Opened), 0.0);
        assert_eq!(animation.value_for(CardState::Closed), 300.0);
    }

    #[test]
    fn apply_is_idempotent() {
        let offset = AnimatedValue::new(12.0);
        let animation = CardAnimation::handle_offset(offset.clone(), 300.0);

        animation.apply(CardState::Closed);
        animation.apply(CardState::Closed);
        assert_eq!(offset.get(), 300.0);
    }

    #[test]
    fn animation_writes_through_shared_target() {
        let opacity = AnimatedValue::new(0.0);
        let animation = CardAnimation::backdrop_opacity(opacity.clone(), 0.5);
        animation.apply(CardState::Opened);

        assert!(animation.target().same_as(&opacity));
        assert_eq!(opacity.get(), 0.5);
    }
}
