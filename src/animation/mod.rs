//! Property animations for the card.
//!
//! - [`CardAnimation`]: a property plus its opened/closed values
//! - [`PropertyAnimator`]: the handle that interpolates one property
//! - [`SpringCurve`]: damping-ratio easing shared by all handles of a
//!   transition
//! - [`AnimatedValue`]: the property cell the host renders from

mod animator;
mod card_animation;
mod spring;
mod value;

pub use animator::{AnimatorState, PropertyAnimator, TransitionTiming};
pub use card_animation::{AnimatedProperty, CardAnimation};
pub use spring::{SpringCurve, MIN_DAMPING_RATIO};
pub use value::AnimatedValue;
