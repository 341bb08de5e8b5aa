//! The interactive transition engine.
//!
//! [`TransitionEngine`] reconciles two sources of motion, programmatic drives
//! and drag gestures, into one transition at a time over a fixed set of
//! property animations.
//!
//! # Key Concepts
//!
//! - **Handles**: one [`PropertyAnimator`](crate::animation::PropertyAnimator)
//!   per registered animation, created, paused, scrubbed and resumed together
//! - **Phase**: where the current transition is in its lifecycle
//!   ([`TransitionPhase`])
//! - **Gate**: the shared [`InteractionGate`] that locks drags out while a
//!   non-cancelable drive runs
//! - **Close notification**: delivered to a weakly held
//!   [`CardCloseObserver`] only when the card genuinely settles closed

mod machine;
mod observer;
mod transition;

pub use machine::TransitionEngine;
pub use observer::{CardCloseObserver, CloseObserverRef};
pub use transition::{CompletionCallback, InteractionGate, TransitionPhase};
