//! Core card types.
//!
//! This module contains the plain data the rest of the crate is built on:
//! - The binary [`CardState`]
//! - The immutable [`TransitionHistory`] of settled transitions
//!
//! Nothing here touches animation handles or gestures.

mod history;
mod state;

pub use history::{Resolution, TransitionHistory, TransitionId, TransitionRecord};
pub use state::CardState;
