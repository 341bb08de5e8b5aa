//! Drag gesture handling.
//!
//! The [`GestureAdapter`] is the only component that decides between commit
//! and cancel; the engine merely exposes the primitives.

mod adapter;
mod policy;

pub use adapter::{DragDirection, DragOutcome, DragPhase, GestureAdapter};
pub use policy::{should_recognize_simultaneously, GestureKind};
