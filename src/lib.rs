//! Floating card: an interruptible, drag-driven bottom card transition engine
//!
//! A floating card rests either opened or closed. Programmatic drives move it
//! between the two on a damped spring, and a vertical drag can grab any
//! transition midway, scrub it, and on release either finish it or snap it
//! back to where the drag began. The host is notified once each time the card
//! settles closed.
//!
//! # Core Concepts
//!
//! - **State**: the binary [`CardState`] and the immutable transition history
//! - **Animation**: property animators with pause, scrub and resume
//! - **Engine**: the [`TransitionEngine`] owning the in-flight handles
//! - **Gesture**: the adapter mapping drag phases onto engine operations
//! - **Card**: [`FloatingCard`], built with [`FloatingCardBuilder`]
//!
//! # Example
//!
//! ```rust
//! use floating_card::{CardCloseObserver, CardState, DragPhase, FloatingCardBuilder};
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let observer: Rc<dyn CardCloseObserver> = Rc::new(|| println!("card closed"));
//! let mut card = FloatingCardBuilder::new()
//!     .content(vec!["Newest first", "Lowest price"])
//!     .close_observer(Rc::downgrade(&observer))
//!     .build()
//!     .unwrap();
//!
//! card.present();
//! while !card.engine().is_idle() {
//!     card.tick(Duration::from_millis(16));
//! }
//! assert_eq!(card.state(), CardState::Opened);
//!
//! // Drag down 150 of 300 points and let go: past the threshold, so it closes.
//! card.handle_drag(DragPhase::Began { velocity_y: 40.0 });
//! card.handle_drag(DragPhase::Changed { translation_y: 150.0 });
//! card.handle_drag(DragPhase::Ended);
//! while !card.engine().is_idle() {
//!     card.tick(Duration::from_millis(16));
//! }
//! assert_eq!(card.state(), CardState::Closed);
//! ```

pub mod animation;
pub mod builder;
pub mod card;
pub mod config;
pub mod core;
pub mod engine;
pub mod gesture;

// Re-export commonly used types
pub use builder::{BuildError, FloatingCardBuilder};
pub use card::{CardProperties, FloatingCard};
pub use config::{CardConfig, ConfigError};
pub use core::{CardState, Resolution, TransitionHistory, TransitionId};
pub use engine::{CardCloseObserver, TransitionEngine, TransitionPhase};
pub use gesture::{DragOutcome, DragPhase, GestureKind};
