//! Bookkeeping for the transition currently in flight.

use crate::core::{CardState, Resolution, TransitionId};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Callback run once when a transition settles.
pub type CompletionCallback = Box<dyn FnOnce()>;

/// Where the engine is in the lifecycle of one transition.
///
/// ```text
/// Idle -> Armed -> Scrubbing -> Committing -> Idle
///                      |
///                      +-----> Cancelling -> Idle
/// Idle -> Running -> Idle
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransitionPhase {
    /// No handles exist.
    Idle,
    /// Programmatic drive in progress.
    Running,
    /// Handles created or captured by a drag and paused.
    Armed,
    /// Handles paused and being scrubbed by drag moves.
    Scrubbing,
    /// Released past threshold; handles playing to the target.
    Committing,
    /// Released below threshold; snapping back.
    Cancelling,
}

impl TransitionPhase {
    /// Phases in which drag input owns the handles.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Armed | Self::Scrubbing)
    }
}

/// Shared `interactionsEnabled` flag.
///
/// Cloned into completion callbacks so a drive can reopen the gate when it
/// settles (used by the non-cancelable appear animation).
#[derive(Clone, Debug)]
pub struct InteractionGate(Rc<Cell<bool>>);

impl InteractionGate {
    pub fn new(enabled: bool) -> Self {
        Self(Rc::new(Cell::new(enabled)))
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }

    pub fn open(&self) {
        self.0.set(true);
    }

    pub fn close(&self) {
        self.0.set(false);
    }

    pub fn set(&self, enabled: bool) {
        self.0.set(enabled);
    }
}

impl Default for InteractionGate {
    fn default() -> Self {
        Self::new(true)
    }
}

/// The transition whose handles are currently in `runningHandles`.
pub(crate) struct ActiveTransition {
    pub id: TransitionId,
    pub from: CardState,
    pub target: CardState,
    pub resolution: Resolution,
    pub on_complete: Option<CompletionCallback>,
}

impl ActiveTransition {
    pub fn new(
        id: TransitionId,
        from: CardState,
        target: CardState,
        resolution: Resolution,
        on_complete: Option<CompletionCallback>,
    ) -> Self {
        Self {
            id,
            from,
            target,
            resolution,
            on_complete,
        }
    }
}

impl fmt::Debug for ActiveTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveTransition")
            .field("id", &self.id)
            .field("from", &self.from)
            .field("target", &self.target)
            .field("resolution", &self.resolution)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
