//! Translation of drag phases into engine calls.

use crate::animation::TransitionTiming;
use crate::engine::TransitionEngine;
use log::debug;
use serde::{Deserialize, Serialize};

/// One event of a continuous drag gesture.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum DragPhase {
    /// The finger went down and started moving.
    Began { velocity_y: f32 },
    /// Total vertical translation since `Began`, positive downwards.
    Changed { translation_y: f32 },
    /// The finger lifted.
    Ended,
    /// The system took the gesture away (incoming call, competing recognizer).
    Cancelled,
}

/// Vertical direction of a drag at the moment it began.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum DragDirection {
    Up,
    Down,
}

impl DragDirection {
    pub fn from_velocity(velocity_y: f32) -> Self {
        if velocity_y >= 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// What the adapter did with one phase.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DragOutcome {
    /// Nothing reached the engine.
    Ignored,
    /// The engine's handles are now owned by this drag.
    Armed,
    /// Handles scrubbed with this drag progress.
    Scrubbed(f32),
    /// Released at or past the threshold.
    Committed,
    /// Released below the threshold, or taken away by the system.
    CancelledToStart,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tracking {
    Idle,
    Tracking,
    Ignoring,
}

/// Turns a drag gesture stream into transition engine calls.
///
/// Progress is the vertical translation normalized by the card height. On
/// release the engine's last recorded progress is compared with the close
/// threshold: below it the transition is cancelled back to start, at or above
/// it the transition is committed. The decision is positional; release
/// velocity plays no part.
///
/// A drag that begins while interactions are disabled is ignored until it
/// ends, even if interactions are re-enabled in the meantime.
#[derive(Clone, Debug)]
pub struct GestureAdapter {
    reference_height: f32,
    close_threshold: f32,
    timing: TransitionTiming,
    tracking: Tracking,
}

impl GestureAdapter {
    pub fn new(reference_height: f32, close_threshold: f32, timing: TransitionTiming) -> Self {
        Self {
            reference_height,
            close_threshold,
            timing,
            tracking: Tracking::Idle,
        }
    }

    pub fn reference_height(&self) -> f32 {
        self.reference_height
    }

    pub fn close_threshold(&self) -> f32 {
        self.close_threshold
    }

    /// Whether a drag currently owns the engine's handles.
    pub fn is_tracking(&self) -> bool {
        self.tracking == Tracking::Tracking
    }

    /// Drag progress for a vertical translation.
    pub fn progress_for(&self, translation_y: f32) -> f32 {
        translation_y / self.reference_height
    }

    pub fn handle(&mut self, engine: &mut TransitionEngine, phase: DragPhase) -> DragOutcome {
        match phase {
            DragPhase::Began { velocity_y } => self.began(engine, velocity_y),
            DragPhase::Changed { translation_y } => {
                if self.tracking != Tracking::Tracking {
                    return DragOutcome::Ignored;
                }
                let progress = self.progress_for(translation_y);
                if engine.update_interactive_progress(progress) {
                    DragOutcome::Scrubbed(progress)
                } else {
                    DragOutcome::Ignored
                }
            }
            DragPhase::Ended => {
                if !self.release(engine) {
                    return DragOutcome::Ignored;
                }
                if engine.last_progress() < self.close_threshold {
                    debug!(
                        "drag released at {:.3}, below threshold {:.3}",
                        engine.last_progress(),
                        self.close_threshold
                    );
                    resolved(
                        engine.cancel_interactive_transition_to_start(),
                        DragOutcome::CancelledToStart,
                    )
                } else {
                    debug!("drag released at {:.3}, committing", engine.last_progress());
                    resolved(
                        engine.commit_interactive_transition(),
                        DragOutcome::Committed,
                    )
                }
            }
            DragPhase::Cancelled => {
                if !self.release(engine) {
                    return DragOutcome::Ignored;
                }
                debug!("drag cancelled by the system");
                resolved(
                    engine.cancel_interactive_transition_to_start(),
                    DragOutcome::CancelledToStart,
                )
            }
        }
    }

    /// Stop tracking. Returns whether this drag still owns armed handles.
    fn release(&mut self, engine: &TransitionEngine) -> bool {
        let tracking = std::mem::replace(&mut self.tracking, Tracking::Idle);
        if tracking != Tracking::Tracking {
            return false;
        }
        if !engine.phase().is_interactive() {
            debug!("drag released after its transition was replaced");
            return false;
        }
        true
    }

    fn began(&mut self, engine: &mut TransitionEngine, velocity_y: f32) -> DragOutcome {
        if !engine.interactions_enabled() {
            self.tracking = Tracking::Ignoring;
            return DragOutcome::Ignored;
        }

        debug!(
            "drag began moving {:?} at {:.1}",
            DragDirection::from_velocity(velocity_y),
            velocity_y
        );
        if engine.begin_interactive_transition(self.timing) {
            self.tracking = Tracking::Tracking;
            DragOutcome::Armed
        } else {
            self.tracking = Tracking::Ignoring;
            DragOutcome::Ignored
        }
    }
}

fn resolved(applied: bool, outcome: DragOutcome) -> DragOutcome {
    if applied {
        outcome
    } else {
        DragOutcome::Ignored
    }
}
