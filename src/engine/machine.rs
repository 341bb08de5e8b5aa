//! The interactive transition engine.

use crate::animation::{CardAnimation, PropertyAnimator, TransitionTiming};
use crate::core::{CardState, Resolution, TransitionHistory, TransitionId, TransitionRecord};
use crate::engine::observer::CloseObserverRef;
use crate::engine::transition::{
    ActiveTransition, CompletionCallback, InteractionGate, TransitionPhase,
};
use chrono::Utc;
use log::{debug, trace, warn};
use std::rc::Weak;
use std::time::Duration;

/// Drives the open/closed transition of a card across every registered
/// property animation.
///
/// The engine owns one handle per registered animation while a transition is
/// in flight, and none otherwise. Those handles are always operated on as a
/// set: started, paused, scrubbed, resumed and stopped together within one
/// call, so no property ever drifts from its siblings.
///
/// Two sources move the handles:
/// - programmatic drives ([`drive_transition`](Self::drive_transition)), which
///   run to completion on [`tick`](Self::tick);
/// - drags, which arm, scrub, then either commit or cancel back to start.
///
/// A drag that begins while a drive is in flight captures its handles instead
/// of creating a second set.
///
/// # Example
///
/// ```rust
/// use floating_card::animation::{AnimatedValue, CardAnimation, TransitionTiming};
/// use floating_card::core::CardState;
/// use floating_card::engine::TransitionEngine;
///
/// let offset = AnimatedValue::new(0.0);
/// let mut engine = TransitionEngine::new(CardState::Opened);
/// engine.register_animation(CardAnimation::card_offset(offset.clone(), 300.0));
///
/// engine.drive_transition(CardState::Closed, TransitionTiming::immediate(), None);
/// assert_eq!(engine.state(), CardState::Closed);
/// assert_eq!(offset.get(), 300.0);
/// ```
pub struct TransitionEngine {
    animations: Vec<CardAnimation>,
    visible: bool,
    running: Vec<PropertyAnimator>,
    active: Option<ActiveTransition>,
    phase: TransitionPhase,
    progress_at_interruption: f32,
    last_progress: f32,
    gate: InteractionGate,
    close_observer: Option<CloseObserverRef>,
    history: TransitionHistory,
}

impl TransitionEngine {
    /// Create an idle engine resting in `initial`, with interactions enabled.
    pub fn new(initial: CardState) -> Self {
        Self {
            animations: Vec::new(),
            visible: initial.is_visible(),
            running: Vec::new(),
            active: None,
            phase: TransitionPhase::Idle,
            progress_at_interruption: 0.0,
            last_progress: 0.0,
            gate: InteractionGate::default(),
            close_observer: None,
            history: TransitionHistory::new(),
        }
    }

    /// Append an animation to drive on every subsequent transition.
    ///
    /// Meant for setup time. Registering while a transition is in flight is
    /// tolerated but the new animation only joins the next transition.
    pub fn register_animation(&mut self, animation: CardAnimation) {
        if !self.running.is_empty() {
            warn!(
                "{} animation registered while a transition is in flight",
                animation.property().name()
            );
        }
        self.animations.push(animation);
    }

    pub fn animations(&self) -> &[CardAnimation] {
        &self.animations
    }

    /// Set the observer notified when the card settles closed.
    pub fn set_close_observer(&mut self, observer: CloseObserverRef) {
        self.close_observer = Some(observer);
    }

    /// Last completed state.
    pub fn state(&self) -> CardState {
        CardState::from_visible(self.visible)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn running_handles(&self) -> &[PropertyAnimator] {
        &self.running
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Target of the transition in flight, if any.
    pub fn target_state(&self) -> Option<CardState> {
        self.active.as_ref().map(|a| a.target)
    }

    pub fn progress_at_interruption(&self) -> f32 {
        self.progress_at_interruption
    }

    /// Most recent drag progress, reset when the drag resolves.
    pub fn last_progress(&self) -> f32 {
        self.last_progress
    }

    pub fn interactions_enabled(&self) -> bool {
        self.gate.is_open()
    }

    pub fn set_interactions_enabled(&mut self, enabled: bool) {
        self.gate.set(enabled);
    }

    /// Shared handle on the interactions gate.
    pub fn gate(&self) -> InteractionGate {
        self.gate.clone()
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Snap every property to its resting value for `state` without a
    /// transition. Anything in flight is dropped.
    pub fn reset_to(&mut self, state: CardState) {
        self.supersede_running();
        for animation in &self.animations {
            animation.apply(state);
        }
        self.visible = state.is_visible();
        debug!("card reset to {}", state.name());
    }

    /// Start a programmatic transition to `target`.
    ///
    /// Any transition already in flight is stopped where it is and dropped
    /// (its completion callback never runs); the new handles start from the
    /// current rendered values. A zero-duration timing settles before this
    /// returns.
    pub fn drive_transition(
        &mut self,
        target: CardState,
        timing: TransitionTiming,
        on_complete: Option<CompletionCallback>,
    ) -> TransitionId {
        self.supersede_running();
        let id = TransitionId::new();
        let active = ActiveTransition::new(
            id,
            self.state(),
            target,
            Resolution::Driven,
            on_complete,
        );
        self.start(active, timing, TransitionPhase::Running);
        id
    }

    /// Arm the handles for a drag.
    ///
    /// When idle, materializes a transition towards the opposite state first.
    /// When a transition is already in flight, its handles are captured
    /// instead. Either way every handle is paused and the current progress is
    /// kept as the base that drag progress is added to.
    ///
    /// Returns whether the drag now owns the handles.
    pub fn begin_interactive_transition(&mut self, timing: TransitionTiming) -> bool {
        if !self.gate.is_open() {
            debug!("interactions disabled, drag not armed");
            return false;
        }
        if self.animations.is_empty() {
            warn!("drag started with no registered animations");
            return false;
        }
        if self.running.is_empty() && timing.is_immediate() {
            warn!("drag needs a non-zero transition duration");
            return false;
        }

        if self.running.is_empty() {
            let from = self.state();
            // Resolution is decided on release.
            let active = ActiveTransition::new(
                TransitionId::new(),
                from,
                from.next(),
                Resolution::Driven,
                None,
            );
            self.start(active, timing, TransitionPhase::Armed);
        }

        for handle in &mut self.running {
            handle.pause();
        }
        self.progress_at_interruption = self
            .running
            .first()
            .map(PropertyAnimator::fraction_complete)
            .unwrap_or(0.0);
        self.last_progress = 0.0;
        self.phase = TransitionPhase::Armed;

        if let Some(active) = &self.active {
            debug!(
                "transition {} armed towards {} at {:.3}",
                active.id,
                active.target.name(),
                self.progress_at_interruption
            );
        }
        true
    }

    /// Scrub every armed handle to `fraction` plus the interruption base,
    /// clamped to `[0, 1]`. Returns whether the handles moved.
    pub fn update_interactive_progress(&mut self, fraction: f32) -> bool {
        if !self.gate.is_open() || !self.phase.is_interactive() {
            return false;
        }
        if !fraction.is_finite() {
            warn!("ignoring non-finite drag progress {}", fraction);
            return false;
        }

        self.last_progress = fraction;
        let complete = (fraction + self.progress_at_interruption).clamp(0.0, 1.0);
        for handle in &mut self.running {
            handle.set_fraction_complete(complete);
        }
        self.phase = TransitionPhase::Scrubbing;
        trace!("scrubbed to {:.3} (drag {:.3})", complete, fraction);
        true
    }

    /// Play the armed handles forward to the target chosen when they were
    /// created, over the time that remains.
    ///
    /// Only the interactions gate's entry points are blocked when it closes:
    /// a drag that already owns the handles can always resolve. Returns
    /// whether there was an armed transition to commit.
    pub fn commit_interactive_transition(&mut self) -> bool {
        if !self.phase.is_interactive() {
            return false;
        }

        if let Some(active) = self.active.as_mut() {
            active.resolution = Resolution::Committed;
            debug!("transition {} committed towards {}", active.id, active.target.name());
        }
        for handle in &mut self.running {
            handle.continue_animation();
        }
        self.phase = TransitionPhase::Committing;
        self.last_progress = 0.0;
        self.complete_if_finished();
        true
    }

    /// Abandon the armed transition and snap back to the state the card was
    /// resting in when the drag began.
    ///
    /// The handles are stopped where they are and discarded, then a
    /// zero-length drive settles every property back. The close observer is
    /// never notified by this path. Like commit, this ignores the
    /// interactions gate. Returns whether there was an armed transition to
    /// cancel.
    pub fn cancel_interactive_transition_to_start(&mut self) -> bool {
        if !self.phase.is_interactive() {
            return false;
        }

        for handle in &mut self.running {
            handle.stop();
        }
        self.running.clear();
        self.last_progress = 0.0;
        self.progress_at_interruption = 0.0;

        let Some(cancelled) = self.active.take() else {
            self.phase = TransitionPhase::Idle;
            return true;
        };
        debug!(
            "transition {} cancelled, returning to {}",
            cancelled.id,
            cancelled.from.name()
        );

        let snap_back = ActiveTransition::new(
            cancelled.id,
            cancelled.from,
            cancelled.from,
            Resolution::CancelledToStart,
            cancelled.on_complete,
        );
        self.start(
            snap_back,
            TransitionTiming::immediate(),
            TransitionPhase::Cancelling,
        );
        true
    }

    /// Advance every running handle by `dt`, settling the transition once
    /// they have all finished.
    pub fn tick(&mut self, dt: Duration) {
        if self.running.is_empty() {
            return;
        }
        for handle in &mut self.running {
            handle.advance(dt);
        }
        self.complete_if_finished();
    }

    fn start(
        &mut self,
        active: ActiveTransition,
        timing: TransitionTiming,
        phase: TransitionPhase,
    ) {
        debug!(
            "transition {} {} -> {} started over {:?} ({} handles)",
            active.id,
            self.state().name(),
            active.target.name(),
            timing.duration,
            self.animations.len()
        );

        let target = active.target;
        self.running = self
            .animations
            .iter()
            .map(|animation| PropertyAnimator::new(animation.clone(), target, timing))
            .collect();
        self.active = Some(active);
        self.phase = phase;

        for handle in &mut self.running {
            handle.start();
        }
        self.complete_if_finished();
    }

    fn supersede_running(&mut self) {
        for handle in &mut self.running {
            handle.stop();
        }
        self.running.clear();
        if let Some(active) = self.active.take() {
            debug!(
                "transition {} towards {} superseded",
                active.id,
                active.target.name()
            );
        }
        self.phase = TransitionPhase::Idle;
        self.progress_at_interruption = 0.0;
        self.last_progress = 0.0;
    }

    fn complete_if_finished(&mut self) {
        if !self.running.iter().all(PropertyAnimator::is_finished) {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        self.visible = active.target.is_visible();
        self.running.clear();
        self.phase = TransitionPhase::Idle;
        self.progress_at_interruption = 0.0;

        self.history.push(TransitionRecord {
            id: active.id,
            from: active.from,
            to: active.target,
            resolution: active.resolution,
            timestamp: Utc::now(),
        });
        debug!(
            "transition {} settled {} ({:?})",
            active.id,
            active.target.name(),
            active.resolution
        );

        if let Some(on_complete) = active.on_complete {
            on_complete();
        }
        if !self.visible && active.resolution.notifies_close() {
            self.notify_close();
        }
    }

    fn notify_close(&self) {
        match self.close_observer.as_ref().and_then(Weak::upgrade) {
            Some(observer) => {
                debug!("card closed, notifying observer");
                observer.card_did_close();
            }
            None => debug!("card closed with no live observer"),
        }
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::new(CardState::Closed)
    }
}
