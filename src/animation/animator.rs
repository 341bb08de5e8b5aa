//! Pausable, scrubbable property animation handles.
//!
//! A [`PropertyAnimator`] drives one [`CardAnimation`] from the value the
//! property had when the handle was created towards the value of a target
//! [`CardState`]. Handles move through a small lifecycle:
//!
//! ```text
//! Inactive --start--> Running --pause--> Paused --continue--> Running --> Finished
//!                        |                  |
//!                        +------stop--------+--> Stopped
//! ```
//!
//! Progress is the visual fraction of the way from start to target. While
//! paused it is set directly (linear scrubbing); while running it follows the
//! spring curve, over the full duration for the first segment and over the
//! proportional remainder after a resume.

use super::card_animation::CardAnimation;
use super::spring::SpringCurve;
use crate::core::CardState;
use std::time::Duration;

/// Duration and curve of one transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionTiming {
    pub duration: Duration,
    pub curve: SpringCurve,
}

impl TransitionTiming {
    pub fn new(duration: Duration, damping_ratio: f32) -> Self {
        Self {
            duration,
            curve: SpringCurve::new(damping_ratio),
        }
    }

    /// Zero-length, critically damped: settles inside the starting call.
    pub fn immediate() -> Self {
        Self {
            duration: Duration::ZERO,
            curve: SpringCurve::CRITICAL,
        }
    }

    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Lifecycle state of a single handle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnimatorState {
    /// Created but not yet started.
    Inactive,
    /// Advancing with time.
    Running,
    /// Frozen; progress only moves when scrubbed.
    Paused,
    /// Abandoned in place; the property keeps its current value.
    Stopped,
    /// Reached the target value.
    Finished,
}

/// Running instance of one property's interpolation.
#[derive(Clone, Debug)]
pub struct PropertyAnimator {
    animation: CardAnimation,
    target_state: CardState,
    from: f32,
    to: f32,
    timing: TransitionTiming,
    segment_start: f32,
    segment_duration: Duration,
    elapsed: Duration,
    progress: f32,
    state: AnimatorState,
}

impl PropertyAnimator {
    /// Create an inactive handle starting from the property's current value.
    pub fn new(
        animation: CardAnimation,
        target_state: CardState,
        timing: TransitionTiming,
    ) -> Self {
        let from = animation.target().get();
        let to = animation.value_for(target_state);
        Self {
            animation,
            target_state,
            from,
            to,
            timing,
            segment_start: 0.0,
            segment_duration: timing.duration,
            elapsed: Duration::ZERO,
            progress: 0.0,
            state: AnimatorState::Inactive,
        }
    }

    pub fn animation(&self) -> &CardAnimation {
        &self.animation
    }

    pub fn target_state(&self) -> CardState {
        self.target_state
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == AnimatorState::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.state == AnimatorState::Finished
    }

    /// Fraction of the transition completed, in `[0, 1]`.
    ///
    /// Spring overshoot is visible on the property but not reported here.
    pub fn fraction_complete(&self) -> f32 {
        self.progress.clamp(0.0, 1.0)
    }

    /// Value the property currently holds according to this handle.
    pub fn current_value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress
    }

    pub fn start(&mut self) {
        if self.state != AnimatorState::Inactive {
            return;
        }
        self.state = AnimatorState::Running;
        if self.segment_duration.is_zero() {
            self.finish();
        }
    }

    /// Advance a running handle by `dt`. Returns whether it has finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.state != AnimatorState::Running {
            return self.is_finished();
        }

        self.elapsed += dt;
        if self.elapsed >= self.segment_duration {
            self.finish();
            return true;
        }

        let local = self.elapsed.as_secs_f32() / self.segment_duration.as_secs_f32();
        self.progress =
            self.segment_start + (1.0 - self.segment_start) * self.timing.curve.evaluate(local);
        self.write();
        false
    }

    pub fn pause(&mut self) {
        if matches!(self.state, AnimatorState::Running | AnimatorState::Inactive) {
            self.state = AnimatorState::Paused;
        }
    }

    /// Scrub a paused handle to `fraction` (clamped to `[0, 1]`).
    ///
    /// Ignored unless paused.
    pub fn set_fraction_complete(&mut self, fraction: f32) {
        if self.state != AnimatorState::Paused || fraction.is_nan() {
            return;
        }
        self.progress = fraction.clamp(0.0, 1.0);
        self.write();
    }

    /// Resume a paused handle towards its original target over the time that
    /// remains proportionally to its progress.
    pub fn continue_animation(&mut self) {
        if self.state != AnimatorState::Paused {
            return;
        }
        self.segment_start = self.fraction_complete();
        self.segment_duration = self.timing.duration.mul_f32(1.0 - self.segment_start);
        self.elapsed = Duration::ZERO;
        self.state = AnimatorState::Running;
        if self.segment_duration.is_zero() {
            self.finish();
        }
    }

    /// Stop where the property currently is. The handle cannot be resumed.
    pub fn stop(&mut self) {
        if self.state != AnimatorState::Finished {
            self.state = AnimatorState::Stopped;
        }
    }

    fn finish(&mut self) {
        self.progress = 1.0;
        self.state = AnimatorState::Finished;
        self.write();
    }

    fn write(&self) {
        self.animation.target().set(self.current_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimatedValue;

    fn offset_animator(start: f32, duration_ms: u64) -> (AnimatedValue, PropertyAnimator) {
        let value = AnimatedValue::new(start);
        let animation = CardAnimation::card_offset(value.clone(), 300.0);
        let animator = PropertyAnimator::new(
            animation,
            CardState::Closed,
            TransitionTiming::new(Duration::from_millis(duration_ms), 1.0),
        );
        (value, animator)
    }

    #[test]
    fn new_handle_reads_current_value() {
        let (_, animator) = offset_animator(40.0, 500);
        assert_eq!(animator.current_value(), 40.0);
        assert_eq!(animator.state(), AnimatorState::Inactive);
    }

    #[test]
    fn zero_duration_finishes_on_start() {
        let (value, mut animator) = offset_animator(0.0, 0);
        animator.start();
        assert!(animator.is_finished());
        assert_eq!(value.get(), 300.0);
    }

    #[test]
    fn running_handle_reaches_target() {
        let (value, mut animator) = offset_animator(0.0, 500);
        animator.start();

        assert!(!animator.advance(Duration::from_millis(250)));
        assert!(value.get() > 0.0 && value.get() < 300.0);

        assert!(animator.advance(Duration::from_millis(250)));
        assert_eq!(value.get(), 300.0);
        assert_eq!(animator.fraction_complete(), 1.0);
    }

    #[test]
    fn paused_handle_does_not_advance() {
        let (value, mut animator) = offset_animator(0.0, 500);
        animator.start();
        animator.pause();
        let before = value.get();

        assert!(!animator.advance(Duration::from_secs(5)));
        assert_eq!(value.get(), before);
    }

    #[test]
    fn scrubbing_is_linear_and_clamped() {
        let (value, mut animator) = offset_animator(0.0, 500);
        animator.start();
        animator.pause();

        animator.set_fraction_complete(0.5);
        assert_eq!(value.get(), 150.0);

        animator.set_fraction_complete(1.7);
        assert_eq!(animator.fraction_complete(), 1.0);
        assert_eq!(value.get(), 300.0);

        animator.set_fraction_complete(-0.2);
        assert_eq!(value.get(), 0.0);
    }

    #[test]
    fn scrubbing_requires_pause() {
        let (value, mut animator) = offset_animator(0.0, 500);
        animator.start();
        animator.set_fraction_complete(0.5);
        assert_eq!(value.get(), 0.0);
    }

    #[test]
    fn continue_uses_remaining_time() {
        let (value, mut animator) = offset_animator(0.0, 1000);
        animator.start();
        animator.pause();
        animator.set_fraction_complete(0.75);
        animator.continue_animation();

        assert!(!animator.advance(Duration::from_millis(100)));
        assert!(value.get() >= 225.0);
        assert!(animator.advance(Duration::from_millis(150)));
        assert_eq!(value.get(), 300.0);
    }

    #[test]
    fn continue_from_complete_finishes_immediately() {
        let (_, mut animator) = offset_animator(0.0, 1000);
        animator.start();
        animator.pause();
        animator.set_fraction_complete(1.0);
        animator.continue_animation();
        assert!(animator.is_finished());
    }

    #[test]
    fn stop_leaves_value_in_place() {
        let (value, mut animator) = offset_animator(0.0, 1000);
        animator.start();
        animator.pause();
        animator.set_fraction_complete(0.4);
        animator.stop();

        assert_eq!(animator.state(), AnimatorState::Stopped);
        assert!(!animator.advance(Duration::from_secs(1)));
        animator.continue_animation();
        assert_eq!(value.get(), 120.0);
    }
}
