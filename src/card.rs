//! Presentation glue tying the engine, gesture adapter and card properties
//! together.

use crate::animation::{AnimatedValue, CardAnimation};
use crate::config::CardConfig;
use crate::core::{CardState, TransitionId};
use crate::engine::{CloseObserverRef, TransitionEngine};
use crate::gesture::{
    should_recognize_simultaneously, DragOutcome, DragPhase, GestureAdapter, GestureKind,
};
use log::debug;
use std::time::Duration;

/// Rendered properties the host draws the card from.
///
/// Offsets are measured downwards from the open resting position.
#[derive(Clone, Debug)]
pub struct CardProperties {
    pub card_offset: AnimatedValue,
    pub backdrop_opacity: AnimatedValue,
    pub handle_offset: Option<AnimatedValue>,
}

impl CardProperties {
    fn hidden(config: &CardConfig) -> Self {
        Self {
            card_offset: AnimatedValue::new(config.card_height),
            backdrop_opacity: AnimatedValue::new(0.0),
            handle_offset: config
                .show_drag_handle
                .then(|| AnimatedValue::new(config.card_height)),
        }
    }
}

/// A bottom card with its content, driven by drags and by the host's
/// lifecycle.
///
/// Built with [`FloatingCardBuilder`](crate::builder::FloatingCardBuilder).
/// The host forwards drag phases to [`handle_drag`](Self::handle_drag), calls
/// [`present`](Self::present) when the card is about to appear and
/// [`dismiss`](Self::dismiss) on a background tap, and advances time with
/// [`tick`](Self::tick).
pub struct FloatingCard<C> {
    content: C,
    config: CardConfig,
    properties: CardProperties,
    engine: TransitionEngine,
    gestures: GestureAdapter,
}

impl<C> FloatingCard<C> {
    /// Assemble a card from an already validated config.
    pub(crate) fn new(
        content: C,
        config: CardConfig,
        close_observer: Option<CloseObserverRef>,
    ) -> Self {
        let properties = CardProperties::hidden(&config);

        let mut engine = TransitionEngine::new(CardState::Closed);
        engine.register_animation(CardAnimation::card_offset(
            properties.card_offset.clone(),
            config.card_height,
        ));
        engine.register_animation(CardAnimation::backdrop_opacity(
            properties.backdrop_opacity.clone(),
            config.background_opacity,
        ));
        if let Some(handle) = &properties.handle_offset {
            engine.register_animation(CardAnimation::handle_offset(
                handle.clone(),
                config.card_height,
            ));
        }
        if let Some(observer) = close_observer {
            engine.set_close_observer(observer);
        }

        let gestures = GestureAdapter::new(
            config.card_height,
            config.close_threshold,
            config.interactive_timing(),
        );

        Self {
            content,
            config,
            properties,
            engine,
            gestures,
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn properties(&self) -> &CardProperties {
        &self.properties
    }

    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    pub fn state(&self) -> CardState {
        self.engine.state()
    }

    pub fn set_close_observer(&mut self, observer: CloseObserverRef) {
        self.engine.set_close_observer(observer);
    }

    /// Slide the card up from fully hidden.
    ///
    /// Drags are locked out until the card has settled open.
    pub fn present(&mut self) -> TransitionId {
        self.engine.set_interactions_enabled(false);
        self.engine.reset_to(CardState::Closed);

        let gate = self.engine.gate();
        debug!("presenting card");
        self.engine.drive_transition(
            CardState::Opened,
            self.config.drive_timing(),
            Some(Box::new(move || gate.open())),
        )
    }

    /// Close the card without a gesture, e.g. after a background tap.
    ///
    /// The drive cannot be grabbed by a drag and always ends in a close
    /// notification. Returns `None` when the card already rests closed.
    pub fn dismiss(&mut self) -> Option<TransitionId> {
        if self.engine.is_idle() && self.engine.state() == CardState::Closed {
            return None;
        }
        self.engine.set_interactions_enabled(false);
        debug!("dismissing card");
        Some(
            self.engine
                .drive_transition(CardState::Closed, self.config.drive_timing(), None),
        )
    }

    pub fn handle_drag(&mut self, phase: DragPhase) -> DragOutcome {
        self.gestures.handle(&mut self.engine, phase)
    }

    pub fn tick(&mut self, dt: Duration) {
        self.engine.tick(dt);
    }

    /// Whether the card's drag may run together with a gesture of `other`
    /// kind.
    pub fn should_recognize_simultaneously(&self, other: GestureKind) -> bool {
        should_recognize_simultaneously(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CardCloseObserver;
    use std::cell::Cell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle<C>(card: &mut FloatingCard<C>) {
        for _ in 0..1000 {
            if card.engine().is_idle() {
                return;
            }
            card.tick(FRAME);
        }
        panic!("card never settled");
    }

    type Counted = (
        FloatingCard<Vec<&'static str>>,
        Rc<Cell<usize>>,
        Rc<dyn CardCloseObserver>,
    );

    fn card_with_counter(config: CardConfig) -> Counted {
        let closes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&closes);
        let observer: Rc<dyn CardCloseObserver> = Rc::new(move || counter.set(counter.get() + 1));
        let card = FloatingCard::new(
            vec!["Alpha", "Beta"],
            config,
            Some(Rc::downgrade(&observer)),
        );
        (card, closes, observer)
    }

    #[test]
    fn card_starts_hidden() {
        let (card, _, _observer) = card_with_counter(CardConfig::default());
        assert_eq!(card.state(), CardState::Closed);
        assert_eq!(card.properties().card_offset.get(), 300.0);
        assert_eq!(card.properties().backdrop_opacity.get(), 0.0);
        assert!(card.properties().handle_offset.is_none());
        assert_eq!(card.engine().animations().len(), 2);
    }

    #[test]
    fn drag_handle_adds_third_animation() {
        let config = CardConfig {
            show_drag_handle: true,
            ..CardConfig::default()
        };
        let (card, _, _observer) = card_with_counter(config);
        assert_eq!(card.engine().animations().len(), 3);
        assert_eq!(
            card.properties().handle_offset.as_ref().map(AnimatedValue::get),
            Some(300.0)
        );
    }

    #[test]
    fn present_locks_drags_until_open() {
        let (mut card, closes, _observer) = card_with_counter(CardConfig::default());
        card.present();

        assert!(!card.engine().interactions_enabled());
        assert_eq!(
            card.handle_drag(DragPhase::Began { velocity_y: 0.0 }),
            DragOutcome::Ignored
        );
        card.handle_drag(DragPhase::Ended);

        settle(&mut card);
        assert_eq!(card.state(), CardState::Opened);
        assert!(card.engine().interactions_enabled());
        assert_eq!(card.properties().card_offset.get(), 0.0);
        assert!((card.properties().backdrop_opacity.get() - 0.3).abs() < 1e-6);
        assert_eq!(closes.get(), 0);
    }

    #[test]
    fn dismiss_closes_and_notifies() {
        let (mut card, closes, _observer) = card_with_counter(CardConfig::default());
        card.present();
        settle(&mut card);

        assert!(card.dismiss().is_some());
        assert_eq!(
            card.handle_drag(DragPhase::Began { velocity_y: 0.0 }),
            DragOutcome::Ignored
        );
        settle(&mut card);

        assert_eq!(card.state(), CardState::Closed);
        assert_eq!(card.properties().card_offset.get(), 300.0);
        assert_eq!(closes.get(), 1);
        assert!(card.dismiss().is_none());
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn dismiss_during_present_still_closes() {
        let (mut card, closes, _observer) = card_with_counter(CardConfig::default());
        card.present();
        card.tick(Duration::from_millis(100));
        card.dismiss();
        settle(&mut card);

        assert_eq!(card.state(), CardState::Closed);
        assert_eq!(closes.get(), 1);
        assert!(!card.engine().interactions_enabled());
    }

    #[test]
    fn instant_config_presents_synchronously() {
        let config = CardConfig {
            animation_duration_secs: 0.0,
            ..CardConfig::default()
        };
        let (mut card, _, _observer) = card_with_counter(config);
        card.present();

        assert!(card.engine().is_idle());
        assert_eq!(card.state(), CardState::Opened);
        assert!(card.engine().interactions_enabled());
    }

    #[test]
    fn content_is_accessible() {
        let (mut card, _, _observer) = card_with_counter(CardConfig::default());
        card.content_mut().push("Gamma");
        assert_eq!(card.content().len(), 3);
    }

    #[test]
    fn drag_policy_rejects_other_drags() {
        let (card, _, _observer) = card_with_counter(CardConfig::default());
        assert!(card.should_recognize_simultaneously(GestureKind::Tap));
        assert!(!card.should_recognize_simultaneously(GestureKind::Drag));
    }
}
