//! Close notification capability.

use std::rc::Weak;

/// Receives the engine's close notification.
///
/// The engine holds its observer weakly: if the presenting shell has been torn
/// down by the time a transition settles, the notification is skipped.
pub trait CardCloseObserver {
    /// The card came to rest closed after a committed drag or a
    /// programmatic dismissal.
    fn card_did_close(&self);
}

impl<F: Fn()> CardCloseObserver for F {
    fn card_did_close(&self) {
        self()
    }
}

/// Weak reference to a close observer.
pub type CloseObserverRef = Weak<dyn CardCloseObserver>;
