//! Simultaneous gesture recognition.

use serde::{Deserialize, Serialize};

/// Kinds of gesture recognizers a host may attach alongside the card drag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GestureKind {
    /// Continuous drag/pan, the kind the card itself uses.
    Drag,
    Tap,
    LongPress,
    Pinch,
    Rotation,
    Swipe,
    /// Anything the host does not classify.
    Other,
}

/// Whether the card drag may be recognized together with `other`.
///
/// Everything is allowed except another drag: two drags interpreting the same
/// touches would fight over the card.
pub fn should_recognize_simultaneously(other: GestureKind) -> bool {
    other != GestureKind::Drag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_excludes_only_other_drags() {
        assert!(!should_recognize_simultaneously(GestureKind::Drag));
        for kind in [
            GestureKind::Tap,
            GestureKind::LongPress,
            GestureKind::Pinch,
            GestureKind::Rotation,
            GestureKind::Swipe,
            GestureKind::Other,
        ] {
            assert!(should_recognize_simultaneously(kind), "{:?}", kind);
        }
    }
}
