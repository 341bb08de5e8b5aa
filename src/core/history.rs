//! Ledger of settled card transitions.
//!
//! Every transition that reaches a resting state leaves one
//! [`TransitionRecord`] behind, including how it got there. The ledger is
//! immutable: [`TransitionHistory::record`] returns a new history.

use super::state::CardState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Identifier shared by every handle of one transition.
///
/// A gesture that is cancelled back to its start keeps its identifier for the
/// snap-back, so the ledger shows a single entry for the whole interaction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TransitionId(Uuid);

impl TransitionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransitionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an in-flight transition was resolved.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Resolution {
    /// Driven programmatically and allowed to run to completion.
    Driven,
    /// Released at or past the close threshold and played to its target.
    Committed,
    /// Released below the threshold and snapped back to where it began.
    CancelledToStart,
}

impl Resolution {
    /// Whether settling closed through this resolution should notify the
    /// close observer.
    ///
    /// Snap-backs never do, whatever state they settle in.
    pub fn notifies_close(self) -> bool {
        matches!(self, Self::Driven | Self::Committed)
    }
}

/// Record of one settled transition.
///
/// # Example
///
/// ```rust
/// use floating_card::core::{CardState, Resolution, TransitionId, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     id: TransitionId::new(),
///     from: CardState::Opened,
///     to: CardState::Opened,
///     resolution: Resolution::CancelledToStart,
///     timestamp: Utc::now(),
/// };
/// assert!(record.is_round_trip());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub id: TransitionId,
    /// State the card rested in when the transition began
    pub from: CardState,
    /// State the card came to rest in
    pub to: CardState,
    pub resolution: Resolution,
    /// When the transition settled
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// A transition that ended where it started (cancelled drag).
    pub fn is_round_trip(&self) -> bool {
        self.from == self.to
    }

    /// Whether this record is the one that fired a close notification.
    pub fn closed_card(&self) -> bool {
        self.to == CardState::Closed && self.resolution.notifies_close()
    }
}

/// Ordered history of settled transitions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: Vec<TransitionRecord>,
}

impl TransitionHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Append a record in place.
    pub(crate) fn push(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// Resting states visited, starting with the first record's origin.
    pub fn get_path(&self) -> Vec<CardState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Number of close notifications this history accounts for.
    pub fn close_count(&self) -> usize {
        self.records.iter().filter(|r| r.closed_card()).count()
    }

    /// Count records settled through `resolution`.
    pub fn count(&self, resolution: Resolution) -> usize {
        self.records
            .iter()
            .filter(|r| r.resolution == resolution)
            .count()
    }

    /// Time between the first and last settled transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: CardState, to: CardState, resolution: Resolution) -> TransitionRecord {
        TransitionRecord {
            id: TransitionId::new(),
            from,
            to,
            resolution,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = TransitionHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.close_count(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = TransitionHistory::new();
        let new_history = history.record(record(
            CardState::Closed,
            CardState::Opened,
            Resolution::Driven,
        ));

        assert_eq!(history.records().len(), 0);
        assert_eq!(new_history.records().len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = TransitionHistory::new();
        history.push(record(CardState::Closed, CardState::Opened, Resolution::Driven));
        history.push(record(CardState::Opened, CardState::Closed, Resolution::Committed));

        assert_eq!(history.records().len(), 2);
        assert_eq!(
            history.last().map(|r| r.resolution),
            Some(Resolution::Committed)
        );
        assert_eq!(history.close_count(), 1);
    }

    #[test]
    fn get_path_returns_resting_states() {
        let history = TransitionHistory::new()
            .record(record(
                CardState::Closed,
                CardState::Opened,
                Resolution::Driven,
            ))
            .record(record(
                CardState::Opened,
                CardState::Opened,
                Resolution::CancelledToStart,
            ))
            .record(record(
                CardState::Opened,
                CardState::Closed,
                Resolution::Committed,
            ));

        assert_eq!(
            history.get_path(),
            vec![
                CardState::Closed,
                CardState::Opened,
                CardState::Opened,
                CardState::Closed
            ]
        );
    }

    #[test]
    fn snap_back_to_closed_is_not_a_close() {
        let snap_back = record(
            CardState::Closed,
            CardState::Closed,
            Resolution::CancelledToStart,
        );
        assert!(snap_back.is_round_trip());
        assert!(!snap_back.closed_card());
    }

    #[test]
    fn close_count_only_counts_genuine_closes() {
        let history = TransitionHistory::new()
            .record(record(
                CardState::Opened,
                CardState::Closed,
                Resolution::Committed,
            ))
            .record(record(
                CardState::Closed,
                CardState::Closed,
                Resolution::CancelledToStart,
            ))
            .record(record(
                CardState::Opened,
                CardState::Closed,
                Resolution::Driven,
            ));

        assert_eq!(history.close_count(), 2);
        assert_eq!(history.count(Resolution::CancelledToStart), 1);
    }

    #[test]
    fn single_record_has_zero_duration() {
        let history = TransitionHistory::new().record(record(
            CardState::Closed,
            CardState::Opened,
            Resolution::Driven,
        ));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = TransitionHistory::new().record(record(
            CardState::Opened,
            CardState::Closed,
            Resolution::Committed,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TransitionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.records().len(), 1);
        assert_eq!(deserialized.records()[0].id, history.records()[0].id);
        assert_eq!(deserialized.records()[0].resolution, Resolution::Committed);
    }
}
