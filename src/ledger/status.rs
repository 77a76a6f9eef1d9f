//! Ledger Entry Status FSM
//!
//! Status IDs are designed for PostgreSQL storage as SMALLINT.
//! Terminal states: COMPLETED (10), FAILED (-10), REVERSED (-20)

use std::fmt;

/// Lifecycle status of a ledger entry
///
/// PENDING is the only valid initial state. An attempt ends in exactly one
/// terminal status. REVERSED is reserved for compensating entries written
/// after completion; the transfer flow itself never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum EntryStatus {
    /// Initial state - entry recorded, funds not yet moved
    Pending = 0,

    /// Terminal: debit committed, audit written
    Completed = 10,

    /// Terminal: attempt aborted, no funds moved
    Failed = -10,

    /// Terminal: completed entry compensated by a separate entry
    Reversed = -20,
}

impl EntryStatus {
    /// Check if this is a terminal status for the attempt
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EntryStatus::Completed | EntryStatus::Failed | EntryStatus::Reversed
        )
    }

    /// Check whether a transition to `next` is legal
    pub fn can_transition_to(&self, next: EntryStatus) -> bool {
        matches!(
            (self, next),
            (EntryStatus::Pending, EntryStatus::Completed)
                | (EntryStatus::Pending, EntryStatus::Failed)
                | (EntryStatus::Completed, EntryStatus::Reversed)
        )
    }

    /// Get the numeric status ID for PostgreSQL storage
    #[inline]
    pub fn id(&self) -> i16 {
        *self as i16
    }

    /// Convert from PostgreSQL status ID
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(EntryStatus::Pending),
            10 => Some(EntryStatus::Completed),
            -10 => Some(EntryStatus::Failed),
            -20 => Some(EntryStatus::Reversed),
            _ => None,
        }
    }

    /// Get human-readable status name
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "PENDING",
            EntryStatus::Completed => "COMPLETED",
            EntryStatus::Failed => "FAILED",
            EntryStatus::Reversed => "REVERSED",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i16> for EntryStatus {
    type Error = ();

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        EntryStatus::from_id(value).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(EntryStatus::Completed.is_terminal());
        assert!(EntryStatus::Failed.is_terminal());
        assert!(EntryStatus::Reversed.is_terminal());

        assert!(!EntryStatus::Pending.is_terminal());
    }

    #[test]
    fn test_legal_transitions() {
        assert!(EntryStatus::Pending.can_transition_to(EntryStatus::Completed));
        assert!(EntryStatus::Pending.can_transition_to(EntryStatus::Failed));
        assert!(EntryStatus::Completed.can_transition_to(EntryStatus::Reversed));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!EntryStatus::Pending.can_transition_to(EntryStatus::Reversed));
        assert!(!EntryStatus::Completed.can_transition_to(EntryStatus::Pending));
        assert!(!EntryStatus::Completed.can_transition_to(EntryStatus::Failed));
        assert!(!EntryStatus::Failed.can_transition_to(EntryStatus::Completed));
        assert!(!EntryStatus::Failed.can_transition_to(EntryStatus::Reversed));
        assert!(!EntryStatus::Reversed.can_transition_to(EntryStatus::Pending));
    }

    #[test]
    fn test_status_id_roundtrip() {
        let statuses = [
            EntryStatus::Pending,
            EntryStatus::Completed,
            EntryStatus::Failed,
            EntryStatus::Reversed,
        ];

        for status in statuses {
            let id = status.id();
            let recovered = EntryStatus::from_id(id).unwrap();
            assert_eq!(status, recovered);
        }
    }

    #[test]
    fn test_invalid_status_id() {
        assert!(EntryStatus::from_id(1).is_none());
        assert!(EntryStatus::from_id(999).is_none());
        assert!(EntryStatus::from_id(-999).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(EntryStatus::Pending.to_string(), "PENDING");
        assert_eq!(EntryStatus::Completed.to_string(), "COMPLETED");
        assert_eq!(EntryStatus::Failed.to_string(), "FAILED");
        assert_eq!(EntryStatus::Reversed.to_string(), "REVERSED");
    }
}
