//! State published to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::path::Path;

/// Overall session status.
///
/// `Won` and `TimedOut` are terminal until the next `start()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Won,
    TimedOut,
}

impl GameStatus {
    /// True once the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::TimedOut)
    }
}

/// Everything a HUD needs to draw, captured after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u64,
    pub pairs_remaining: usize,
    pub remaining_time: u32,
    pub hint_budget: u32,
    pub shuffle_budget: u32,
    pub status: GameStatus,
}

/// Why a path is being highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightKind {
    /// Suggested match from a hint.
    Hint,
    /// Connecting line of a match just made.
    Match,
}

/// A time-boxed path highlight.
///
/// Expires on the first tick at or after `expires_at` (in elapsed ticks).
/// Restarting the session discards it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub kind: HighlightKind,
    pub path: Path,
    pub expires_at: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::Idle.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::TimedOut.is_terminal());
        assert_eq!(GameStatus::default(), GameStatus::Idle);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = Snapshot {
            score: 120,
            pairs_remaining: 7,
            remaining_time: 42,
            hint_budget: 2,
            shuffle_budget: 1,
            status: GameStatus::Playing,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"status\":\"Playing\""));
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
