//! Session history.
//!
//! Every state-changing operation appends one or more `SessionEvent`s. The
//! history is cleared by `start()` and is useful for replays, analytics and
//! tests that care about the order things happened in.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, TileType};

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new game began with this many pairs on the board.
    Started { pairs: usize },
    /// Two tiles were removed.
    Matched {
        first: Cell,
        second: Cell,
        tile_type: TileType,
        points: u64,
    },
    /// Two same-type tiles could not be connected.
    MatchFailed { previous: Cell, current: Cell },
    /// A hint was spent; `found` is false when no match existed.
    HintUsed { found: bool },
    /// Tile types were reshuffled.
    Shuffled { automatic: bool, forced: bool },
    /// The dealt board was thrown away and dealt again.
    Regenerated,
    /// Every tile was cleared.
    Won { score: u64 },
    /// The clock ran out.
    TimedOut { score: u64 },
}

impl SessionEvent {
    /// Whether this event ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionEvent::Won { .. } | SessionEvent::TimedOut { .. })
    }
}
