//! Per-session counters for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Successful matches.
    pub matches: u32,

    /// Same-type clicks that could not be connected.
    pub failed_matches: u32,

    /// Hints spent.
    pub hints_used: u32,

    /// Shuffles paid for from the budget.
    pub paid_shuffles: u32,

    /// Free shuffles after a match left the board deadlocked.
    pub automatic_shuffles: u32,

    /// Individual type permutations tried across all shuffles.
    pub shuffle_attempts: u32,

    /// Times the forced-pairing fallback ran.
    pub forced_pairings: u32,

    /// Full re-deals at game start.
    pub regenerations: u32,
}

impl SessionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of same-type attempts that matched.
    #[must_use]
    pub fn match_accuracy(&self) -> f64 {
        let attempts = self.matches + self.failed_matches;
        if attempts == 0 {
            0.0
        } else {
            self.matches as f64 / attempts as f64
        }
    }

    /// Shuffles of either kind.
    #[must_use]
    pub fn total_shuffles(&self) -> u32 {
        self.paid_shuffles + self.automatic_shuffles
    }
}
