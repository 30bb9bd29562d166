//! Game configuration.
//!
//! A `GameConfig` fixes everything about a session that is not random:
//! - Board geometry and the number of tile types dealt
//! - Time limit, hint and shuffle budgets
//! - Scoring constants
//! - Path turn limit and the reshuffle retry policy
//! - RNG seed
//!
//! The presentation layer builds one at startup and hands it to
//! [`Session::new`](crate::game::Session::new).

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::path::MAX_TURNS;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Interior rows (the border ring is added on top).
    pub rows: usize,

    /// Interior columns.
    pub cols: usize,

    /// Number of distinct tile types to deal.
    ///
    /// When smaller than the number of pairs, types are reused cyclically.
    pub tile_types: usize,

    /// Game length in ticks.
    pub time_limit: u32,

    /// Hints available per game.
    pub hint_budget: u32,

    /// Paid shuffles available per game.
    pub shuffle_budget: u32,

    /// Points awarded for every match before the time bonus.
    pub base_score: u32,

    /// Time bonus is `remaining_time / time_bonus_divisor`.
    pub time_bonus_divisor: u32,

    /// Ticks a hint or match highlight stays visible.
    pub highlight_ticks: u32,

    /// Maximum right-angle turns in a connecting path. Must be two.
    pub max_turns: u8,

    /// Type-only reshuffles tried before falling back.
    pub max_reshuffle_attempts: u32,

    /// Full re-deals tried at game start before falling back.
    pub max_regenerations: u32,

    /// Seed for dealing and shuffling.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 12,
            tile_types: 16,
            time_limit: 300,
            hint_budget: 3,
            shuffle_budget: 3,
            base_score: 10,
            time_bonus_divisor: 10,
            highlight_ticks: 1,
            max_turns: MAX_TURNS,
            max_reshuffle_attempts: 16,
            max_regenerations: 4,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a board of the given interior size.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the number of tile types.
    #[must_use]
    pub fn with_tile_types(mut self, types: usize) -> Self {
        self.tile_types = types;
        self
    }

    /// Set the time limit in ticks.
    #[must_use]
    pub fn with_time_limit(mut self, ticks: u32) -> Self {
        self.time_limit = ticks;
        self
    }

    /// Set the hint budget.
    #[must_use]
    pub fn with_hint_budget(mut self, hints: u32) -> Self {
        self.hint_budget = hints;
        self
    }

    /// Set the paid shuffle budget.
    #[must_use]
    pub fn with_shuffle_budget(mut self, shuffles: u32) -> Self {
        self.shuffle_budget = shuffles;
        self
    }

    /// Set the scoring constants.
    #[must_use]
    pub fn with_scoring(mut self, base_score: u32, time_bonus_divisor: u32) -> Self {
        self.base_score = base_score;
        self.time_bonus_divisor = time_bonus_divisor;
        self
    }

    /// Set how many ticks highlights last.
    #[must_use]
    pub fn with_highlight_ticks(mut self, ticks: u32) -> Self {
        self.highlight_ticks = ticks;
        self
    }

    /// Set the reshuffle retry policy.
    #[must_use]
    pub fn with_reshuffle_policy(mut self, attempts: u32, regenerations: u32) -> Self {
        self.max_reshuffle_attempts = attempts;
        self.max_regenerations = regenerations;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of interior cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the configuration can build a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let cells = self.cell_count();
        if cells % 2 != 0 {
            return Err(ConfigError::OddCellCount { cells });
        }
        if self.tile_types == 0 {
            return Err(ConfigError::NoTileTypes);
        }
        if self.tile_types > u16::MAX as usize {
            return Err(ConfigError::TooManyTileTypes(self.tile_types));
        }
        if self.time_limit == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.time_bonus_divisor == 0 {
            return Err(ConfigError::ZeroBonusDivisor);
        }
        if self.max_turns != MAX_TURNS {
            return Err(ConfigError::UnsupportedTurnLimit(self.max_turns));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_turns, 2);
        assert_eq!(config.cell_count(), 96);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new(4, 6)
            .with_tile_types(5)
            .with_time_limit(60)
            .with_hint_budget(1)
            .with_shuffle_budget(0)
            .with_scoring(20, 5)
            .with_seed(123);

        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 6);
        assert_eq!(config.tile_types, 5);
        assert_eq!(config.time_limit, 60);
        assert_eq!(config.hint_budget, 1);
        assert_eq!(config.shuffle_budget, 0);
        assert_eq!(config.base_score, 20);
        assert_eq!(config.time_bonus_divisor, 5);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_rejects_odd_cells() {
        let config = GameConfig::new(3, 3);
        assert_eq!(config.validate(), Err(ConfigError::OddCellCount { cells: 9 }));
    }

    #[test]
    fn test_rejects_empty_board() {
        let config = GameConfig::new(0, 4);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBoard { .. })));
    }

    #[test]
    fn test_rejects_degenerate_settings() {
        assert_eq!(
            GameConfig::default().with_tile_types(0).validate(),
            Err(ConfigError::NoTileTypes)
        );
        assert_eq!(
            GameConfig::default().with_time_limit(0).validate(),
            Err(ConfigError::ZeroTimeLimit)
        );
        assert_eq!(
            GameConfig::default().with_scoring(10, 0).validate(),
            Err(ConfigError::ZeroBonusDivisor)
        );

        let mut config = GameConfig::default();
        config.max_turns = 0;
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedTurnLimit(0)));
    }

    #[test]
    fn test_wider_turn_limit_rejected() {
        let mut config = GameConfig::default();
        config.max_turns = 3;
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedTurnLimit(3)));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::OddCellCount { cells: 15 };
        assert_eq!(
            err.to_string(),
            "interior cell count 15 is odd; tiles are dealt in pairs"
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(6, 6).with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
