//! Configuration errors.
//!
//! Gameplay never fails: invalid commands are no-ops. The only fallible
//! surface is building a session from a `GameConfig`.

use thiserror::Error;

/// Reasons a `GameConfig` cannot be used to build a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("interior cell count {cells} is odd; tiles are dealt in pairs")]
    OddCellCount { cells: usize },

    #[error("at least one tile type is required")]
    NoTileTypes,

    #[error("tile type count {0} does not fit in a u16 type id")]
    TooManyTileTypes(usize),

    #[error("time limit must be at least one tick")]
    ZeroTimeLimit,

    #[error("time bonus divisor must be non-zero")]
    ZeroBonusDivisor,

    #[error("matches connect with exactly two turns allowed (got {0})")]
    UnsupportedTurnLimit(u8),
}
