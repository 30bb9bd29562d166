//! # connect-tiles
//!
//! Engine for connect-tiles matching puzzles: clear a grid of paired tiles by
//! joining two tiles of the same type with a path of at most two right-angle
//! turns that passes only through empty cells or the border around the grid.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, input or audio. A front end
//!    drives a [`Session`] and reads back [`Snapshot`]s and the [`Board`].
//!
//! 2. **Always Solvable**: While a game is running at least one legal match
//!    exists. Deadlocks are repaired by type-only shuffles.
//!
//! 3. **Deterministic**: All randomness flows from the configured seed, so a
//!    game can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: Cells, directions, tile types, RNG, configuration, errors
//! - `board`: The bordered tile lattice
//! - `path`: Turn-limited path finding over any lattice
//! - `solver`: Scanning a board for legal matches
//! - `game`: Selection controller and the game session

pub mod core;
pub mod board;
pub mod path;
pub mod solver;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Cell, Direction, TileType,
    TileRng, TileRngState,
    GameConfig, ConfigError,
};

pub use crate::board::{Board, CellView, Tile};

pub use crate::path::{find_path, Lattice, Path, PathFinder, MAX_TURNS};

pub use crate::solver::{find_match, is_solvable, MatchHint, Scanner};

pub use crate::game::{
    Controller, SelectOutcome, SelectionState, ShuffleReport,
    Session, SessionEvent, SessionStats,
    GameStatus, Highlight, HighlightKind, Snapshot,
};
