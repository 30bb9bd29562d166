//! Path finder: turn-limited connectivity between two tiles.
//!
//! ## Rules
//!
//! Two tiles connect when a path of axis-aligned steps joins them such that:
//! - Every cell strictly between the endpoints is passable (border or
//!   already-cleared interior)
//! - The path changes axis at most `MAX_TURNS` times
//!
//! ## Genericity
//!
//! The search only needs to know the lattice size and which cells are open,
//! so it runs over any [`Lattice`]. [`Board`](crate::board::Board) is the
//! production implementation; tests use plain boolean grids.

mod route;
mod search;

pub use route::Path;
pub use search::{find_path, PathFinder};

use crate::core::Cell;

/// Default turn limit for a legal match.
pub const MAX_TURNS: u8 = 2;

/// A rectangular grid of passable and blocked cells.
pub trait Lattice {
    /// `(height, width)` of the whole lattice, border included.
    fn dimensions(&self) -> (usize, usize);

    /// Whether a path may pass through `cell`.
    ///
    /// Only called for cells inside `dimensions()`.
    fn is_passable(&self, cell: Cell) -> bool;
}
