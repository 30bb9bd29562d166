//! Board model: the bordered lattice of tiles.
//!
//! ## Layout
//!
//! The interior `R x C` region holds tiles; a one-cell border ring that never
//! holds a tile surrounds it so paths can route around the outside.
//!
//! ## Mutation
//!
//! The board changes only through:
//! - Dealing (`Board::new`) or an explicit layout (`Board::from_types`)
//! - Hiding the two tiles of a match
//! - Type-only shuffles of the visible tiles
//! - Selection flags, driven by the controller

mod grid;
mod tile;

pub use grid::Board;
pub use tile::{CellView, Tile};
