//! Lattice coordinates, movement directions and tile types.
//!
//! ## Coordinate Layout
//!
//! A board with an `R x C` interior lives on an `(R + 2) x (C + 2)` lattice:
//! - Row `0`, row `R + 1`, column `0` and column `C + 1` form the border ring
//! - `1..=R` x `1..=C` is the interior where tiles are dealt
//!
//! The border is never occupied, so paths may always route around the
//! outside of the board.
//!
//! ## Usage
//!
//! ```
//! use connect_tiles::core::{Cell, Direction};
//!
//! let cell = Cell::new(1, 1);
//! assert_eq!(cell.neighbor(Direction::Up), Some(Cell::new(0, 1)));
//! assert_eq!(Cell::new(0, 0).neighbor(Direction::Left), None);
//! ```

use serde::{Deserialize, Serialize};

/// A point on the bordered lattice.
///
/// Ordering is row-major, which the solver relies on for deterministic
/// scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in `direction`.
    ///
    /// Returns `None` when the step would leave the lattice through row or
    /// column zero. Upper bounds are checked by the caller, which knows the
    /// lattice dimensions.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }

    /// Manhattan distance to another cell.
    #[must_use]
    pub fn distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// One of the four axis-aligned movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in search expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column offset of a single step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing back the way this one came.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for `Left` and `Right`.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Whether moving in `next` after `self` counts as a turn.
    ///
    /// Only an axis change is a turn. Reversing along the same axis is not
    /// a turn, but it can never be useful since it revisits a cell.
    #[must_use]
    pub const fn turns_into(self, next: Direction) -> bool {
        self.is_horizontal() != next.is_horizontal()
    }

    /// Dense index for per-direction tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Opaque tile type identifier.
///
/// The engine only compares types for equality. Mapping a type to a glyph,
/// colour or sprite is the presentation layer's business. Dealt tiles always
/// carry a non-zero type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileType(pub u16);

impl TileType {
    /// Create a new tile type.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw type value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type({})", self.0)
    }
}
