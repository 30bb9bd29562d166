//! Connecting paths returned by the path finder.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Cell;

/// A connecting path between two tiles.
///
/// Holds every lattice point from the start tile to the end tile inclusive,
/// each one step from the previous.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Cell>,
}

impl Path {
    /// Wrap a point sequence.
    ///
    /// # Panics
    ///
    /// If fewer than two points are given.
    #[must_use]
    pub fn new(points: Vec<Cell>) -> Self {
        assert!(points.len() >= 2, "A path needs a start and an end");
        Self { points }
    }

    /// Every lattice point, start and end included.
    #[must_use]
    pub fn points(&self) -> &[Cell] {
        &self.points
    }

    /// First point (the tile the search started from).
    #[must_use]
    pub fn start(&self) -> Cell {
        self.points[0]
    }

    /// Last point (the matched tile).
    #[must_use]
    pub fn end(&self) -> Cell {
        self.points[self.points.len() - 1]
    }

    /// Number of lattice points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, since `new` requires two points. Pairs with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Start, every turning point, and end.
    ///
    /// This is what a renderer needs to draw the connecting line.
    #[must_use]
    pub fn corners(&self) -> SmallVec<[Cell; 4]> {
        let mut corners = SmallVec::new();
        corners.push(self.start());
        for window in self.points.windows(3) {
            let horizontal_in = window[0].row == window[1].row;
            let horizontal_out = window[1].row == window[2].row;
            if horizontal_in != horizontal_out {
                corners.push(window[1]);
            }
        }
        corners.push(self.end());
        corners
    }

    /// Number of right-angle turns.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.corners().len() - 2
    }
}
