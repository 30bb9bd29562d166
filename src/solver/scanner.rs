//! Exhaustive search for legal matches.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Cell, TileType};
use crate::path::{Path, PathFinder};

/// A legal match: two same-type tiles and the path joining them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHint {
    pub first: Cell,
    pub second: Cell,
    pub tile_type: TileType,
    pub path: Path,
}

/// Scans a board for connectable pairs.
///
/// Every pair within every type group is tried, not just neighbours, so the
/// cost is O(n^2) path searches. That is fine for the places it runs: level
/// start, after each match, and on request for a hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scanner {
    finder: PathFinder,
}

impl Scanner {
    /// Create a scanner using the given path finder.
    #[must_use]
    pub const fn new(finder: PathFinder) -> Self {
        Self { finder }
    }

    /// The path finder used for each pair.
    #[must_use]
    pub const fn finder(&self) -> PathFinder {
        self.finder
    }

    /// First legal match in scan order, if any.
    ///
    /// Types are scanned in ascending order and cells row-major, so the
    /// result is deterministic for a given board.
    #[must_use]
    pub fn find_match(&self, board: &Board) -> Option<MatchHint> {
        for (tile_type, cells) in group_by_type(board) {
            for (i, &first) in cells.iter().enumerate() {
                for &second in &cells[i + 1..] {
                    if let Some(path) = self.finder.find(board, first, second) {
                        return Some(MatchHint {
                            first,
                            second,
                            tile_type,
                            path,
                        });
                    }
                }
            }
        }
        None
    }

    /// Whether any legal match exists.
    #[must_use]
    pub fn is_solvable(&self, board: &Board) -> bool {
        self.find_match(board).is_some()
    }

    /// Every legal match on the board.
    #[must_use]
    pub fn all_matches(&self, board: &Board) -> Vec<MatchHint> {
        let mut matches = Vec::new();
        for (tile_type, cells) in group_by_type(board) {
            for (i, &first) in cells.iter().enumerate() {
                for &second in &cells[i + 1..] {
                    if let Some(path) = self.finder.find(board, first, second) {
                        matches.push(MatchHint {
                            first,
                            second,
                            tile_type,
                            path,
                        });
                    }
                }
            }
        }
        matches
    }

    /// Two visible cells that would connect if they shared a type.
    ///
    /// With at least two tiles on the board and a turn limit of two or
    /// more this always succeeds: the topmost tiles of any two occupied
    /// columns connect over the top border, and the two topmost tiles of a
    /// single occupied column connect in a straight line.
    #[must_use]
    pub fn find_connectable_cells(&self, board: &Board) -> Option<(Cell, Cell)> {
        let cells = board.visible_cells();
        for (i, &first) in cells.iter().enumerate() {
            for &second in &cells[i + 1..] {
                if self.finder.find(board, first, second).is_some() {
                    return Some((first, second));
                }
            }
        }
        None
    }
}

/// Visible cells grouped by type, types ascending, cells row-major.
fn group_by_type(board: &Board) -> Vec<(TileType, Vec<Cell>)> {
    let mut groups: FxHashMap<TileType, Vec<Cell>> = FxHashMap::default();
    for cell in board.visible_cells() {
        if let Some(tile_type) = board.tile_type(cell) {
            groups.entry(tile_type).or_default().push(cell);
        }
    }
    let mut groups: Vec<_> = groups.into_iter().collect();
    groups.sort_unstable_by_key(|(tile_type, _)| *tile_type);
    groups
}

/// [`Scanner::find_match`] with the standard turn limit.
#[must_use]
pub fn find_match(board: &Board) -> Option<MatchHint> {
    Scanner::default().find_match(board)
}

/// [`Scanner::is_solvable`] with the standard turn limit.
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    Scanner::default().is_solvable(board)
}
