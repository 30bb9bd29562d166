//! Match/shuffle controller: tile selection and match resolution.
//!
//! ## Selection State Machine
//!
//! ```text
//! NoSelection --select--> OneSelected
//! OneSelected --same tile--> NoSelection
//! OneSelected --other type--> OneSelected (replaced)
//! OneSelected --same type, path--> NoSelection (matched)
//! OneSelected --same type, no path--> OneSelected (new tile)
//! ```
//!
//! The controller owns the selection; the board only mirrors it in the
//! tiles' `selected` flags for rendering.

use log::warn;

use crate::board::Board;
use crate::core::{Cell, TileRng};
use crate::path::PathFinder;
use crate::solver::{MatchHint, Scanner};

/// Where the selection state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    NoSelection,
    OneSelected(Cell),
}

/// Result of clicking a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Border, empty or off-board cell, or the game is not running.
    Ignored,
    /// First tile picked.
    Selected(Cell),
    /// The selected tile was clicked again.
    Deselected(Cell),
    /// A tile of a different type replaced the selection.
    Replaced { previous: Cell, current: Cell },
    /// Two tiles were matched and hidden.
    Matched(MatchHint),
    /// Same type but no legal path; `current` is now selected.
    MatchFailed { previous: Cell, current: Cell },
}

impl SelectOutcome {
    /// True for a successful match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, SelectOutcome::Matched(_))
    }
}

/// Summary of a solvability-preserving shuffle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShuffleReport {
    /// Type-only shuffles performed.
    pub attempts: u32,
    /// Whether the forced-pairing fallback had to run.
    pub forced: bool,
    /// Whether the board ended solvable (false only with fewer than two tiles).
    pub solvable: bool,
}

/// Selection, matching, hints and shuffling over a board.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    scanner: Scanner,
    selection: Option<Cell>,
}

impl Controller {
    /// Create a controller using `finder` for every path check.
    #[must_use]
    pub fn new(finder: PathFinder) -> Self {
        Self {
            scanner: Scanner::new(finder),
            selection: None,
        }
    }

    /// The scanner backing hints and solvability checks.
    #[must_use]
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Currently selected cell.
    #[must_use]
    pub fn selection(&self) -> Option<Cell> {
        self.selection
    }

    /// Current selection state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        match self.selection {
            Some(cell) => SelectionState::OneSelected(cell),
            None => SelectionState::NoSelection,
        }
    }

    /// Drop any selection.
    pub fn clear_selection(&mut self, board: &mut Board) {
        self.selection = None;
        board.clear_selection();
    }

    /// Handle a click on `cell`.
    pub fn select(&mut self, board: &mut Board, cell: Cell) -> SelectOutcome {
        let Some(clicked_type) = board.tile_type(cell) else {
            return SelectOutcome::Ignored;
        };

        let Some(previous) = self.selection else {
            self.pick(board, cell);
            return SelectOutcome::Selected(cell);
        };

        if previous == cell {
            self.clear_selection(board);
            return SelectOutcome::Deselected(cell);
        }

        if board.tile_type(previous) != Some(clicked_type) {
            self.pick(board, cell);
            return SelectOutcome::Replaced {
                previous,
                current: cell,
            };
        }

        match self.scanner.finder().find(board, previous, cell) {
            Some(path) => {
                self.clear_selection(board);
                board.hide(previous);
                board.hide(cell);
                SelectOutcome::Matched(MatchHint {
                    first: previous,
                    second: cell,
                    tile_type: clicked_type,
                    path,
                })
            }
            None => {
                self.pick(board, cell);
                SelectOutcome::MatchFailed {
                    previous,
                    current: cell,
                }
            }
        }
    }

    fn pick(&mut self, board: &mut Board, cell: Cell) {
        board.clear_selection();
        board.set_selected(cell, true);
        self.selection = Some(cell);
    }

    /// A legal match, if one exists. Does not touch the board.
    #[must_use]
    pub fn hint(&self, board: &Board) -> Option<MatchHint> {
        self.scanner.find_match(board)
    }

    /// Whether any legal match exists.
    #[must_use]
    pub fn is_solvable(&self, board: &Board) -> bool {
        self.scanner.is_solvable(board)
    }

    /// Permute the types of all visible tiles once.
    pub fn shuffle(&mut self, board: &mut Board, rng: &mut TileRng) {
        self.clear_selection(board);
        board.permute_types(rng);
    }

    /// Shuffle up to `max_attempts` times until a legal match exists.
    ///
    /// Returns the number of shuffles used, or `None` if every attempt left
    /// the board deadlocked.
    pub fn reshuffle(&mut self, board: &mut Board, rng: &mut TileRng, max_attempts: u32) -> Option<u32> {
        for attempt in 1..=max_attempts {
            self.shuffle(board, rng);
            if self.is_solvable(board) {
                return Some(attempt);
            }
        }
        None
    }

    /// Make a connectable pair share a type by swapping one type.
    ///
    /// Picks two cells that connect regardless of type, then swaps the
    /// second cell's type with the twin of the first. Positions and
    /// per-type counts are unchanged. Returns false only when fewer than two
    /// tiles remain.
    pub fn force_pair(&mut self, board: &mut Board) -> bool {
        let Some((anchor, partner)) = self.scanner.find_connectable_cells(board) else {
            return false;
        };
        let Some(anchor_type) = board.tile_type(anchor) else {
            return false;
        };
        if board.tile_type(partner) != Some(anchor_type) {
            let twin = board
                .visible_cells()
                .into_iter()
                .find(|&c| c != anchor && board.tile_type(c) == Some(anchor_type));
            match twin {
                Some(twin) => board.swap_types(twin, partner),
                None => return false,
            }
        }
        self.clear_selection(board);
        true
    }

    /// Shuffle so the board is left with at least one legal match.
    ///
    /// Tries `max_attempts` plain shuffles (at least one), then falls back
    /// to [`force_pair`](Self::force_pair), so this always terminates.
    pub fn shuffle_until_solvable(
        &mut self,
        board: &mut Board,
        rng: &mut TileRng,
        max_attempts: u32,
    ) -> ShuffleReport {
        let max_attempts = max_attempts.max(1);
        if let Some(attempts) = self.reshuffle(board, rng, max_attempts) {
            return ShuffleReport {
                attempts,
                forced: false,
                solvable: true,
            };
        }

        if board.visible_count() >= 2 {
            warn!(
                "no legal match after {} shuffles; forcing a pair\n{}",
                max_attempts, board
            );
        }
        let solvable = self.force_pair(board);
        ShuffleReport {
            attempts: max_attempts,
            forced: solvable,
            solvable,
        }
    }
}
