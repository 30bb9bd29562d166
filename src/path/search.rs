//! Turn-limited breadth-first search.

use std::collections::VecDeque;

use super::route::Path;
use super::{Lattice, MAX_TURNS};
use crate::core::{Cell, Direction};

/// Parent marker for states reached directly from the start cell.
const FROM_START: usize = usize::MAX;

/// One search state: where we are and which way we arrived.
#[derive(Clone, Copy, Debug)]
struct Step {
    cell: Cell,
    heading: Direction,
    turns: u8,
}

/// Finds connecting paths with a bounded number of turns.
///
/// The search runs over `(cell, heading)` states. Moving on in the same
/// heading is free; changing axis costs one turn. Free moves go to the front
/// of the queue and turns to the back, so states come off the queue in
/// non-decreasing turn order and the first path found to the destination
/// has the fewest turns possible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathFinder {
    max_turns: u8,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new(MAX_TURNS)
    }
}

impl PathFinder {
    /// Create a finder allowing at most `max_turns` turns.
    #[must_use]
    pub const fn new(max_turns: u8) -> Self {
        Self { max_turns }
    }

    /// The configured turn limit.
    #[must_use]
    pub const fn max_turns(&self) -> u8 {
        self.max_turns
    }

    /// Search for a path from `from` to `to`.
    ///
    /// Intermediate cells must be passable. `to` is accepted as the final
    /// step even though it holds a tile. Returns `None` when `from == to`,
    /// when either end lies off the lattice, or when no path within the turn
    /// limit exists.
    #[must_use]
    pub fn find<L: Lattice + ?Sized>(&self, lattice: &L, from: Cell, to: Cell) -> Option<Path> {
        let (height, width) = lattice.dimensions();
        let on_lattice = |c: Cell| c.row < height && c.col < width;
        if from == to || !on_lattice(from) || !on_lattice(to) {
            return None;
        }

        let state_count = height * width * Direction::ALL.len();
        let state_of = |c: Cell, d: Direction| (c.row * width + c.col) * Direction::ALL.len() + d.index();

        let mut best = vec![u8::MAX; state_count];
        let mut parent = vec![FROM_START; state_count];
        let mut queue: VecDeque<Step> = VecDeque::new();

        for heading in Direction::ALL {
            let Some(next) = from.neighbor(heading).filter(|&c| on_lattice(c)) else {
                continue;
            };
            if next != to && !lattice.is_passable(next) {
                continue;
            }
            best[state_of(next, heading)] = 0;
            queue.push_back(Step {
                cell: next,
                heading,
                turns: 0,
            });
        }

        while let Some(step) = queue.pop_front() {
            let current = state_of(step.cell, step.heading);
            if step.turns > best[current] {
                continue;
            }
            if step.cell == to {
                return Some(rebuild(from, current, &parent, width));
            }

            for heading in Direction::ALL {
                if heading == step.heading.opposite() {
                    continue;
                }
                let turned = step.heading.turns_into(heading);
                let turns = step.turns.saturating_add(u8::from(turned));
                if turns > self.max_turns {
                    continue;
                }
                let Some(next) = step.cell.neighbor(heading).filter(|&c| on_lattice(c)) else {
                    continue;
                };
                if next != to && !lattice.is_passable(next) {
                    continue;
                }

                let state = state_of(next, heading);
                if turns >= best[state] {
                    continue;
                }
                best[state] = turns;
                parent[state] = current;

                let next_step = Step {
                    cell: next,
                    heading,
                    turns,
                };
                if turned {
                    queue.push_back(next_step);
                } else {
                    queue.push_front(next_step);
                }
            }
        }

        None
    }
}

/// Walk parent links back from the destination state.
fn rebuild(from: Cell, end_state: usize, parent: &[usize], width: usize) -> Path {
    let cell_of = |state: usize| {
        let idx = state / Direction::ALL.len();
        Cell::new(idx / width, idx % width)
    };

    let mut points = vec![cell_of(end_state)];
    let mut state = parent[end_state];
    while state != FROM_START {
        points.push(cell_of(state));
        state = parent[state];
    }
    points.push(from);
    points.reverse();
    Path::new(points)
}

/// Search with the standard two-turn limit.
///
/// ```
/// use connect_tiles::board::Board;
/// use connect_tiles::core::Cell;
/// use connect_tiles::path::find_path;
///
/// // Two 1s separated by a 2: route around through the border.
/// let board = Board::from_types(1, 3, &[1, 2, 1]);
/// let path = find_path(&board, Cell::new(1, 1), Cell::new(1, 3)).unwrap();
/// assert_eq!(path.turns(), 2);
/// ```
#[must_use]
pub fn find_path<L: Lattice + ?Sized>(lattice: &L, from: Cell, to: Cell) -> Option<Path> {
    PathFinder::default().find(lattice, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain passability grid for exercising the search without a board.
    struct Grid {
        height: usize,
        width: usize,
        open: Vec<bool>,
    }

    impl Grid {
        /// `#` is blocked, anything else open.
        fn parse(rows: &[&str]) -> Self {
            let height = rows.len();
            let width = rows[0].len();
            let open = rows.iter().flat_map(|r| r.chars().map(|ch| ch != '#')).collect();
            Self { height, width, open }
        }
    }

    impl Lattice for Grid {
        fn dimensions(&self) -> (usize, usize) {
            (self.height, self.width)
        }

        fn is_passable(&self, cell: Cell) -> bool {
            self.open[cell.row * self.width + cell.col]
        }
    }

    fn assert_contiguous(path: &Path) {
        for pair in path.points().windows(2) {
            assert_eq!(pair[0].distance(pair[1]), 1, "gap between {} and {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_adjacent_endpoints() {
        let grid = Grid::parse(&["....", ".##.", "...."]);
        let path = find_path(&grid, Cell::new(1, 1), Cell::new(1, 2)).unwrap();
        assert_eq!(path.points(), &[Cell::new(1, 1), Cell::new(1, 2)]);
    }

    #[test]
    fn test_same_cell_has_no_path() {
        let grid = Grid::parse(&["...", "...", "..."]);
        assert!(find_path(&grid, Cell::new(1, 1), Cell::new(1, 1)).is_none());
    }

    #[test]
    fn test_straight_line_preferred() {
        let grid = Grid::parse(&["......", "......", "......"]);
        let path = find_path(&grid, Cell::new(1, 0), Cell::new(1, 5)).unwrap();
        assert_eq!(path.turns(), 0);
        assert_eq!(path.len(), 6);
    }

    #[test]
    fn test_one_turn() {
        let grid = Grid::parse(&[
            "#####",
            "#...#",
            "#.#.#",
            "#####",
        ]);
        let path = find_path(&grid, Cell::new(2, 1), Cell::new(1, 3)).unwrap();
        assert_eq!(path.turns(), 1);
        assert_contiguous(&path);
    }

    #[test]
    fn test_two_turns_around_obstacle() {
        let mut grid = Grid::parse(&[
            ".....",
            ".###.",
            ".....",
        ]);
        // Endpoints at both ends of the bottom row, a tile between them.
        for col in [0, 2, 4] {
            grid.open[2 * 5 + col] = false;
        }
        let path = find_path(&grid, Cell::new(2, 0), Cell::new(2, 4)).unwrap();
        assert_eq!(path.turns(), 2);
        assert_contiguous(&path);
    }

    #[test]
    fn test_three_turns_rejected() {
        // A staircase that needs three turns.
        let grid = Grid::parse(&[
            "#######",
            "#....##",
            "####.##",
            "####..#",
            "#######",
        ]);
        let from = Cell::new(1, 0);
        let to = Cell::new(4, 5);
        assert!(find_path(&grid, from, to).is_none());
        assert!(PathFinder::new(3).find(&grid, from, to).is_some());
    }

    #[test]
    fn test_endpoints_never_pass_through() {
        // The only corridor is plugged by a tile between the endpoints.
        let mut grid = Grid::parse(&["#.#", "#.#", "#.#"]);
        grid.open[4] = false;
        assert!(find_path(&grid, Cell::new(0, 1), Cell::new(2, 1)).is_none());
    }

    #[test]
    fn test_off_lattice_endpoint() {
        let grid = Grid::parse(&["..", ".."]);
        assert!(find_path(&grid, Cell::new(0, 0), Cell::new(5, 5)).is_none());
    }

    #[test]
    fn test_zero_turn_finder() {
        let grid = Grid::parse(&["...", "...", "..."]);
        let finder = PathFinder::new(0);
        assert!(finder.find(&grid, Cell::new(0, 0), Cell::new(0, 2)).is_some());
        assert!(finder.find(&grid, Cell::new(0, 0), Cell::new(2, 2)).is_none());
    }

    #[test]
    fn test_minimum_turns_found() {
        // A one-turn route exists alongside longer two-turn routes.
        let grid = Grid::parse(&[
            ".....",
            ".....",
            ".....",
            ".....",
        ]);
        let path = find_path(&grid, Cell::new(0, 0), Cell::new(3, 4)).unwrap();
        assert_eq!(path.turns(), 1);
        assert_contiguous(&path);
    }
}
