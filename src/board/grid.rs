//! The bordered tile lattice.

use rustc_hash::FxHashMap;

use super::tile::{CellView, Tile};
use crate::core::{Cell, TileRng, TileType};
use crate::path::Lattice;

/// An `R x C` board stored on an `(R + 2) x (C + 2)` lattice.
///
/// The outer ring never holds a tile. Interior cells hold a `Tile` from the
/// deal onward; matched tiles stay in place but invisible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major over the full lattice. `None` for border cells and for
    /// interior cells left empty by an explicit layout.
    cells: Vec<Option<Tile>>,
}

impl Board {
    /// Deal a fresh board.
    ///
    /// The interior receives two tiles for each of `rows * cols / 2` pair
    /// slots. Slot `i` gets type `(i mod types) + 1`, so types repeat
    /// cyclically when there are fewer types than pairs. The whole type
    /// sequence is shuffled before being laid out row-major.
    ///
    /// # Panics
    ///
    /// If the interior is empty or has an odd cell count, or `types` is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize, types: usize, rng: &mut TileRng) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        assert!((rows * cols) % 2 == 0, "Board must have an even cell count");
        assert!(types > 0, "Must have at least one tile type");

        let pairs = (rows * cols).div_ceil(2);
        let mut deck: Vec<TileType> = Vec::with_capacity(pairs * 2);
        for slot in 0..pairs {
            let tile_type = TileType::new((slot % types) as u16 + 1);
            deck.push(tile_type);
            deck.push(tile_type);
        }
        rng.shuffle(&mut deck);

        let mut board = Self::empty(rows, cols);
        for (cell, tile_type) in board.interior_cells().collect::<Vec<_>>().into_iter().zip(deck) {
            board.put(cell, Tile::new(tile_type));
        }
        board
    }

    /// Build a board from an explicit row-major interior layout.
    ///
    /// `0` marks an empty cell; any other value is a tile type.
    ///
    /// ```
    /// use connect_tiles::board::Board;
    /// use connect_tiles::core::{Cell, TileType};
    ///
    /// let board = Board::from_types(2, 2, &[1, 2, 2, 1]);
    /// assert_eq!(board.pairs_remaining(), 2);
    /// assert_eq!(board.get(Cell::new(1, 1)).tile_type(), Some(TileType::new(1)));
    /// assert!(board.is_passable(Cell::new(0, 0)));
    /// ```
    ///
    /// # Panics
    ///
    /// If `layout.len() != rows * cols`.
    #[must_use]
    pub fn from_types(rows: usize, cols: usize, layout: &[u16]) -> Self {
        assert_eq!(layout.len(), rows * cols, "Layout must cover the interior");

        let mut board = Self::empty(rows, cols);
        for (cell, &raw) in board.interior_cells().collect::<Vec<_>>().into_iter().zip(layout) {
            if raw != 0 {
                board.put(cell, Tile::new(TileType::new(raw)));
            }
        }
        board
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; (rows + 2) * (cols + 2)],
        }
    }

    fn put(&mut self, cell: Cell, tile: Tile) {
        if let Some(idx) = self.index(cell) {
            self.cells[idx] = Some(tile);
        }
    }

    // === Geometry ===

    /// Interior rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Interior columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `cell` is inside the playable interior.
    #[must_use]
    pub fn is_interior(&self, cell: Cell) -> bool {
        (1..=self.rows).contains(&cell.row) && (1..=self.cols).contains(&cell.col)
    }

    /// Iterate the interior cells in row-major order.
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (1..=self.rows).flat_map(move |row| (1..=cols).map(move |col| Cell::new(row, col)))
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let width = self.cols + 2;
        if cell.row < self.rows + 2 && cell.col < width {
            Some(cell.row * width + cell.col)
        } else {
            None
        }
    }

    // === Cell Access ===

    /// Read a cell.
    ///
    /// Anything outside the interior reads as `Border`; an interior cell
    /// without a visible tile reads as `Empty`.
    #[must_use]
    pub fn get(&self, cell: Cell) -> CellView<'_> {
        if !self.is_interior(cell) {
            return CellView::Border;
        }
        match self.tile(cell) {
            Some(tile) => CellView::Tile(tile),
            None => CellView::Empty,
        }
    }

    /// The visible tile at `cell`, if any.
    #[must_use]
    pub fn tile(&self, cell: Cell) -> Option<&Tile> {
        let idx = self.index(cell)?;
        self.cells[idx].as_ref().filter(|t| t.is_visible())
    }

    fn tile_mut(&mut self, cell: Cell) -> Option<&mut Tile> {
        let idx = self.index(cell)?;
        self.cells[idx].as_mut().filter(|t| t.is_visible())
    }

    /// Type of the visible tile at `cell`.
    #[must_use]
    pub fn tile_type(&self, cell: Cell) -> Option<TileType> {
        self.tile(cell).map(Tile::tile_type)
    }

    /// True iff `cell` is on the lattice and holds no visible tile.
    ///
    /// Endpoints of a path under test are visible tiles and therefore not
    /// passable; the path finder admits the destination as a terminal step.
    #[must_use]
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.index(cell).is_some() && self.tile(cell).is_none()
    }

    // === Mutation ===

    /// Remove a matched tile from play.
    ///
    /// # Panics
    ///
    /// If `cell` does not hold a visible tile. Callers check visibility
    /// before resolving a match.
    pub fn hide(&mut self, cell: Cell) {
        let tile = self
            .tile_mut(cell)
            .unwrap_or_else(|| panic!("hide called on {} which holds no visible tile", cell));
        tile.hide();
    }

    pub(crate) fn set_selected(&mut self, cell: Cell, selected: bool) {
        if let Some(tile) = self.tile_mut(cell) {
            tile.set_selected(selected);
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        for tile in self.cells.iter_mut().flatten() {
            tile.set_selected(false);
        }
    }

    /// Reassign the types of all visible tiles with a uniform shuffle.
    ///
    /// Positions and per-type counts are unchanged.
    pub(crate) fn permute_types(&mut self, rng: &mut TileRng) {
        let cells = self.visible_cells();
        let mut types: Vec<TileType> = cells.iter().filter_map(|&c| self.tile_type(c)).collect();
        rng.shuffle(&mut types);
        for (cell, tile_type) in cells.into_iter().zip(types) {
            if let Some(tile) = self.tile_mut(cell) {
                tile.set_type(tile_type);
            }
        }
    }

    /// Exchange the types of two visible tiles.
    pub(crate) fn swap_types(&mut self, a: Cell, b: Cell) {
        let (Some(ta), Some(tb)) = (self.tile_type(a), self.tile_type(b)) else {
            return;
        };
        if let Some(tile) = self.tile_mut(a) {
            tile.set_type(tb);
        }
        if let Some(tile) = self.tile_mut(b) {
            tile.set_type(ta);
        }
    }

    // === Queries ===

    /// All cells holding a visible tile, row-major.
    #[must_use]
    pub fn visible_cells(&self) -> Vec<Cell> {
        self.interior_cells().filter(|&c| self.tile(c).is_some()).collect()
    }

    /// Number of visible tiles.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cells.iter().flatten().filter(|t| t.is_visible()).count()
    }

    /// Pairs still on the board.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        self.visible_count() / 2
    }

    /// True once every tile has been matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.visible_count() == 0
    }

    /// Count of visible tiles per type.
    #[must_use]
    pub fn type_counts(&self) -> FxHashMap<TileType, usize> {
        let mut counts = FxHashMap::default();
        for tile in self.cells.iter().flatten().filter(|t| t.is_visible()) {
            *counts.entry(tile.tile_type()).or_insert(0) += 1;
        }
        counts
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Cell> {
        self.interior_cells()
            .find(|&c| self.tile(c).is_some_and(Tile::is_selected))
    }
}

impl Lattice for Board {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows + 2, self.cols + 2)
    }

    fn is_passable(&self, cell: Cell) -> bool {
        Board::is_passable(self, cell)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 1..=self.rows {
            for col in 1..=self.cols {
                match self.tile_type(Cell::new(row, col)) {
                    Some(t) => write!(f, "{:>3}", t.raw())?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_deals_pairs() {
        let mut rng = TileRng::new(42);
        let board = Board::new(4, 6, 12, &mut rng);

        assert_eq!(board.visible_count(), 24);
        assert_eq!(board.pairs_remaining(), 12);
        let counts = board.type_counts();
        assert_eq!(counts.len(), 12);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_new_board_reuses_types_cyclically() {
        let mut rng = TileRng::new(42);
        let board = Board::new(4, 4, 3, &mut rng);

        let counts = board.type_counts();
        // 8 pair slots over 3 types: 3, 3 and 2 slots.
        assert_eq!(counts[&TileType::new(1)], 6);
        assert_eq!(counts[&TileType::new(2)], 6);
        assert_eq!(counts[&TileType::new(3)], 4);
    }

    #[test]
    fn test_border_is_empty() {
        let mut rng = TileRng::new(1);
        let board = Board::new(2, 4, 4, &mut rng);

        for col in 0..6 {
            assert_eq!(board.get(Cell::new(0, col)), CellView::Border);
            assert_eq!(board.get(Cell::new(3, col)), CellView::Border);
            assert!(board.is_passable(Cell::new(0, col)));
            assert!(board.is_passable(Cell::new(3, col)));
        }
        assert!(board.is_passable(Cell::new(1, 0)));
        assert!(board.is_passable(Cell::new(2, 5)));
    }

    #[test]
    fn test_outside_lattice() {
        let board = Board::from_types(2, 2, &[1, 1, 2, 2]);
        assert_eq!(board.get(Cell::new(10, 10)), CellView::Border);
        assert!(!board.is_passable(Cell::new(4, 0)));
        assert!(!board.is_passable(Cell::new(0, 4)));
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = Board::new(4, 4, 8, &mut TileRng::new(9));
        let b = Board::new(4, 4, 8, &mut TileRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_types_with_gaps() {
        let board = Board::from_types(2, 3, &[1, 0, 1, 2, 0, 2]);
        assert_eq!(board.visible_count(), 4);
        assert_eq!(board.get(Cell::new(1, 2)), CellView::Empty);
        assert!(board.is_passable(Cell::new(1, 2)));
        assert!(!board.is_passable(Cell::new(1, 1)));
    }

    #[test]
    fn test_hide_makes_cell_passable() {
        let mut board = Board::from_types(2, 2, &[1, 1, 2, 2]);
        let cell = Cell::new(1, 1);
        assert!(!board.is_passable(cell));

        board.hide(cell);

        assert!(board.is_passable(cell));
        assert_eq!(board.get(cell), CellView::Empty);
        assert_eq!(board.pairs_remaining(), 1);
    }

    #[test]
    #[should_panic(expected = "holds no visible tile")]
    fn test_hide_twice_panics() {
        let mut board = Board::from_types(2, 2, &[1, 1, 2, 2]);
        board.hide(Cell::new(1, 1));
        board.hide(Cell::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "even cell count")]
    fn test_odd_board_panics() {
        let _ = Board::new(3, 3, 4, &mut TileRng::new(0));
    }

    #[test]
    fn test_permute_types_keeps_positions_and_counts() {
        let mut board = Board::from_types(3, 4, &[1, 2, 3, 0, 1, 2, 3, 4, 0, 5, 5, 4]);
        let cells_before = board.visible_cells();
        let counts_before = board.type_counts();

        board.permute_types(&mut TileRng::new(3));

        assert_eq!(board.visible_cells(), cells_before);
        assert_eq!(board.type_counts(), counts_before);
    }

    #[test]
    fn test_swap_types() {
        let mut board = Board::from_types(1, 2, &[1, 2]);
        board.swap_types(Cell::new(1, 1), Cell::new(1, 2));
        assert_eq!(board.tile_type(Cell::new(1, 1)), Some(TileType::new(2)));
        assert_eq!(board.tile_type(Cell::new(1, 2)), Some(TileType::new(1)));
    }

    #[test]
    fn test_selection_flags() {
        let mut board = Board::from_types(1, 2, &[1, 1]);
        board.set_selected(Cell::new(1, 2), true);
        assert_eq!(board.selected_cell(), Some(Cell::new(1, 2)));

        board.clear_selection();
        assert_eq!(board.selected_cell(), None);
    }

    #[test]
    fn test_display() {
        let board = Board::from_types(2, 2, &[1, 0, 12, 1]);
        assert_eq!(board.to_string(), "  1  .\n 12  1\n");
    }
}
