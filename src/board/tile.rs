//! Tiles and read-only cell views.

use serde::{Deserialize, Serialize};

use crate::core::TileType;

/// A typed, removable unit occupying one interior cell.
///
/// Matched tiles are not dropped from the board: they stay in place with
/// `visible == false` so the cell turns into a path corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    tile_type: TileType,
    visible: bool,
    selected: bool,
}

impl Tile {
    /// Create a visible, unselected tile.
    #[must_use]
    pub const fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            visible: true,
            selected: false,
        }
    }

    /// Match type of this tile.
    #[must_use]
    pub const fn tile_type(&self) -> TileType {
        self.tile_type
    }

    /// False once the tile has been matched away.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// True while this tile is the player's first pick.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_type(&mut self, tile_type: TileType) {
        self.tile_type = tile_type;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
        self.selected = false;
    }
}

/// What a presentation layer sees when it reads a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellView<'a> {
    /// Border ring or any coordinate outside the interior.
    Border,
    /// Interior cell whose tile has been removed.
    Empty,
    /// Interior cell holding a visible tile.
    Tile(&'a Tile),
}

impl CellView<'_> {
    /// True for `Border` and `Empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !matches!(self, CellView::Tile(_))
    }

    /// The visible tile's type, if any.
    #[must_use]
    pub fn tile_type(&self) -> Option<TileType> {
        match self {
            CellView::Tile(tile) => Some(tile.tile_type()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_visible() {
        let tile = Tile::new(TileType::new(3));
        assert!(tile.is_visible());
        assert!(!tile.is_selected());
        assert_eq!(tile.tile_type(), TileType::new(3));
    }

    #[test]
    fn test_hide_clears_selection() {
        let mut tile = Tile::new(TileType::new(1));
        tile.set_selected(true);
        tile.hide();
        assert!(!tile.is_visible());
        assert!(!tile.is_selected());
    }

    #[test]
    fn test_cell_view_helpers() {
        let tile = Tile::new(TileType::new(2));
        assert!(CellView::Border.is_empty());
        assert!(CellView::Empty.is_empty());
        assert!(!CellView::Tile(&tile).is_empty());
        assert_eq!(CellView::Tile(&tile).tile_type(), Some(TileType::new(2)));
        assert_eq!(CellView::Empty.tile_type(), None);
    }
}
