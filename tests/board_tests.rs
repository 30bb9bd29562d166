//! Board dealing and shuffling integration tests.

use connect_tiles::{Board, Cell, Controller, PathFinder, TileRng, TileType};
use proptest::prelude::*;

fn assert_every_type_paired(board: &Board) {
    for (tile_type, count) in board.type_counts() {
        assert_eq!(count % 2, 0, "{} appears {} times", tile_type, count);
    }
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_deal_is_reproducible() {
    let a = Board::new(6, 8, 12, &mut TileRng::new(99));
    let b = Board::new(6, 8, 12, &mut TileRng::new(99));
    let c = Board::new(6, 8, 12, &mut TileRng::new(100));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_deal_reuses_types_cyclically() {
    // Eight pairs over three types: 3 + 3 + 2 pairs.
    let board = Board::new(4, 4, 3, &mut TileRng::new(1));
    let counts = board.type_counts();

    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&TileType::new(1)], 6);
    assert_eq!(counts[&TileType::new(2)], 6);
    assert_eq!(counts[&TileType::new(3)], 4);
}

#[test]
fn test_more_types_than_pairs() {
    let board = Board::new(2, 3, 10, &mut TileRng::new(1));
    let counts = board.type_counts();

    assert_eq!(counts.len(), 3);
    assert!(counts.values().all(|&n| n == 2));
}

#[test]
fn test_border_never_holds_tiles() {
    let board = Board::new(4, 6, 8, &mut TileRng::new(3));
    for row in 0..6 {
        for col in 0..8 {
            let cell = Cell::new(row, col);
            if !board.is_interior(cell) {
                assert!(board.get(cell).is_empty());
                assert!(board.is_passable(cell));
            }
        }
    }
}

// =============================================================================
// Shuffling
// =============================================================================

#[test]
fn test_shuffle_preserves_positions_and_counts() {
    let mut board = Board::from_types(3, 4, &[1, 0, 2, 3, 3, 1, 0, 2, 4, 4, 5, 5]);
    let positions = board.visible_cells();
    let counts = board.type_counts();
    let mut controller = Controller::new(PathFinder::default());
    let mut rng = TileRng::new(8);

    for _ in 0..20 {
        controller.shuffle(&mut board, &mut rng);
        assert_eq!(board.visible_cells(), positions);
        assert_eq!(board.type_counts(), counts);
        assert!(board.get(Cell::new(1, 2)).is_empty());
    }
}

#[test]
fn test_shuffle_until_solvable_leaves_a_match() {
    let mut board = Board::from_types(
        4,
        4,
        &[
            1, 2, 3, 4,
            5, 6, 7, 8,
            2, 1, 4, 3,
            6, 5, 8, 7,
        ],
    );
    let counts = board.type_counts();
    let mut controller = Controller::new(PathFinder::default());

    let report = controller.shuffle_until_solvable(&mut board, &mut TileRng::new(21), 8);

    assert!(report.solvable);
    assert!(controller.is_solvable(&board));
    assert_eq!(board.type_counts(), counts);
    assert_eq!(board.visible_count(), 16);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_dealt_board_is_full_and_paired(
        rows in 1usize..=8,
        half_cols in 1usize..=6,
        types in 1usize..=40,
        seed in any::<u64>(),
    ) {
        let cols = half_cols * 2;
        let board = Board::new(rows, cols, types, &mut TileRng::new(seed));

        prop_assert_eq!(board.visible_count(), rows * cols);
        prop_assert_eq!(board.pairs_remaining(), rows * cols / 2);
        prop_assert!(board.type_counts().len() <= types);
        assert_every_type_paired(&board);
    }

    #[test]
    fn prop_forced_pair_always_connects(seed in any::<u64>()) {
        let mut board = Board::new(4, 6, 12, &mut TileRng::new(seed));
        let counts = board.type_counts();
        let mut controller = Controller::new(PathFinder::default());

        prop_assert!(controller.force_pair(&mut board));
        prop_assert!(controller.is_solvable(&board));
        prop_assert_eq!(board.type_counts(), counts);
    }
}
