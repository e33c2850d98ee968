//! Grid tests - bounds, mutation, hex adjacency

use tui_bubble_pop::core::{Grid, SimpleRng};
use tui_bubble_pop::types::{BubbleColor, Pos, GRID_COLS, GRID_ROWS, SEED_ROWS};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.rows(), GRID_ROWS);
    assert_eq!(grid.cols(), GRID_COLS);

    for row in 0..GRID_ROWS as i8 {
        for col in 0..GRID_COLS as i8 {
            assert!(grid.is_empty_cell(row, col));
            assert_eq!(grid.get(row, col), Some(None));
        }
    }
    assert_eq!(grid.bubble_count(), 0);
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new();

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_ROWS as i8, 0), None);
    assert_eq!(grid.get(0, GRID_COLS as i8), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new();

    assert!(grid.set(5, 3, Some(BubbleColor::Red)));
    assert_eq!(grid.get(5, 3), Some(Some(BubbleColor::Red)));
    assert!(grid.is_occupied(5, 3));

    // Clear it again
    assert!(grid.set(5, 3, None));
    assert_eq!(grid.get(5, 3), Some(None));
}

#[test]
fn test_grid_set_out_of_bounds() {
    let mut grid = Grid::new();

    assert!(!grid.set(-1, 0, Some(BubbleColor::Red)));
    assert!(!grid.set(0, -1, Some(BubbleColor::Red)));
    assert!(!grid.set(GRID_ROWS as i8, 0, Some(BubbleColor::Red)));
    assert!(!grid.set(0, GRID_COLS as i8, Some(BubbleColor::Red)));
}

#[test]
fn test_neighbors_follow_row_parity() {
    let grid = Grid::new();

    // Even row: diagonals lean left.
    let n = grid.neighbors(Pos::new(4, 4));
    assert!(n.contains(&Pos::new(3, 3)));
    assert!(n.contains(&Pos::new(5, 3)));
    assert!(!n.contains(&Pos::new(3, 5)));
    assert!(!n.contains(&Pos::new(5, 5)));

    // Odd row: diagonals lean right.
    let n = grid.neighbors(Pos::new(5, 4));
    assert!(n.contains(&Pos::new(4, 5)));
    assert!(n.contains(&Pos::new(6, 5)));
    assert!(!n.contains(&Pos::new(4, 3)));
    assert!(!n.contains(&Pos::new(6, 3)));
}

#[test]
fn test_neighbors_are_symmetric() {
    // Hex adjacency must be a symmetric relation or connectivity searches
    // would depend on traversal direction.
    let grid = Grid::new();
    for row in 0..GRID_ROWS as i8 {
        for col in 0..GRID_COLS as i8 {
            let pos = Pos::new(row, col);
            for n in grid.neighbors(pos) {
                assert!(
                    grid.neighbors(n).contains(&pos),
                    "asymmetric adjacency between {:?} and {:?}",
                    pos,
                    n
                );
            }
        }
    }
}

#[test]
fn test_row_has_bubbles() {
    let mut grid = Grid::new();
    assert!(!grid.row_has_bubbles(5));

    grid.set(5, 9, Some(BubbleColor::Purple));
    assert!(grid.row_has_bubbles(5));
    assert!(!grid.row_has_bubbles(6));

    // Out of range rows are simply not occupied.
    assert!(!grid.row_has_bubbles(GRID_ROWS));
}

#[test]
fn test_seed_top_rows_resets_the_rest() {
    let mut grid = Grid::new();
    grid.set(9, 9, Some(BubbleColor::Red));

    let mut rng = SimpleRng::new(3);
    grid.seed_top_rows(&mut rng);

    assert_eq!(
        grid.bubble_count(),
        SEED_ROWS as usize * GRID_COLS as usize
    );
    assert!(grid.is_empty_cell(9, 9));
}

#[test]
fn test_seed_top_rows_deterministic() {
    let mut a = Grid::new();
    let mut b = Grid::new();
    a.seed_top_rows(&mut SimpleRng::new(11));
    b.seed_top_rows(&mut SimpleRng::new(11));
    assert_eq!(a.cells(), b.cells());
}
