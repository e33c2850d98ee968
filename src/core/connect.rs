//! Connectivity engine - flood-fill searches over hexagonal adjacency
//!
//! Two searches share the same traversal shape:
//!
//! - [`find_connected`]: same-color group starting from one cell (pop check)
//! - [`find_floating`]: occupied cells with no path to the ceiling (fall check)
//!
//! Both use an explicit work stack and a visited array sized to the grid, so
//! traversal depth is bounded by the cell count and termination is obvious.

use crate::core::grid::{Grid, GRID_SIZE};
use crate::types::{BubbleColor, Pos, GRID_COLS, GRID_ROWS};

#[inline(always)]
fn visited_index(pos: Pos) -> usize {
    (pos.row as usize) * (GRID_COLS as usize) + (pos.col as usize)
}

/// Find all bubbles of `color` connected to `start`, including `start` itself
/// when it holds that color.
///
/// Returns positions in visit order with no duplicates. A single bubble with
/// no same-color neighbor yields a set of size 1; callers decide whether that
/// qualifies as a pop.
pub fn find_connected(grid: &Grid, start: Pos, color: BubbleColor) -> Vec<Pos> {
    let mut connected = Vec::new();
    if grid.get(start.row, start.col) != Some(Some(color)) {
        return connected;
    }

    let mut visited = [false; GRID_SIZE];
    let mut stack = Vec::with_capacity(16);

    visited[visited_index(start)] = true;
    stack.push(start);

    while let Some(pos) = stack.pop() {
        connected.push(pos);

        for next in grid.neighbors(pos) {
            let idx = visited_index(next);
            if visited[idx] {
                continue;
            }
            if grid.get(next.row, next.col) == Some(Some(color)) {
                visited[idx] = true;
                stack.push(next);
            }
        }
    }

    connected
}

/// Find all occupied cells with no adjacency path to any occupied cell in
/// row 0. Connectivity here is occupancy-only; color does not matter.
///
/// These are the bubbles left unsupported after a removal.
pub fn find_floating(grid: &Grid) -> Vec<Pos> {
    let mut visited = [false; GRID_SIZE];
    let mut stack = Vec::with_capacity(16);

    // Flood from every anchored bubble in the ceiling row.
    for col in 0..GRID_COLS as i8 {
        if grid.is_occupied(0, col) {
            let pos = Pos::new(0, col);
            visited[visited_index(pos)] = true;
            stack.push(pos);
        }
    }

    while let Some(pos) = stack.pop() {
        for next in grid.neighbors(pos) {
            let idx = visited_index(next);
            if !visited[idx] && grid.is_occupied(next.row, next.col) {
                visited[idx] = true;
                stack.push(next);
            }
        }
    }

    // Everything occupied but unreached hangs in the air.
    let mut floating = Vec::new();
    for row in 0..GRID_ROWS as i8 {
        for col in 0..GRID_COLS as i8 {
            let pos = Pos::new(row, col);
            if grid.is_occupied(row, col) && !visited[visited_index(pos)] {
                floating.push(pos);
            }
        }
    }

    floating
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BubbleColor::{Blue, Red};

    #[test]
    fn empty_grid_yields_empty_sets() {
        let grid = Grid::new();
        assert!(find_connected(&grid, Pos::new(0, 0), Red).is_empty());
        assert!(find_floating(&grid).is_empty());
    }

    #[test]
    fn start_cell_of_wrong_color_yields_empty_set() {
        let mut grid = Grid::new();
        grid.set(0, 0, Some(Blue));
        assert!(find_connected(&grid, Pos::new(0, 0), Red).is_empty());
    }

    #[test]
    fn lone_bubble_is_a_singleton_group() {
        let mut grid = Grid::new();
        grid.set(4, 4, Some(Red));
        let group = find_connected(&grid, Pos::new(4, 4), Red);
        assert_eq!(group, vec![Pos::new(4, 4)]);
    }

    #[test]
    fn group_crosses_parity_diagonals() {
        let mut grid = Grid::new();
        // (1,4) is odd-row, its down-right diagonal is (2,5).
        grid.set(1, 4, Some(Red));
        grid.set(2, 5, Some(Red));
        // (2,5) is even-row, so (1,4) is its up-left diagonal: symmetric.
        let group = find_connected(&grid, Pos::new(1, 4), Red);
        assert_eq!(group.len(), 2);
        assert!(group.contains(&Pos::new(2, 5)));

        let back = find_connected(&grid, Pos::new(2, 5), Red);
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn different_colors_break_the_group() {
        let mut grid = Grid::new();
        grid.set(3, 3, Some(Red));
        grid.set(3, 4, Some(Blue));
        grid.set(3, 5, Some(Red));

        let group = find_connected(&grid, Pos::new(3, 3), Red);
        assert_eq!(group, vec![Pos::new(3, 3)]);
    }

    #[test]
    fn ceiling_row_is_never_floating() {
        let mut grid = Grid::new();
        grid.set(0, 7, Some(Red));
        assert!(find_floating(&grid).is_empty());
    }

    #[test]
    fn detached_cluster_floats_regardless_of_color() {
        let mut grid = Grid::new();
        grid.set(0, 0, Some(Red));
        // Cluster well away from the ceiling anchor.
        grid.set(5, 5, Some(Blue));
        grid.set(5, 6, Some(Red));

        let floating = find_floating(&grid);
        assert_eq!(floating.len(), 2);
        assert!(floating.contains(&Pos::new(5, 5)));
        assert!(floating.contains(&Pos::new(5, 6)));
    }

    #[test]
    fn gap_free_grid_has_no_floaters() {
        let mut grid = Grid::new();
        for row in 0..4 {
            for col in 0..GRID_COLS as i8 {
                grid.set(row, col, Some(Red));
            }
        }
        assert!(find_floating(&grid).is_empty());
    }
}
