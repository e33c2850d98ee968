//! Shot resolver - maps a launch angle to a landing cell
//!
//! Pure function of grid + angle; the caller performs the placement.
//!
//! Angle convention: the public aim angle is measured from vertical, with 0
//! meaning straight up and positive values leaning right, clamped to
//! [-80, 80] degrees. Internally the trajectory angle is `90 - aim` so the
//! direction vector is `(cos t, -sin t)` in (col, row) space, where row
//! grows downward.

use crate::types::{Pos, AIM_MAX_DEG, AIM_MIN_DEG, GRID_COLS, GRID_ROWS};

use crate::core::grid::Grid;

/// Fixed launch cell: bottom row, center column.
pub const LAUNCH_ROW: i8 = GRID_ROWS as i8 - 1;
pub const LAUNCH_COL: i8 = GRID_COLS as i8 / 2;

/// Hard cap on trajectory steps. The grid is 10x10 and the vertical component
/// never flips, so a legitimate shot settles in well under a hundred steps;
/// anything beyond this is a degenerate trajectory and the shot is discarded.
const MAX_STEPS: u32 = 1024;

/// Neighbor scan order when the shot hits an occupied cell: left, right,
/// down, up, then the two parity diagonals of the hit row.
fn deflection_order(row: i8) -> [(i8, i8); 6] {
    let side = if row % 2 == 0 { -1 } else { 1 };
    [(0, -1), (0, 1), (1, 0), (-1, 0), (-1, side), (1, side)]
}

/// Simulate a shot at `aim_deg` and return its landing cell.
///
/// Wall hits reflect the horizontal component; crossing above row 0 lands in
/// the ceiling row at the clamped column; hitting a bubble lands in the first
/// empty neighbor of the hit cell (falling back to the hit cell itself when
/// everything around it is full). Returns `None` only when the step cap is
/// exceeded, which callers treat as a discarded shot.
pub fn resolve_shot(grid: &Grid, aim_deg: f32) -> Option<Pos> {
    let aim = aim_deg.clamp(AIM_MIN_DEG, AIM_MAX_DEG);
    let theta = (90.0 - aim).to_radians();

    let mut dx = theta.cos();
    let dy = -theta.sin(); // row axis grows downward

    let mut fcol = LAUNCH_COL as f32;
    let mut frow = LAUNCH_ROW as f32;

    for _ in 0..MAX_STEPS {
        frow += dy;
        fcol += dx;

        let row = frow.round() as i32;
        let col = fcol.round() as i32;

        // Wall bounce: reflect and keep stepping. The running position may
        // sit just past the wall for one step; the flipped direction brings
        // it back in bounds on the next.
        if col < 0 || col >= GRID_COLS as i32 {
            dx = -dx;
            continue;
        }

        // Past the ceiling: settle in row 0.
        if row < 0 {
            let col = col.clamp(0, GRID_COLS as i32 - 1) as i8;
            return Some(Pos::new(0, col));
        }

        // Hit a bubble: settle in the first empty cell around it.
        if row < GRID_ROWS as i32 && grid.is_occupied(row as i8, col as i8) {
            return Some(landing_near(grid, Pos::new(row as i8, col as i8)));
        }
    }

    None
}

fn landing_near(grid: &Grid, hit: Pos) -> Pos {
    for (dr, dc) in deflection_order(hit.row) {
        let row = hit.row + dr;
        let col = hit.col + dc;
        if grid.is_empty_cell(row, col) {
            return Pos::new(row, col);
        }
    }
    // Every neighbor is full: overlap the hit cell rather than fail the shot.
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BubbleColor::Red;

    #[test]
    fn straight_shot_on_empty_grid_reaches_ceiling_center() {
        let grid = Grid::new();
        assert_eq!(resolve_shot(&grid, 0.0), Some(Pos::new(0, LAUNCH_COL)));
    }

    #[test]
    fn aim_is_clamped_before_simulation() {
        let grid = Grid::new();
        // Beyond the clamp both behave like an 80-degree shot.
        assert_eq!(resolve_shot(&grid, 200.0), resolve_shot(&grid, 80.0));
        assert_eq!(resolve_shot(&grid, -200.0), resolve_shot(&grid, -80.0));
    }

    #[test]
    fn steep_shot_bounces_off_the_wall_and_still_lands() {
        let grid = Grid::new();
        // 80 degrees right: mostly horizontal, must reflect off the right
        // wall (possibly several times) and still end in the ceiling row.
        let landing = resolve_shot(&grid, 80.0).expect("shot should land");
        assert_eq!(landing.row, 0);
    }

    #[test]
    fn angled_shots_drift_toward_their_side() {
        let grid = Grid::new();
        let right = resolve_shot(&grid, 30.0).unwrap();
        let left = resolve_shot(&grid, -30.0).unwrap();
        assert_eq!(right.row, 0);
        assert_eq!(left.row, 0);
        assert!(right.col > LAUNCH_COL);
        assert!(left.col < LAUNCH_COL);
    }

    #[test]
    fn hitting_a_bubble_lands_beside_it() {
        let mut grid = Grid::new();
        grid.set(0, LAUNCH_COL, Some(Red));

        // Straight up into the bubble; left neighbor is scanned first.
        let landing = resolve_shot(&grid, 0.0).unwrap();
        assert_eq!(landing, Pos::new(0, LAUNCH_COL - 1));
    }

    #[test]
    fn deflection_prefers_left_then_right() {
        let mut grid = Grid::new();
        grid.set(0, LAUNCH_COL, Some(Red));
        grid.set(0, LAUNCH_COL - 1, Some(Red));

        let landing = resolve_shot(&grid, 0.0).unwrap();
        assert_eq!(landing, Pos::new(0, LAUNCH_COL + 1));
    }

    #[test]
    fn hit_below_a_full_wall_deflects_downward() {
        let mut grid = Grid::new();
        for row in 0..3 {
            for col in 0..GRID_COLS as i8 {
                grid.set(row, col, Some(Red));
            }
        }

        // Straight up, first bubble on the path is at (2, LAUNCH_COL); its
        // left and right neighbors are full, so the scan settles below it.
        let landing = resolve_shot(&grid, 0.0).unwrap();
        assert_eq!(landing, Pos::new(3, LAUNCH_COL));
    }

    #[test]
    fn surrounded_hit_falls_back_to_overlap() {
        let mut grid = Grid::new();
        for row in 0..GRID_ROWS as i8 {
            for col in 0..GRID_COLS as i8 {
                grid.set(row, col, Some(Red));
            }
        }

        // No empty cell anywhere: the shot overlaps the first cell it hits,
        // directly above the launch point.
        let landing = resolve_shot(&grid, 0.0).unwrap();
        assert_eq!(landing, Pos::new(LAUNCH_ROW - 1, LAUNCH_COL));
    }
}
