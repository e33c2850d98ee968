//! Game state module - the shot / match / fall turn machine
//!
//! One turn runs: shoot -> place -> match check -> pop (or gravity check ->
//! fall) -> cascade -> next colors -> loss check. The `resolving` flag
//! serializes shots: while a pop/fall batch is animating, new shots are
//! rejected until the completion signal arrives.
//!
//! Pop/fall animations are driven externally: the state marks positions as
//! popping and waits for [`GameState::animation_complete`], so the logic is
//! testable synchronously with no wall-clock involved.

use crate::core::{connect, scoring, shot, Grid, SimpleRng};
use crate::types::{
    BubbleColor, GameAction, Pos, AIM_MAX_DEG, AIM_MIN_DEG, AIM_STEP_DEG, LOSS_ROW,
};

/// Outcome of the last scoring step (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastTurnEvent {
    /// Bubbles popped as a color match.
    pub popped: u32,
    /// Bubbles dropped as floating.
    pub dropped: u32,
    /// Points awarded by this step.
    pub score_delta: u32,
    /// True when the pop was large enough to announce as a combo.
    pub combo: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    current: BubbleColor,
    next: BubbleColor,
    aim_deg: f32,
    score: u32,
    paused: bool,
    game_over: bool,
    /// Busy flag: a shot has been placed and its effects are still settling.
    resolving: bool,
    /// Cells marked for removal once the pop/fall animation finishes.
    popping: Vec<Pos>,
    rng: SimpleRng,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for accepted shots.
    shot_id: u32,
    last_event: Option<LastTurnEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut grid = Grid::new();
        grid.seed_top_rows(&mut rng);
        let current = rng.next_color();
        let next = rng.next_color();

        Self {
            grid,
            current,
            next,
            aim_deg: 0.0,
            score: 0,
            paused: false,
            game_over: false,
            resolving: false,
            popping: Vec::new(),
            rng,
            episode_id: 0,
            shot_id: 0,
            last_event: None,
        }
    }

    /// Create a game over a prepared grid (puzzle setups, tests)
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        let mut state = Self::new(seed);
        state.grid = grid;
        state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn resolving(&self) -> bool {
        self.resolving
    }

    pub fn current(&self) -> BubbleColor {
        self.current
    }

    pub fn next_color(&self) -> BubbleColor {
        self.next
    }

    pub fn aim_deg(&self) -> f32 {
        self.aim_deg
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn shot_id(&self) -> u32 {
        self.shot_id
    }

    pub fn popping(&self) -> &[Pos] {
        &self.popping
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Apply a discrete player action
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::AimLeft => {
                self.aim_deg = (self.aim_deg - AIM_STEP_DEG).clamp(AIM_MIN_DEG, AIM_MAX_DEG);
            }
            GameAction::AimRight => {
                self.aim_deg = (self.aim_deg + AIM_STEP_DEG).clamp(AIM_MIN_DEG, AIM_MAX_DEG);
            }
            GameAction::Fire => {
                self.shoot(self.aim_deg, self.current);
            }
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Fire a bubble of `color` at `aim_deg` degrees from vertical.
    ///
    /// Returns false when the shot is rejected (paused, game over, or a
    /// previous shot still resolving) or discarded (no valid landing).
    pub fn shoot(&mut self, aim_deg: f32, color: BubbleColor) -> bool {
        if self.paused || self.game_over || self.resolving {
            return false;
        }
        self.resolving = true;

        let Some(landing) = shot::resolve_shot(&self.grid, aim_deg) else {
            // Degenerate trajectory: drop the shot, not the game.
            self.resolving = false;
            return false;
        };

        self.grid.set(landing.row, landing.col, Some(color));
        self.shot_id = self.shot_id.wrapping_add(1);

        // Flood fills visit each cell once, so both batches below are
        // duplicate-free by construction.
        let matches = connect::find_connected(&self.grid, landing, color);
        if scoring::is_match(matches.len()) {
            let delta = scoring::pop_score(matches.len());
            self.score += delta;
            self.last_event = Some(LastTurnEvent {
                popped: matches.len() as u32,
                dropped: 0,
                score_delta: delta,
                combo: scoring::is_combo(matches.len()),
            });
            self.popping = matches;
            // Stay resolving until the pop animation completes.
            return true;
        }

        let floating = connect::find_floating(&self.grid);
        if !floating.is_empty() {
            let delta = scoring::fall_score(floating.len());
            self.score += delta;
            self.last_event = Some(LastTurnEvent {
                popped: 0,
                dropped: floating.len() as u32,
                score_delta: delta,
                combo: false,
            });
            self.popping = floating;
            return true;
        }

        // Nothing removed: the turn completes immediately.
        self.complete_turn();
        true
    }

    /// Signal that the pop/fall animation for the pending batch finished.
    ///
    /// Removes the batch, then re-checks for newly orphaned bubbles; a
    /// non-empty result starts another batch (and another wait), otherwise
    /// the turn completes. No-op unless a batch is actually pending, so a
    /// duplicate signal can never double-score.
    pub fn animation_complete(&mut self) -> bool {
        if !self.resolving || self.popping.is_empty() {
            return false;
        }

        for pos in self.popping.drain(..) {
            self.grid.set(pos.row, pos.col, None);
        }

        // A removal can cut the support of bubbles that were anchored before.
        let floating = connect::find_floating(&self.grid);
        if !floating.is_empty() {
            let delta = scoring::fall_score(floating.len());
            self.score += delta;
            self.last_event = Some(LastTurnEvent {
                popped: 0,
                dropped: floating.len() as u32,
                score_delta: delta,
                combo: false,
            });
            self.popping = floating;
            return true;
        }

        self.complete_turn();
        true
    }

    /// Advance colors, check the loss boundary, release the busy flag.
    fn complete_turn(&mut self) {
        self.current = self.next;
        self.next = self.rng.next_color();

        if self.grid.row_has_bubbles(LOSS_ROW) {
            self.game_over = true;
        }

        self.resolving = false;
    }

    /// Toggle the paused flag. Shooting is rejected while paused.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Reinitialize grid, score, colors and flags. The only exit from
    /// game over.
    pub fn restart(&mut self) {
        self.grid.seed_top_rows(&mut self.rng);
        self.current = self.rng.next_color();
        self.next = self.rng.next_color();
        self.aim_deg = 0.0;
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.resolving = false;
        self.popping.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.shot_id = 0;
        self.last_event = None;
    }

    /// Take and clear the last scoring event.
    pub fn take_last_event(&mut self) -> Option<LastTurnEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut crate::core::snapshot::GameSnapshot) {
        self.grid.write_u8_grid(&mut out.grid);

        out.popping = [[false; crate::types::GRID_COLS as usize];
            crate::types::GRID_ROWS as usize];
        for pos in &self.popping {
            if !self.grid.is_out_of_bounds(pos.row, pos.col) {
                out.popping[pos.row as usize][pos.col as usize] = true;
            }
        }

        out.current = self.current;
        out.next = self.next;
        out.aim_deg = self.aim_deg;
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.resolving = self.resolving;
        out.episode_id = self.episode_id;
        out.shot_id = self.shot_id;
        out.seed = self.rng.state();
    }

    pub fn snapshot(&self) -> crate::core::snapshot::GameSnapshot {
        let mut s = crate::core::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
