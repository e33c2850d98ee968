//! Plain-old-data view of the game state for renderers and observers.

use crate::types::{BubbleColor, GRID_COLS, GRID_ROWS};

/// Read-only copy of everything a renderer needs for one frame.
///
/// Grid cells are encoded as `0` for empty and `palette index + 1` for a
/// bubble; `popping` marks cells currently animating out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub grid: [[u8; GRID_COLS as usize]; GRID_ROWS as usize],
    pub popping: [[bool; GRID_COLS as usize]; GRID_ROWS as usize],
    pub current: BubbleColor,
    pub next: BubbleColor,
    pub aim_deg: f32,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub resolving: bool,
    pub episode_id: u32,
    pub shot_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u8; GRID_COLS as usize]; GRID_ROWS as usize];
        self.popping = [[false; GRID_COLS as usize]; GRID_ROWS as usize];
        self.current = BubbleColor::Red;
        self.next = BubbleColor::Red;
        self.aim_deg = 0.0;
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.resolving = false;
        self.episode_id = 0;
        self.shot_id = 0;
        self.seed = 0;
    }

    /// Whether the player may act on this frame.
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[0u8; GRID_COLS as usize]; GRID_ROWS as usize],
            popping: [[false; GRID_COLS as usize]; GRID_ROWS as usize],
            current: BubbleColor::Red,
            next: BubbleColor::Red,
            aim_deg: 0.0,
            score: 0,
            paused: false,
            game_over: false,
            resolving: false,
            episode_id: 0,
            shot_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
