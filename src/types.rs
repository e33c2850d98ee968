//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions
pub const GRID_ROWS: u8 = 10;
pub const GRID_COLS: u8 = 10;

/// Rows pre-filled with random bubbles on a fresh grid
pub const SEED_ROWS: u8 = 5;

/// Any bubble in this row after a completed turn ends the game
pub const LOSS_ROW: u8 = GRID_ROWS - 2;

/// Minimum connected group size that pops
pub const MATCH_MIN: usize = 3;

/// Pops of this size or larger raise a combo notification
pub const COMBO_MIN: usize = 5;

/// Points per bubble popped in a match
pub const POP_POINTS: u32 = 10;

/// Points per bubble dropped as floating
pub const FALL_POINTS: u32 = 5;

/// Aim angle limits, in degrees from vertical (0 = straight up, positive = right)
pub const AIM_MIN_DEG: f32 = -80.0;
pub const AIM_MAX_DEG: f32 = 80.0;

/// Aim adjustment per key press, in degrees
pub const AIM_STEP_DEG: f32 = 2.0;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const POP_ANIMATION_MS: u32 = 300;
pub const TOAST_MS: u32 = 1500;

/// Bubble colors (fixed 5-color palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BubbleColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl BubbleColor {
    /// All palette colors, in draw order
    pub const ALL: [BubbleColor; 5] = [
        BubbleColor::Red,
        BubbleColor::Blue,
        BubbleColor::Green,
        BubbleColor::Yellow,
        BubbleColor::Purple,
    ];

    /// Palette index, 0-based
    pub fn index(&self) -> usize {
        match self {
            BubbleColor::Red => 0,
            BubbleColor::Blue => 1,
            BubbleColor::Green => 2,
            BubbleColor::Yellow => 3,
            BubbleColor::Purple => 4,
        }
    }

    /// Lowercase name, mainly for display
    pub fn as_str(&self) -> &'static str {
        match self {
            BubbleColor::Red => "red",
            BubbleColor::Blue => "blue",
            BubbleColor::Green => "green",
            BubbleColor::Yellow => "yellow",
            BubbleColor::Purple => "purple",
        }
    }
}

/// Cell on the grid (None = empty, Some = a bubble of that color)
pub type Cell = Option<BubbleColor>;

/// A grid position as (row, col), 0-indexed from the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    AimLeft,
    AimRight,
    Fire,
    Pause,
    Restart,
}
