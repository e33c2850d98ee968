//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BubbleColor, Pos, GRID_COLS, GRID_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal colors for the bubble palette.
pub fn bubble_rgb(color: BubbleColor) -> Rgb {
    match color {
        BubbleColor::Red => Rgb::new(235, 80, 80),
        BubbleColor::Blue => Rgb::new(90, 130, 235),
        BubbleColor::Green => Rgb::new(80, 200, 120),
        BubbleColor::Yellow => Rgb::new(230, 200, 80),
        BubbleColor::Purple => Rgb::new(180, 100, 220),
    }
}

/// A lightweight terminal renderer for the bubble field.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio and
        // leaves room for the odd-row half-cell offset.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Inner board width: full columns plus the half-cell offset of odd rows.
    fn board_px_w(&self) -> u16 {
        (GRID_COLS as u16) * self.cell_w + self.cell_w / 2
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport, toast: Option<&str>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board_px_w = self.board_px_w();
        let board_px_h = GRID_ROWS as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Board frame plus a 2-row shooter strip and a side panel.
        let total_w = frame_w + 22;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_bubbles(&mut fb, state, start_x + 1, start_y + 1, bg);
        self.draw_shooter(&mut fb, state, start_x + 1, start_y + frame_h);
        self.draw_panel(&mut fb, state, start_x + frame_w + 2, start_y, toast);

        // Banners over the board.
        if state.game_over() {
            self.draw_banner(&mut fb, start_x, start_y, frame_w, " GAME OVER - r to restart ");
        } else if state.paused() {
            self.draw_banner(&mut fb, start_x, start_y, frame_w, " PAUSED ");
        }

        fb
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            let ch = if dx == 0 || dx == w - 1 { '+' } else { '-' };
            fb.put_char(x + dx, y, ch, style);
            fb.put_char(x + dx, y + h - 1, ch, style);
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put_char(x, y + dy, '|', style);
            fb.put_char(x + w - 1, y + dy, '|', style);
        }
    }

    fn draw_bubbles(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        origin_x: u16,
        origin_y: u16,
        bg: CellStyle,
    ) {
        for row in 0..GRID_ROWS as i8 {
            // Odd rows shift right by half a cell: the offset-hex layout.
            let row_offset = if row % 2 == 1 { self.cell_w / 2 } else { 0 };
            for col in 0..GRID_COLS as i8 {
                let x = origin_x + (col as u16) * self.cell_w + row_offset;
                let y = origin_y + row as u16;

                let Some(cell) = state.grid().get(row, col) else {
                    continue;
                };
                match cell {
                    Some(color) => {
                        let popping = state.popping().contains(&Pos::new(row, col));
                        let style = CellStyle {
                            fg: bubble_rgb(color),
                            bg: bg.bg,
                            bold: popping,
                            dim: false,
                        };
                        if popping {
                            fb.put_str(x, y, "**", style);
                        } else {
                            fb.put_str(x, y, "()", style);
                        }
                    }
                    None => {
                        let dot = CellStyle {
                            fg: Rgb::new(55, 55, 70),
                            bg: bg.bg,
                            bold: false,
                            dim: true,
                        };
                        fb.put_char(x, y, '.', dot);
                    }
                }
            }
        }
    }

    fn draw_shooter(&self, fb: &mut FrameBuffer, state: &GameState, origin_x: u16, y: u16) {
        let aim = state.aim_deg();
        let pointer = if aim <= -15.0 {
            '\\'
        } else if aim >= 15.0 {
            '/'
        } else {
            '|'
        };

        let launch_x = origin_x + (crate::core::shot::LAUNCH_COL as u16) * self.cell_w;
        let style = CellStyle {
            fg: bubble_rgb(state.current()),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_char(launch_x, y, pointer, style);
        fb.put_str(launch_x.saturating_sub(1), y + 1, "(", style);
        fb.put_char(launch_x, y + 1, ')', style);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        x: u16,
        y: u16,
        toast: Option<&str>,
    ) {
        let label = CellStyle {
            fg: Rgb::new(160, 160, 170),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &format!("{}", state.score()), value);

        fb.put_str(x, y + 3, "NOW / NEXT", label);
        let now_style = CellStyle {
            fg: bubble_rgb(state.current()),
            ..value
        };
        let next_style = CellStyle {
            fg: bubble_rgb(state.next_color()),
            ..value
        };
        fb.put_str(x, y + 4, "()", now_style);
        fb.put_str(x + 3, y + 4, "()", next_style);

        fb.put_str(x, y + 6, "AIM", label);
        fb.put_str(x, y + 7, &format!("{:+.0} deg", state.aim_deg()), value);

        fb.put_str(x, y + 9, "arrows aim  space fire", label);
        fb.put_str(x, y + 10, "p pause  r restart  q quit", label);

        if let Some(text) = toast {
            let toast_style = CellStyle {
                fg: Rgb::new(255, 220, 120),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            };
            fb.put_str(x, y + 12, text, toast_style);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 40, 40),
            bold: true,
            dim: false,
        };
        let tx = x + frame_w.saturating_sub(text.len() as u16) / 2;
        let ty = y + (GRID_ROWS as u16 / 2);
        fb.put_str(tx, ty, text, style);
    }
}
