//! Terminal bubble shooter runner (default binary).
//!
//! Render/input/tick loop: crossterm key events feed the game state, and a
//! fixed tick drives the pop-animation timer that delivers completion
//! signals back to the state machine.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bubble_pop::core::GameState;
use tui_bubble_pop::input::{handle_key_event, repeats, should_quit};
use tui_bubble_pop::term::{GameView, TerminalRenderer, Viewport};
use tui_bubble_pop::types::{POP_ANIMATION_MS, TICK_MS, TOAST_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game_state = GameState::new(time_seed());
    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    let mut pop_timer_ms: u32 = POP_ANIMATION_MS;
    let mut toast: Option<String> = None;
    let mut toast_timer_ms: u32 = 0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game_state, Viewport::new(w, h), toast.as_deref());
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            game_state.apply_action(action);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Held keys keep aiming but never re-fire.
                        if let Some(action) = handle_key_event(key) {
                            if repeats(action) {
                                game_state.apply_action(action);
                            }
                        }
                    }
                    KeyEventKind::Release => {}
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            // Pop/fall animation: count down, then signal completion. Each
            // cascade batch restarts the timer.
            if !game_state.popping().is_empty() && !game_state.paused() {
                pop_timer_ms = pop_timer_ms.saturating_sub(TICK_MS);
                if pop_timer_ms == 0 {
                    game_state.animation_complete();
                    pop_timer_ms = POP_ANIMATION_MS;
                }
            } else {
                pop_timer_ms = POP_ANIMATION_MS;
            }

            if let Some(event) = game_state.take_last_event() {
                if event.combo {
                    toast = Some(format!("Great combo! Popped {} bubbles", event.popped));
                    toast_timer_ms = TOAST_MS;
                }
            }

            if toast_timer_ms > 0 {
                toast_timer_ms = toast_timer_ms.saturating_sub(TICK_MS);
                if toast_timer_ms == 0 {
                    toast = None;
                }
            }
        }
    }
}
