//! Input module - keyboard handling for game controls

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Aiming
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::AimLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::AimRight),

        // Fire
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameAction::Fire),

        // Meta
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Whether an action is safe to apply on terminal key auto-repeat.
///
/// Holding an aim key should keep turning the shooter; a held fire key must
/// not machine-gun shots.
pub fn repeats(action: GameAction) -> bool {
    matches!(action, GameAction::AimLeft | GameAction::AimRight)
}
