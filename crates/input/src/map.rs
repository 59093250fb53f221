//! Key mapping from terminal events to game actions.
//!
//! Arrows are fixed bindings. Letters are matched case-insensitively: vi keys
//! and WASD both move and rotate, `x`/`z` are rotation aliases.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Only presses map to actions; releases and terminal auto-repeat are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        // No soft drop: the vertical arrows rotate.
        KeyCode::Up => Some(GameAction::RotateCw),
        KeyCode::Down => Some(GameAction::RotateCcw),
        KeyCode::Char(c) => letter_action(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn letter_action(c: char) -> Option<GameAction> {
    let action = match c {
        'h' | 'a' => GameAction::MoveLeft,
        'l' | 'd' => GameAction::MoveRight,
        'k' | 'w' | 'x' => GameAction::RotateCw,
        'j' | 's' | 'z' => GameAction::RotateCcw,
        ' ' => GameAction::HardDrop,
        'p' => GameAction::Pause,
        'r' => GameAction::Restart,
        _ => return None,
    };
    Some(action)
}

/// `q`, `Esc` or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
