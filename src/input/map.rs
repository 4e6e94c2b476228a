//! Keyboard bindings.
//!
//! Arrow keys and WASD both steer the piece; Enter or `y` starts a game,
//! Space drops, `p` pauses, `m` mutes, `q` ends the run.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::UserAction;

/// Map a key event to an engine action. Unbound keys map to
/// [`UserAction::None`].
pub fn map_key(key: KeyEvent) -> UserAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => UserAction::Start,
        KeyCode::Char('p') => UserAction::Pause,
        KeyCode::Char('q') => UserAction::Terminate,
        KeyCode::Char('m') => UserAction::Mute,
        KeyCode::Left | KeyCode::Char('a') => UserAction::Left,
        KeyCode::Right | KeyCode::Char('d') => UserAction::Right,
        KeyCode::Down | KeyCode::Char('s') => UserAction::Down,
        KeyCode::Char(' ') => UserAction::Drop,
        KeyCode::Up | KeyCode::Char('w') => UserAction::Rotate,
        _ => UserAction::None,
    }
}

/// Ctrl-C bails out of the loop regardless of game phase.
pub fn is_forced_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
