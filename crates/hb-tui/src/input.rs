//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Command;

/// Convert a key event to a table command. Mouse events are handled
/// directly in `App`, since they need the rendered hit boxes.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),

        // Vi keys next to the arrows
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Some(Command::NextCard),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Some(Command::PrevCard),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Reveal),
        KeyCode::Backspace => Some(Command::Conceal),

        _ => None,
    }
}
