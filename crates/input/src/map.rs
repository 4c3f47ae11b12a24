//! Key and mouse mapping from terminal events to input commands.

use crate::types::Choice;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What a terminal event asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Activate one of the four targets.
    Press(Choice),
    /// Start (or restart) a game.
    NewGame,
}

/// Map keyboard input to commands.
///
/// Digits pick targets by number; `u i j k` mirror the 2x2 pad grid.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    match key.code {
        KeyCode::Char('1') | KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(InputCommand::Press(Choice::Button1))
        }
        KeyCode::Char('2') | KeyCode::Char('i') | KeyCode::Char('I') => {
            Some(InputCommand::Press(Choice::Button2))
        }
        KeyCode::Char('3') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(InputCommand::Press(Choice::Button3))
        }
        KeyCode::Char('4') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(InputCommand::Press(Choice::Button4))
        }

        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(InputCommand::NewGame)
        }

        _ => None,
    }
}

/// Map a mouse event to a press, using `hit` to resolve screen coordinates.
///
/// Only left-button presses count; drags and releases are ignored.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    hit: impl Fn(u16, u16) -> Option<Choice>,
) -> Option<InputCommand> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit(mouse.column, mouse.row).map(InputCommand::Press)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
