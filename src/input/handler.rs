use crossterm::event::{KeyCode, KeyEventKind};

use blockfall::game::Command;

/// Maps a key event to a game command. Releases are ignored.
pub fn command_for_key(key_code: KeyCode, kind: KeyEventKind) -> Option<Command> {
    if kind == KeyEventKind::Release {
        return None;
    }

    match key_code {
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(Command::TogglePause),
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        _ => None,
    }
}
