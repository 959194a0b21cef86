//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::SoftDrop)
        }

        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Rotate),

        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<Command> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(Command::MoveRight));
        assert_eq!(key(KeyCode::Down), Some(Command::SoftDrop));
        assert_eq!(key(KeyCode::Up), Some(Command::Rotate));
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(key(KeyCode::Char('a')), Some(Command::MoveLeft));
        assert_eq!(key(KeyCode::Char('H')), Some(Command::MoveLeft));
        assert_eq!(key(KeyCode::Char('d')), Some(Command::MoveRight));
        assert_eq!(key(KeyCode::Char('L')), Some(Command::MoveRight));
        assert_eq!(key(KeyCode::Char('s')), Some(Command::SoftDrop));
        assert_eq!(key(KeyCode::Char('j')), Some(Command::SoftDrop));
        assert_eq!(key(KeyCode::Char('w')), Some(Command::Rotate));
        assert_eq!(key(KeyCode::Char('K')), Some(Command::Rotate));
    }

    #[test]
    fn test_pause_and_restart() {
        assert_eq!(key(KeyCode::Char(' ')), Some(Command::TogglePause));
        assert_eq!(key(KeyCode::Char('p')), Some(Command::TogglePause));
        assert_eq!(key(KeyCode::Char('R')), Some(Command::Restart));
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
