//! Key mapping.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::core::Command;

/// Map a key press to a command. Unbound keys map to `None`.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('n') => Some(Command::NewGame),
        KeyCode::Left => Some(Command::NavigateLeft),
        KeyCode::Right => Some(Command::NavigateRight),
        KeyCode::Up => Some(Command::NavigateUp),
        KeyCode::Down => Some(Command::NavigateDown),
        KeyCode::Char(' ') => Some(Command::FlipStock),
        KeyCode::Char('s') => Some(Command::ToggleWasteSelection),
        KeyCode::Char('f') => Some(Command::MoveToFoundation),
        KeyCode::Char(c @ '1'..='7') => c
            .to_digit(10)
            .and_then(|n| Command::move_to_pile(n as u8)),
        _ => None,
    }
}

/// Block until the next bound key is pressed.
///
/// Resize and unbound key events return `Ok(None)` so the caller redraws.
pub fn next_command() -> Result<Option<Command>> {
    match event::read()? {
        Event::Key(key) => Ok(command_for_key(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_map() {
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Char('n'))), Some(Command::NewGame));
        assert_eq!(command_for_key(press(KeyCode::Left)), Some(Command::NavigateLeft));
        assert_eq!(command_for_key(press(KeyCode::Char(' '))), Some(Command::FlipStock));
        assert_eq!(
            command_for_key(press(KeyCode::Char('s'))),
            Some(Command::ToggleWasteSelection)
        );
        assert_eq!(command_for_key(press(KeyCode::Char('f'))), Some(Command::MoveToFoundation));
    }

    #[test]
    fn test_pile_digits() {
        assert_eq!(command_for_key(press(KeyCode::Char('1'))), Some(Command::MoveToPile(1)));
        assert_eq!(command_for_key(press(KeyCode::Char('7'))), Some(Command::MoveToPile(7)));
        assert_eq!(command_for_key(press(KeyCode::Char('8'))), None);
        assert_eq!(command_for_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key), None);
    }
}
