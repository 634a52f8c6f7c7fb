//! Key mapping from terminal events to held keys and display events.

use crate::types::DisplayEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys whose held state is sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldKey {
    Left,
    Right,
    Jump,
}

/// Map a key code to the movement key it controls.
pub fn held_key(code: KeyCode) -> Option<HeldKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(HeldKey::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(HeldKey::Right)
        }
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k') => Some(HeldKey::Jump),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a raw terminal event to a discrete display event.
///
/// Only key presses count; repeats and releases never toggle or quit.
pub fn display_event(event: &Event) -> Option<DisplayEvent> {
    match event {
        Event::Resize(width, height) => Some(DisplayEvent::Resize {
            width: *width,
            height: *height,
        }),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                Some(DisplayEvent::Quit)
            } else if matches!(key.code, KeyCode::F(11) | KeyCode::Esc) {
                Some(DisplayEvent::ToggleFullscreen)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(held_key(KeyCode::Left), Some(HeldKey::Left));
        assert_eq!(held_key(KeyCode::Char('a')), Some(HeldKey::Left));
        assert_eq!(held_key(KeyCode::Right), Some(HeldKey::Right));
        assert_eq!(held_key(KeyCode::Char('D')), Some(HeldKey::Right));
        assert_eq!(held_key(KeyCode::Char(' ')), Some(HeldKey::Jump));
        assert_eq!(held_key(KeyCode::Up), Some(HeldKey::Jump));
        assert_eq!(held_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
    }

    #[test]
    fn test_fullscreen_toggle_keys() {
        assert_eq!(
            display_event(&key(KeyCode::F(11), KeyEventKind::Press)),
            Some(DisplayEvent::ToggleFullscreen)
        );
        assert_eq!(
            display_event(&key(KeyCode::Esc, KeyEventKind::Press)),
            Some(DisplayEvent::ToggleFullscreen)
        );
        assert_eq!(display_event(&key(KeyCode::Esc, KeyEventKind::Release)), None);
    }

    #[test]
    fn test_resize_and_quit_events() {
        assert_eq!(
            display_event(&Event::Resize(120, 40)),
            Some(DisplayEvent::Resize {
                width: 120,
                height: 40
            })
        );
        assert_eq!(
            display_event(&key(KeyCode::Char('q'), KeyEventKind::Press)),
            Some(DisplayEvent::Quit)
        );
        assert_eq!(display_event(&key(KeyCode::Left, KeyEventKind::Press)), None);
        assert_eq!(display_event(&Event::FocusGained), None);
    }
}
