//! Event handling for the TUI.
//!
//! Provides keyboard event polling and key classification.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use ticklist_store::Filter;

use crate::TuiResult;

/// Poll for keyboard events with a timeout.
///
/// Returns `Some(KeyEvent)` if a key was pressed within the timeout,
/// or `None` if no key was pressed. Release and repeat events are skipped.
pub fn poll_key(timeout: Duration) -> TuiResult<Option<KeyEvent>> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(Some(key));
    }
    Ok(None)
}

/// Check if the key event is Ctrl+C.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Check if the key event represents a quit command.
///
/// Returns `true` for 'q' key or Ctrl+C.
pub fn is_quit(key: &KeyEvent) -> bool {
    is_interrupt(key)
        || matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
}

/// Check if the key event is the Tab key.
pub fn is_tab(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Tab,
            ..
        }
    )
}

/// Check if the key event is the down navigation key (j or Down arrow).
pub fn is_down(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Down,
            ..
        }
    )
}

/// Check if the key event is the up navigation key (k or Up arrow).
pub fn is_up(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('k'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Up,
            ..
        }
    )
}

/// Check if the key event is the Enter key.
pub fn is_enter(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Enter,
            ..
        }
    )
}

/// Check if the key event is the Esc key.
pub fn is_escape(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Esc,
            ..
        }
    )
}

/// Check if the key event is the Backspace key.
pub fn is_backspace(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        }
    )
}

/// Check if the key event starts typing a new task (a or i).
pub fn is_edit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('a' | 'i'),
            modifiers: KeyModifiers::NONE,
            ..
        }
    )
}

/// Check if the key event toggles the selected task (Space or Enter).
pub fn is_toggle(key: &KeyEvent) -> bool {
    is_enter(key)
        || matches!(
            key,
            KeyEvent {
                code: KeyCode::Char(' '),
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
}

/// Check if the key event deletes the selected task (d or Delete).
pub fn is_delete(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Delete,
            ..
        }
    )
}

/// Filter picked by a number key: 1 All, 2 Active, 3 Completed.
pub fn filter_shortcut(key: &KeyEvent) -> Option<Filter> {
    if key.modifiers != KeyModifiers::NONE {
        return None;
    }
    match key.code {
        KeyCode::Char('1') => Some(Filter::All),
        KeyCode::Char('2') => Some(Filter::Active),
        KeyCode::Char('3') => Some(Filter::Completed),
        _ => None,
    }
}

/// Character typed into the input line, if the key produces one.
///
/// Shifted characters count; anything with Ctrl or Alt does not.
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => Some(c),
        _ => None,
    }
}
