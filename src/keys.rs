//! Keybinding definitions
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (quit)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Placeholder keys
// =============================================================================

/// Tap the placeholder button
pub const ACTIVATE: KeyCode = KeyCode::Enter;

/// Tap the placeholder button (alternative)
pub const ACTIVATE_ALT: KeyCode = KeyCode::Char(' ');

/// Check if key taps the placeholder button (Enter or Space)
pub fn is_activate(code: KeyCode) -> bool {
    matches!(code, ACTIVATE | ACTIVATE_ALT)
}

// =============================================================================
// Demo keys
// =============================================================================

/// Quit the demo
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

/// Append an item to the list
pub const ADD_ITEM: KeyCode = KeyCode::Char('a');

/// Remove the last item
pub const REMOVE_ITEM: KeyCode = KeyCode::Char('d');

/// Remove all items
pub const CLEAR_ITEMS: KeyCode = KeyCode::Char('c');

/// Reload in the loading state
pub const SHOW_LOADING: KeyCode = KeyCode::Char('l');

/// Reload in the error state
pub const SHOW_ERROR: KeyCode = KeyCode::Char('e');

/// Reload in the loaded state
pub const RELOAD: KeyCode = KeyCode::Char('r');

/// Move selection up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move selection down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | KeyCode::Up)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | KeyCode::Down)
}

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Hints shown in the demo status bar
pub const DEMO_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "a",
        label: "Add",
        color: Color::Green,
    },
    KeyHint {
        key: "d",
        label: "Remove",
        color: Color::Red,
    },
    KeyHint {
        key: "c",
        label: "Clear",
        color: Color::Red,
    },
    KeyHint {
        key: "l",
        label: "Loading",
        color: Color::Cyan,
    },
    KeyHint {
        key: "e",
        label: "Error",
        color: Color::Magenta,
    },
    KeyHint {
        key: "r",
        label: "Reload",
        color: Color::Yellow,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Gray,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_keys() {
        assert!(is_activate(KeyCode::Enter));
        assert!(is_activate(KeyCode::Char(' ')));
        assert!(!is_activate(KeyCode::Char('a')));
    }

    #[test]
    fn test_interrupt_key_needs_control() {
        assert!(is_interrupt_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt_key(&KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_move_keys() {
        assert!(is_move_up(KeyCode::Up));
        assert!(is_move_up(KeyCode::Char('k')));
        assert!(is_move_down(KeyCode::Down));
        assert!(is_move_down(KeyCode::Char('j')));
    }

    #[test]
    fn test_demo_hint_keys_unique() {
        let mut keys: Vec<&str> = DEMO_HINTS.iter().map(|h| h.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), DEMO_HINTS.len());
    }
}
