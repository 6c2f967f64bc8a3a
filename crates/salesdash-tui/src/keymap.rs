//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use salesdash_core::SortKey;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    /// Close the topmost overlay, or quit when none is open.
    Dismiss,
    ToggleTheme,
    ToggleSidebar,
    Up,
    Down,
    Activate,
    CycleRange,
    HoverPrev,
    HoverNext,
    ClearHover,
    CycleSegment,
    CycleFilter,
    SortBy(SortKey),
    ToggleProfileMenu,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Dismiss,
        KeyCode::Char('t') => KeyAction::ToggleTheme,
        KeyCode::Char('m') => KeyAction::ToggleSidebar,
        KeyCode::Up => KeyAction::Up,
        KeyCode::Down => KeyAction::Down,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
        KeyCode::Char('r') => KeyAction::CycleRange,
        KeyCode::Left => KeyAction::HoverPrev,
        KeyCode::Right => KeyAction::HoverNext,
        KeyCode::Char('x') => KeyAction::ClearHover,
        KeyCode::Tab => KeyAction::CycleSegment,
        KeyCode::Char('f') => KeyAction::CycleFilter,
        KeyCode::Char('s') => KeyAction::SortBy(SortKey::Sales),
        KeyCode::Char('g') => KeyAction::SortBy(SortKey::Growth),
        KeyCode::Char('n') => KeyAction::SortBy(SortKey::Name),
        KeyCode::Char('p') => KeyAction::ToggleProfileMenu,
        _ => KeyAction::None,
    }
}
