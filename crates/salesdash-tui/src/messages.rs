//! TUI message types (Elm Messages).

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};

use crate::keymap::{map_key, KeyAction};

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Moved,
    Down,
}

/// Pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    #[must_use]
    pub fn moved(column: u16, row: u16) -> Self {
        Self {
            kind: PointerKind::Moved,
            column,
            row,
        }
    }

    #[must_use]
    pub fn down(column: u16, row: u16) -> Self {
        Self {
            kind: PointerKind::Down,
            column,
            row,
        }
    }
}

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiMessage {
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// Pointer movement or click.
    Pointer(PointerEvent),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Tick event for periodic redraws.
    Tick,
    /// Quit the application.
    Quit,
}

impl TuiMessage {
    /// Translate a terminal event. Events the dashboard ignores map to `None`.
    #[must_use]
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Some(Self::KeyPress(map_key(*key)))
            }
            Event::Mouse(mouse) => {
                let kind = match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerKind::Moved,
                    MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
                    _ => return None,
                };
                Some(Self::Pointer(PointerEvent {
                    kind,
                    column: mouse.column,
                    row: mouse.row,
                }))
            }
            Event::Resize(width, height) => Some(Self::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}
