//! Key mapping from terminal events to the stop request.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Check if a key asks the renderer to stop (Ctrl+C).
pub fn should_stop(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if a terminal event asks the renderer to stop.
pub fn is_stop_event(event: &Event) -> bool {
    match event {
        Event::Key(key) => should_stop(*key),
        _ => false,
    }
}
