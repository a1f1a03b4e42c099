use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::app::App;

/// Wheel delta fed to the navigator per terminal scroll notch. Terminals
/// report notches without magnitude; 20 sits above the default sensitivity
/// threshold so a notch always counts as intentional.
pub const WHEEL_NOTCH_DELTA: i32 = 20;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Advance one section
    NextSection,
    /// Go back one section
    PrevSection,
    /// Jump to the first section
    FirstSection,
    /// Jump to the last section
    LastSection,
    /// Wheel input with a signed vertical delta
    Wheel(i32),
    /// Click on the nav link at this index
    ActivateLink(usize),
    /// Click on the scroll-hint indicator
    IndicatorClick,
    /// Scrollbar click or drag mapped to a track row
    ScrollbarTo(u16),
    /// Mouse button released (ends a scrollbar drag)
    EndDrag,
    None,
}

/// Map a key press to an action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,

        // Section navigation
        (KeyCode::Down | KeyCode::PageDown, KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::Up | KeyCode::PageUp, KeyModifiers::NONE) => Action::PrevSection,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::PrevSection,
        (KeyCode::Home, KeyModifiers::NONE) => Action::FirstSection,
        (KeyCode::End, KeyModifiers::NONE) => Action::LastSection,

        _ => Action::None,
    }
}

/// Map a mouse event to an action using the hit zones recorded during the
/// last render
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollDown => Action::Wheel(WHEEL_NOTCH_DELTA),
        MouseEventKind::ScrollUp => Action::Wheel(-WHEEL_NOTCH_DELTA),

        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(idx) = app.nav_zone_at(pos) {
                return Action::ActivateLink(idx);
            }
            if app.indicator_zone.contains(pos) {
                return Action::IndicatorClick;
            }
            if app.scrollbar_zone.contains(pos) {
                return Action::ScrollbarTo(mouse.row);
            }
            Action::None
        }

        MouseEventKind::Drag(MouseButton::Left) => {
            if app.dragging_scrollbar {
                Action::ScrollbarTo(mouse.row)
            } else {
                Action::None
            }
        }

        MouseEventKind::Up(MouseButton::Left) => Action::EndDrag,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_section_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Down)), Action::NextSection);
        assert_eq!(handle_key_event(key(KeyCode::PageDown)), Action::NextSection);
        assert_eq!(handle_key_event(key(KeyCode::Up)), Action::PrevSection);
        assert_eq!(handle_key_event(key(KeyCode::PageUp)), Action::PrevSection);
        assert_eq!(handle_key_event(key(KeyCode::Home)), Action::FirstSection);
        assert_eq!(handle_key_event(key(KeyCode::End)), Action::LastSection);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_unbound_key_is_none() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), Action::None);
        assert_eq!(handle_key_event(key(KeyCode::Tab)), Action::None);
    }

    #[test]
    fn test_wheel_notch_clears_threshold() {
        assert!(WHEEL_NOTCH_DELTA >= snapdeck_core::ScrollConfig::default().wheel_threshold);
    }
}
