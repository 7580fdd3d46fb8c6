// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the player
    Quit,

    /// Pause or resume the slideshow
    TogglePause,

    /// Show the next photo
    Next,

    /// Show the previous photo
    Previous,

    /// Hide or show the header and footer
    ToggleFullscreen,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            KeyCode::Char(' ') => AppEvent::TogglePause,
            KeyCode::Right => AppEvent::Next,
            KeyCode::Left => AppEvent::Previous,

            KeyCode::F(11) | KeyCode::Char('f') => AppEvent::ToggleFullscreen,

            _ => AppEvent::None,
        }
    }
}
