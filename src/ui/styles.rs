// UI Styles
// Color schemes and styling for the terminal player

use ratatui::style::{Color, Modifier, Style};

/// Player color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // === Photo panel ===

    pub fn photo_border() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn photo_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Rgb(150, 150, 150))
    }

    pub fn value() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn motion_gauge() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::Rgb(40, 40, 40))
    }

    pub fn empty_notice() -> Style {
        Style::default()
            .fg(Color::Rgb(150, 150, 150))
            .add_modifier(Modifier::ITALIC)
    }

    // === Overlay ===

    /// White title on a dark band, like the on-screen caption of the photo frame
    pub fn overlay() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(30, 30, 30))
    }

    pub fn overlay_paused() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .bg(Color::Rgb(30, 30, 30))
            .add_modifier(Modifier::BOLD)
    }
}
