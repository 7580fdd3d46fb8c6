// Player View
// Photo panel, caption overlay and chrome for the terminal player

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

use super::{Player, Styles};

/// Render the entire player
pub fn render_player(f: &mut Frame, player: &Player, now: Instant) {
    if player.fullscreen {
        render_photo(f, player, now, f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Photo
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, player, chunks[0]);
    render_photo(f, player, now, chunks[1]);
    render_footer(f, chunks[2]);
}

/// Render the header bar
fn render_header(f: &mut Frame, player: &Player, area: Rect) {
    let (position, total) = player.slideshow.position();
    let header = Paragraph::new(format!("Pi Photo Viewer   {} / {}", position, total))
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the photo panel with its caption band
fn render_photo(f: &mut Frame, player: &Player, now: Instant, area: Rect) {
    let slideshow = &player.slideshow;

    let Some(path) = slideshow.current() else {
        let notice = Paragraph::new("No photos found in the configured folders")
            .style(Styles::empty_notice())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Styles::photo_border()));
        f.render_widget(notice, area);
        return;
    };

    let title = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::photo_border())
        .title(Span::styled(format!(" {} ", title), Styles::photo_title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Details
            Constraint::Length(1), // Motion gauge
            Constraint::Length(1), // Caption
        ])
        .split(inner);

    let options = slideshow.options();
    let plan = slideshow.motion_plan();
    let frame = slideshow.motion_frame(now);

    let mut lines = vec![
        detail("Path", path.display().to_string()),
        detail("Duration", format!("{}s", options.duration.as_secs())),
        detail("Shuffle", on_off(options.shuffle)),
    ];

    if options.motion {
        let direction = if plan.zooms_in() { "zoom in" } else { "zoom out" };
        lines.push(detail(
            "Motion",
            format!("{} {:.3}x -> {:.3}x", direction, plan.start_scale, plan.end_scale),
        ));
        lines.push(detail(
            "Frame",
            format!("scale {:.3}x  pan {:+.1}% {:+.1}%", frame.scale, frame.dx * 100.0, frame.dy * 100.0),
        ));
    } else {
        lines.push(detail("Motion", "off".to_string()));
    }

    lines.push(detail(
        "Captions",
        format!("folder {:.0}pt, file {:.0}pt", player.folder_font_size, player.file_font_size),
    ));

    f.render_widget(Paragraph::new(lines), chunks[0]);

    let progress = slideshow.motion_progress(now);
    let gauge = Gauge::default()
        .gauge_style(Styles::motion_gauge())
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));
    f.render_widget(gauge, chunks[1]);

    let caption_style = if slideshow.is_paused() {
        Styles::overlay_paused()
    } else {
        Styles::overlay()
    };
    let caption = Paragraph::new(slideshow.overlay_text())
        .style(caption_style)
        .alignment(Alignment::Center);
    f.render_widget(caption, chunks[2]);
}

/// Render the footer bar
fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new("Esc/q: Quit | Space: Pause | ←/→: Previous/Next | F11/f: Fullscreen")
        .style(Styles::footer())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Styles::label()),
        Span::styled(value, Styles::value()),
    ])
}

fn on_off(value: bool) -> String {
    let text = if value { "on" } else { "off" };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Slideshow, SlideshowOptions};
    use crate::core::app_config::MotionRanges;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;
    use std::time::Duration;

    fn player(images: Vec<PathBuf>) -> (Player, Instant) {
        let now = Instant::now();
        let options = SlideshowOptions {
            shuffle: false,
            motion: true,
            duration: Duration::from_secs(5),
            motion_ranges: MotionRanges::default(),
        };
        let slideshow = Slideshow::new(images, options, StdRng::seed_from_u64(3), now);
        (Player::new(slideshow, 24.0, 24.0), now)
    }

    fn screen(player: &Player, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render_player(f, player, now)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_caption_and_position() {
        let (mut player, now) = player(vec![
            PathBuf::from("/photos/summer/beach.jpg"),
            PathBuf::from("/photos/summer/dunes.jpg"),
        ]);

        let text = screen(&player, now);
        assert!(text.contains("1 / 2"));
        assert!(text.contains("summer / beach.jpg"));

        player.slideshow.toggle_pause(now);
        assert!(screen(&player, now).contains("[PAUSED]"));
    }

    #[test]
    fn test_fullscreen_hides_chrome() {
        let (mut player, now) = player(vec![PathBuf::from("/photos/a/b.jpg")]);
        player.fullscreen = true;
        let text = screen(&player, now);
        assert!(!text.contains("Pi Photo Viewer"));
        assert!(text.contains("a / b.jpg"));
    }

    #[test]
    fn test_empty_playlist_notice() {
        let (player, now) = player(Vec::new());
        assert!(screen(&player, now).contains("No photos found"));
    }
}
