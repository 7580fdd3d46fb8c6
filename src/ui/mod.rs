// UI module
// Terminal player for the slideshow

pub mod player_view;
pub mod styles;

use anyhow::{Context, Result};
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::core::{AppEvent, EventHandler, Slideshow};

pub use player_view::render_player;
pub use styles::Styles;

/// Player state around a running slideshow
#[derive(Debug)]
pub struct Player {
    pub slideshow: Slideshow,

    /// Header and footer hidden
    pub fullscreen: bool,

    /// Caption sizes from settings, shown in the details panel
    pub folder_font_size: f32,
    pub file_font_size: f32,

    /// Whether the player should exit
    pub should_quit: bool,
}

impl Player {
    pub fn new(slideshow: Slideshow, folder_font_size: f32, file_font_size: f32) -> Self {
        Self {
            slideshow,
            fullscreen: false,
            folder_font_size,
            file_font_size,
            should_quit: false,
        }
    }

    /// Apply one application event
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::TogglePause => self.slideshow.toggle_pause(now),
            AppEvent::Next => self.slideshow.next(now),
            AppEvent::Previous => self.slideshow.previous(now),
            AppEvent::ToggleFullscreen => self.fullscreen = !self.fullscreen,
            AppEvent::None => {}
        }
    }
}

/// Take over the terminal, run the player, and restore the terminal even on error
pub fn run(player: &mut Player, poll_interval: Duration) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let result = run_player(&mut terminal, player, poll_interval);
            let _ = terminal.show_cursor();
            result
        });

    // Restore terminal
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);

    result
}

/// Run the main player event loop
pub fn run_player(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    player: &mut Player,
    poll_interval: Duration,
) -> Result<()> {
    loop {
        let now = Instant::now();
        if player.slideshow.tick(now) {
            debug!(position = ?player.slideshow.position(), "advanced on timer");
        }

        // Render the UI
        terminal.draw(|f| render_player(f, player, now))?;

        // Handle events
        if event::poll(poll_interval)? {
            let app_event = EventHandler::handle(event::read()?);
            player.handle_event(app_event, Instant::now());
        }

        // Check if we should quit
        if player.should_quit {
            return Ok(());
        }
    }
}
