// Slideshow State
// Playlist, cursor, pause state and display timer

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;

use super::app_config::{AppConfig, MotionRanges};
use super::settings::Settings;
use crate::constants::PAUSED_SUFFIX;
use crate::operations::{MotionFrame, MotionPlan};
use crate::utilities::folder_and_file_name;

/// Playback options for one slideshow run
#[derive(Debug, Clone)]
pub struct SlideshowOptions {
    /// Permute the playlist once at start
    pub shuffle: bool,
    /// Plan pan/zoom motion for each photo
    pub motion: bool,
    /// Time each photo stays on screen
    pub duration: Duration,
    pub motion_ranges: MotionRanges,
}

impl SlideshowOptions {
    pub fn from_settings(settings: &Settings, config: &AppConfig) -> Self {
        Self {
            shuffle: settings.shuffle,
            motion: settings.motion,
            duration: Duration::from_secs(settings.duration),
            motion_ranges: config.motion.clone(),
        }
    }
}

/// A running slideshow. Time is passed in so the state can be driven without a clock.
#[derive(Debug)]
pub struct Slideshow<R = StdRng> {
    images: Vec<PathBuf>,
    index: usize,
    options: SlideshowOptions,
    paused_at: Option<Instant>,
    /// When the display timer was last (re)started
    timer_started: Instant,
    /// When the current photo appeared
    shown_at: Instant,
    /// Time spent paused since the current photo appeared
    paused_total: Duration,
    plan: MotionPlan,
    rng: R,
}

impl Slideshow<StdRng> {
    /// Slideshow with an entropy-seeded RNG
    pub fn start(images: Vec<PathBuf>, options: SlideshowOptions, now: Instant) -> Self {
        Self::new(images, options, StdRng::from_os_rng(), now)
    }
}

impl<R: Rng> Slideshow<R> {
    pub fn new(mut images: Vec<PathBuf>, options: SlideshowOptions, mut rng: R, now: Instant) -> Self {
        if options.shuffle {
            images.shuffle(&mut rng);
        }
        debug!(count = images.len(), shuffle = options.shuffle, "slideshow started");

        let mut slideshow = Self {
            images,
            index: 0,
            options,
            paused_at: None,
            timer_started: now,
            shown_at: now,
            paused_total: Duration::ZERO,
            plan: MotionPlan::still(),
            rng,
        };
        slideshow.show(0, now);
        slideshow
    }

    /// Photo currently on screen
    pub fn current(&self) -> Option<&Path> {
        self.images.get(self.index).map(PathBuf::as_path)
    }

    /// Playlist in playback order
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    /// 1-based position and playlist length
    pub fn position(&self) -> (usize, usize) {
        if self.images.is_empty() {
            (0, 0)
        } else {
            (self.index + 1, self.images.len())
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn options(&self) -> &SlideshowOptions {
        &self.options
    }

    /// Motion plan of the current photo
    pub fn motion_plan(&self) -> &MotionPlan {
        &self.plan
    }

    /// Advance to the next photo, wrapping at the end
    pub fn next(&mut self, now: Instant) {
        if self.images.is_empty() {
            return;
        }
        let index = (self.index + 1) % self.images.len();
        self.show(index, now);
    }

    /// Go back to the previous photo, wrapping at the start
    pub fn previous(&mut self, now: Instant) {
        if self.images.is_empty() {
            return;
        }
        let len = self.images.len();
        let index = (self.index + len - 1) % len;
        self.show(index, now);
    }

    /// Pause or resume. Resuming restarts the display timer.
    pub fn toggle_pause(&mut self, now: Instant) {
        if self.images.is_empty() {
            return;
        }
        match self.paused_at.take() {
            Some(paused_at) => {
                self.paused_total += now.saturating_duration_since(paused_at);
                self.timer_started = now;
            }
            None => self.paused_at = Some(now),
        }
        debug!(paused = self.is_paused(), "toggled pause");
    }

    /// Advance if the current photo's time is up. Returns whether it advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_paused() || self.images.is_empty() {
            return false;
        }
        if now.saturating_duration_since(self.timer_started) >= self.options.duration {
            self.next(now);
            return true;
        }
        false
    }

    /// Fraction of the current photo's motion completed, frozen while paused
    pub fn motion_progress(&self, now: Instant) -> f64 {
        let duration = self.options.duration.as_secs_f64();
        if duration <= 0.0 {
            return 1.0;
        }
        let until = self.paused_at.unwrap_or(now);
        let shown = until
            .saturating_duration_since(self.shown_at)
            .saturating_sub(self.paused_total);
        (shown.as_secs_f64() / duration).clamp(0.0, 1.0)
    }

    /// Pan/zoom to apply to the current photo at `now`
    pub fn motion_frame(&self, now: Instant) -> MotionFrame {
        self.plan.at(self.motion_progress(now))
    }

    /// `"<folder> / <file>"`, with a paused marker while paused
    pub fn overlay_text(&self) -> String {
        let Some(path) = self.current() else {
            return String::new();
        };
        let (folder, file) = folder_and_file_name(path);
        let mut text = format!("{} / {}", folder, file);
        if self.is_paused() {
            text.push_str(PAUSED_SUFFIX);
        }
        text
    }

    fn show(&mut self, index: usize, now: Instant) {
        self.index = index;
        self.shown_at = now;
        self.timer_started = now;
        self.paused_total = Duration::ZERO;
        if let Some(paused_at) = self.paused_at.as_mut() {
            *paused_at = now;
        }

        // Pan offsets are fractions of the image size
        self.plan = if self.options.motion && !self.images.is_empty() {
            MotionPlan::random(&mut self.rng, 1.0, 1.0, &self.options.motion_ranges)
        } else {
            MotionPlan::still()
        };

        if let Some(path) = self.current() {
            debug!(index, path = %path.display(), "showing photo");
        }
    }
}
