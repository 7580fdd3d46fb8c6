// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

use std::ops::RangeInclusive;
use std::time::Duration;

/// Application-level configuration for the viewer
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Slideshow timing limits
    pub slideshow: SlideshowLimits,

    /// Ken Burns motion ranges
    pub motion: MotionRanges,

    /// Terminal player settings
    pub ui: UiSettings,

    /// Lowercase file extensions (with leading dot) treated as photos
    pub supported_extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SlideshowLimits {
    /// Allowed seconds per photo
    pub duration_secs: RangeInclusive<u64>,

    /// Allowed overlay font sizes in points
    pub font_size: RangeInclusive<f32>,
}

#[derive(Debug, Clone)]
pub struct MotionRanges {
    /// Zoomed-in scale factor range
    pub zoom: RangeInclusive<f64>,

    /// Pan distance as a fraction of the image size
    pub pan_ratio: RangeInclusive<f64>,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// How long the player waits for input before redrawing
    pub poll_interval: Duration,
}

impl Default for SlideshowLimits {
    fn default() -> Self {
        Self {
            duration_secs: compiled::MIN_DURATION_SECS..=compiled::MAX_DURATION_SECS,
            font_size: compiled::MIN_FONT_SIZE..=compiled::MAX_FONT_SIZE,
        }
    }
}

impl Default for MotionRanges {
    fn default() -> Self {
        Self {
            zoom: compiled::ZOOM_MIN..=compiled::ZOOM_MAX,
            pan_ratio: compiled::PAN_RATIO_MIN..=compiled::PAN_RATIO_MAX,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(compiled::POLL_INTERVAL_MS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slideshow: SlideshowLimits::default(),
            motion: MotionRanges::default(),
            ui: UiSettings::default(),
            supported_extensions: compiled::SUPPORTED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
