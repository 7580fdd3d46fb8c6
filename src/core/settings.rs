// Viewer Settings
// Persisted slideshow preferences: folders, shuffle, motion, timing and overlay sizes

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::app_config::{compiled, SlideshowLimits};
use crate::constants::LEGACY_SETTINGS_FILE_NAME;

/// Persisted viewer preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Photo folders in playback order
    pub folders: Vec<PathBuf>,

    /// Shuffle the playlist when a slideshow starts
    pub shuffle: bool,

    /// Apply pan/zoom motion while a photo is shown
    pub motion: bool,

    /// Seconds each photo stays on screen
    pub duration: u64,

    /// Overlay folder title size in points
    pub overlay_folder_font_size: f32,

    /// Overlay file title size in points
    pub overlay_file_font_size: f32,
}

/// On-disk shape, tolerant of missing keys and older layouts
#[derive(Debug, Default, Deserialize)]
struct StoredSettings {
    #[serde(default)]
    folders: Vec<PathBuf>,
    shuffle: Option<bool>,
    motion: Option<bool>,
    duration: Option<i64>,
    overlay_folder_font_size: Option<f32>,
    overlay_file_font_size: Option<f32>,

    // Older releases used a single title size, and before that a slider percentage
    overlay_title_font_size: Option<f32>,
    overlay_percentage: Option<serde_yaml::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            shuffle: compiled::SHUFFLE,
            motion: compiled::MOTION,
            duration: compiled::DURATION_SECS,
            overlay_folder_font_size: compiled::FONT_SIZE,
            overlay_file_font_size: compiled::FONT_SIZE,
        }
    }
}

impl From<StoredSettings> for Settings {
    fn from(stored: StoredSettings) -> Self {
        let defaults = Settings::default();

        let mut folder_font = stored.overlay_folder_font_size;
        let mut file_font = stored.overlay_file_font_size;

        if let Some(legacy) = stored.overlay_title_font_size {
            folder_font = folder_font.or(Some(legacy));
            file_font = file_font.or(Some(legacy));
        }

        if folder_font.is_none() || file_font.is_none() {
            if let Some(percentage) = stored.overlay_percentage.as_ref() {
                let converted = convert_legacy_overlay_percentage(percentage);
                folder_font = folder_font.or(Some(converted));
                file_font = file_font.or(Some(converted));
            }
        }

        let settings = Self {
            folders: stored.folders,
            shuffle: stored.shuffle.unwrap_or(defaults.shuffle),
            motion: stored.motion.unwrap_or(defaults.motion),
            duration: stored
                .duration
                .map(|d| d.max(0) as u64)
                .unwrap_or(defaults.duration),
            overlay_folder_font_size: folder_font.unwrap_or(defaults.overlay_folder_font_size),
            overlay_file_font_size: file_font.unwrap_or(defaults.overlay_file_font_size),
        };

        settings.clamped(&SlideshowLimits::default())
    }
}

/// Map the old overlay slider percentage (10-100) onto a font size (12-36pt)
fn convert_legacy_overlay_percentage(value: &serde_yaml::Value) -> f32 {
    let parsed = match value {
        serde_yaml::Value::Number(n) => n.as_f64(),
        serde_yaml::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let Some(percentage) = parsed else {
        return compiled::FONT_SIZE;
    };

    let (min_slider, max_slider) = (10.0, 100.0);
    let (min_font, max_font) = (12.0, 36.0);

    let clamped = percentage.clamp(min_slider, max_slider);
    let ratio = (clamped - min_slider) / (max_slider - min_slider);
    (min_font + ratio * (max_font - min_font)) as f32
}

impl Settings {
    /// Load settings from a file, failing on unreadable or malformed content
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;

        // JSON is valid YAML, so legacy settings.json files parse here too
        let stored: StoredSettings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;

        Ok(stored.into())
    }

    /// Load settings, falling back to the legacy file and then to defaults
    pub fn load_or_default(path: &Path) -> Self {
        let candidate = if path.exists() {
            path.to_path_buf()
        } else {
            let legacy = path.with_file_name(LEGACY_SETTINGS_FILE_NAME);
            if !legacy.exists() {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Self::default();
            }
            legacy
        };

        match Self::load(&candidate) {
            Ok(settings) => {
                debug!(path = %candidate.display(), folders = settings.folders.len(), "loaded settings");
                settings
            }
            Err(e) => {
                warn!("{:#}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write settings: {}", path.display()))?;

        debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Pull numeric values back into their allowed ranges
    pub fn clamped(mut self, limits: &SlideshowLimits) -> Self {
        self.duration = self
            .duration
            .clamp(*limits.duration_secs.start(), *limits.duration_secs.end());
        self.overlay_folder_font_size = clamp_font(self.overlay_folder_font_size, limits);
        self.overlay_file_font_size = clamp_font(self.overlay_file_font_size, limits);
        self
    }

    /// Append a folder unless it is already listed. Returns whether it was added.
    pub fn add_folder(&mut self, folder: impl Into<PathBuf>) -> bool {
        let folder = folder.into();
        if self.folders.contains(&folder) {
            return false;
        }
        self.folders.push(folder);
        true
    }

    /// Remove the folder at `index`
    pub fn remove_folder(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.folders.len()).then(|| self.folders.remove(index))
    }

    /// Swap the folder at `index` with its predecessor. Returns the new index.
    pub fn move_folder_up(&mut self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.folders.len() {
            return None;
        }
        self.folders.swap(index, index - 1);
        Some(index - 1)
    }

    /// Swap the folder at `index` with its successor. Returns the new index.
    pub fn move_folder_down(&mut self, index: usize) -> Option<usize> {
        let next = index.checked_add(1).filter(|&next| next < self.folders.len())?;
        self.folders.swap(index, next);
        Some(next)
    }
}

fn clamp_font(size: f32, limits: &SlideshowLimits) -> f32 {
    if size.is_nan() {
        return compiled::FONT_SIZE;
    }
    size.clamp(*limits.font_size.start(), *limits.font_size.end())
}
