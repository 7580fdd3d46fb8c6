// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const DURATION_SECS: u64 = {duration};
pub const MIN_DURATION_SECS: u64 = {min_duration};
pub const MAX_DURATION_SECS: u64 = {max_duration};
pub const SHUFFLE: bool = {shuffle};
pub const MOTION: bool = {motion};

pub const FONT_SIZE: f32 = {font_size:?};
pub const MIN_FONT_SIZE: f32 = {min_font_size:?};
pub const MAX_FONT_SIZE: f32 = {max_font_size:?};

pub const ZOOM_MIN: f64 = {zoom_min:?};
pub const ZOOM_MAX: f64 = {zoom_max:?};
pub const PAN_RATIO_MIN: f64 = {pan_ratio_min:?};
pub const PAN_RATIO_MAX: f64 = {pan_ratio_max:?};

pub const POLL_INTERVAL_MS: u64 = {poll_interval_ms};

pub const SUPPORTED_EXTENSIONS: &[&str] = &[
{extensions}
];
"#,
        duration = config.duration,
        min_duration = config.min_duration,
        max_duration = config.max_duration,
        shuffle = config.shuffle,
        motion = config.motion,
        font_size = config.font_size,
        min_font_size = config.min_font_size,
        max_font_size = config.max_font_size,
        zoom_min = config.zoom_min,
        zoom_max = config.zoom_max,
        pan_ratio_min = config.pan_ratio_min,
        pan_ratio_max = config.pan_ratio_max,
        poll_interval_ms = config.poll_interval_ms,
        extensions = config.supported_extensions
            .iter()
            .map(|e| format!("    \"{}\",", e))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    duration: u64,
    min_duration: u64,
    max_duration: u64,
    shuffle: bool,
    motion: bool,
    font_size: f32,
    min_font_size: f32,
    max_font_size: f32,
    zoom_min: f64,
    zoom_max: f64,
    pan_ratio_min: f64,
    pan_ratio_max: f64,
    poll_interval_ms: u64,
    supported_extensions: Vec<String>,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            duration: 5,
            min_duration: 2,
            max_duration: 30,
            shuffle: true,
            motion: true,
            font_size: 24.0,
            min_font_size: 12.0,
            max_font_size: 48.0,
            zoom_min: 1.08,
            zoom_max: 1.2,
            pan_ratio_min: 0.02,
            pan_ratio_max: 0.08,
            poll_interval_ms: 50,
            supported_extensions: [".jpg", ".jpeg", ".png", ".webp", ".bmp", ".gif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(PartialEq)]
enum Section {
    None,
    Slideshow,
    Overlay,
    Motion,
    Ui,
    Extensions,
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut section = Section::None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Unindented lines open a new section
        if !line.starts_with(' ') && !line.starts_with('\t') {
            section = match trimmed.trim_end_matches(':') {
                "slideshow" => Section::Slideshow,
                "overlay" => Section::Overlay,
                "motion" => Section::Motion,
                "ui" => Section::Ui,
                "supported_extensions" => {
                    config.supported_extensions.clear(); // Start fresh when we see the section
                    Section::Extensions
                }
                _ => Section::None,
            };
            continue;
        }

        if section == Section::Extensions {
            if let Some(item) = trimmed.strip_prefix("- ") {
                let value = strip_comment(item).trim_matches('"').to_lowercase();
                if !value.is_empty() {
                    config.supported_extensions.push(value);
                }
            }
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        match (&section, key) {
            (Section::Slideshow, "duration") => config.duration = value.parse().unwrap_or(config.duration),
            (Section::Slideshow, "min_duration") => config.min_duration = value.parse().unwrap_or(config.min_duration),
            (Section::Slideshow, "max_duration") => config.max_duration = value.parse().unwrap_or(config.max_duration),
            (Section::Slideshow, "shuffle") => config.shuffle = parse_bool(value),
            (Section::Slideshow, "motion") => config.motion = parse_bool(value),
            (Section::Overlay, "font_size") => config.font_size = value.parse().unwrap_or(config.font_size),
            (Section::Overlay, "min_font_size") => config.min_font_size = value.parse().unwrap_or(config.min_font_size),
            (Section::Overlay, "max_font_size") => config.max_font_size = value.parse().unwrap_or(config.max_font_size),
            (Section::Motion, "zoom_min") => config.zoom_min = value.parse().unwrap_or(config.zoom_min),
            (Section::Motion, "zoom_max") => config.zoom_max = value.parse().unwrap_or(config.zoom_max),
            (Section::Motion, "pan_ratio_min") => config.pan_ratio_min = value.parse().unwrap_or(config.pan_ratio_min),
            (Section::Motion, "pan_ratio_max") => config.pan_ratio_max = value.parse().unwrap_or(config.pan_ratio_max),
            (Section::Ui, "poll_interval_ms") => config.poll_interval_ms = value.parse().unwrap_or(config.poll_interval_ms),
            _ => {}
        }
    }

    config
}

fn strip_comment(value: &str) -> &str {
    match value.find(" #") {
        Some(pos) => value[..pos].trim(),
        None => value.trim(),
    }
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let value = strip_comment(&line[colon_pos + 1..]);

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}
