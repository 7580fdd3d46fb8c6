// Pi Photo Viewer
// Terminal slideshow player and settings management

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use pi_photo_viewer::core::{AppConfig, Settings, Slideshow, SlideshowOptions};
use pi_photo_viewer::operations::ImageLibrary;
use pi_photo_viewer::ui::{self, Player};
use pi_photo_viewer::utilities::{init_logging, resolve_path};
use pi_photo_viewer::SETTINGS_FILE_NAME;

#[derive(Debug, Parser)]
#[command(name = "pi-photo-viewer", version, about = "Photo slideshow with pan/zoom motion")]
struct Cli {
    /// Settings file (defaults to settings.yaml in the current directory)
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the slideshow over the configured folders
    Play {
        /// Override the stored shuffle preference
        #[arg(long, value_name = "BOOL")]
        shuffle: Option<bool>,

        /// Override the stored motion preference
        #[arg(long, value_name = "BOOL")]
        motion: Option<bool>,

        /// Override the stored seconds per photo
        #[arg(long, value_name = "SECONDS")]
        duration: Option<u64>,
    },

    /// List configured folders with their photo counts
    Folders,

    /// Append a folder to the playlist
    AddFolder {
        path: String,
    },

    /// Remove the folder at INDEX (as shown by `folders`)
    RemoveFolder {
        index: usize,
    },

    /// Move the folder at INDEX one place up or down
    MoveFolder {
        index: usize,
        #[arg(value_enum)]
        direction: Direction,
    },

    /// Change stored slideshow preferences
    Configure {
        #[arg(long, value_name = "BOOL")]
        shuffle: Option<bool>,

        #[arg(long, value_name = "BOOL")]
        motion: Option<bool>,

        /// Seconds per photo
        #[arg(long, value_name = "SECONDS")]
        duration: Option<u64>,

        /// Folder caption size in points
        #[arg(long, value_name = "PT")]
        folder_font: Option<f32>,

        /// File caption size in points
        #[arg(long, value_name = "PT")]
        file_font: Option<f32>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::default();
    let settings_path = cli.settings.unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME));
    let mut settings = Settings::load_or_default(&settings_path);
    let library = ImageLibrary::new(config.supported_extensions.clone());

    match cli.command {
        Command::Play { shuffle, motion, duration } => {
            if let Some(shuffle) = shuffle {
                settings.shuffle = shuffle;
            }
            if let Some(motion) = motion {
                settings.motion = motion;
            }
            if let Some(duration) = duration {
                settings.duration = duration;
            }
            let settings = settings.clamped(&config.slideshow);

            if settings.folders.is_empty() {
                bail!("No folders configured; add one with `pi-photo-viewer add-folder <PATH>`");
            }

            let images = library.scan_folders(&settings.folders);
            info!(count = images.len(), "starting slideshow");

            let options = SlideshowOptions::from_settings(&settings, &config);
            let slideshow = Slideshow::start(images, options, Instant::now());
            let mut player = Player::new(
                slideshow,
                settings.overlay_folder_font_size,
                settings.overlay_file_font_size,
            );

            ui::run(&mut player, config.ui.poll_interval)
        }

        Command::Folders => {
            if settings.folders.is_empty() {
                println!("No folders configured");
            }
            for (index, folder) in settings.folders.iter().enumerate() {
                println!("{}", folder_line(index, folder, library.count_images(folder)));
            }
            Ok(())
        }

        Command::AddFolder { path } => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            let folder = resolve_path(&cwd, &path);
            if !folder.is_dir() {
                bail!("Not a directory: {}", folder.display());
            }

            if settings.add_folder(folder.clone()) {
                settings.save(&settings_path)?;
                println!("{} ({} photos)", folder.display(), library.count_images(&folder));
            } else {
                println!("Already configured: {}", folder.display());
            }
            Ok(())
        }

        Command::RemoveFolder { index } => {
            let removed = settings
                .remove_folder(index)
                .with_context(|| format!("No folder at index {}", index))?;
            settings.save(&settings_path)?;
            println!("Removed {}", removed.display());
            Ok(())
        }

        Command::MoveFolder { index, direction } => {
            let moved = match direction {
                Direction::Up => settings.move_folder_up(index),
                Direction::Down => settings.move_folder_down(index),
            };
            let Some(new_index) = moved else {
                bail!("Cannot move folder at index {} {:?}", index, direction);
            };
            settings.save(&settings_path)?;
            println!("Moved {} to index {}", settings.folders[new_index].display(), new_index);
            Ok(())
        }

        Command::Configure { shuffle, motion, duration, folder_font, file_font } => {
            if let Some(shuffle) = shuffle {
                settings.shuffle = shuffle;
            }
            if let Some(motion) = motion {
                settings.motion = motion;
            }
            if let Some(duration) = duration {
                settings.duration = duration;
            }
            if let Some(size) = folder_font {
                settings.overlay_folder_font_size = size;
            }
            if let Some(size) = file_font {
                settings.overlay_file_font_size = size;
            }

            let settings = settings.clamped(&config.slideshow);
            settings.save(&settings_path)?;

            println!("shuffle: {}", settings.shuffle);
            println!("motion: {}", settings.motion);
            println!("duration: {}s", settings.duration);
            println!("folder caption: {}pt", settings.overlay_folder_font_size);
            println!("file caption: {}pt", settings.overlay_file_font_size);
            Ok(())
        }
    }
}

/// One `folders` listing row; the index is what `remove-folder` and `move-folder` take
fn folder_line(index: usize, folder: &Path, count: usize) -> String {
    format!("{}: {} ({} photos)", index, folder.display(), count)
}
