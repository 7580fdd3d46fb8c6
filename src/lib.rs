// Pi Photo Viewer Library
// Slideshow state, settings and image discovery, plus the guarded git sync helper

// Core infrastructure - configuration, settings, slideshow state
pub mod core;

// Operations - git sync flow, image library, motion planning
pub mod operations;

// UI - terminal player
pub mod ui;

// Utilities - helper functions and tools
pub mod utilities;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use crate::core::{AppConfig, Settings, Slideshow, SlideshowOptions};
pub use operations::{GitCli, ImageLibrary, MotionPlan, SyncHelper, SyncOutcome, VcsOps};
pub use constants::*;
