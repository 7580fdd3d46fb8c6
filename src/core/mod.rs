// Core infrastructure module
// Configuration, persisted settings, slideshow state and input events

pub mod app_config;
pub mod events;
pub mod settings;
pub mod slideshow;

pub use app_config::AppConfig;
pub use events::{AppEvent, EventHandler};
pub use settings::Settings;
pub use slideshow::{Slideshow, SlideshowOptions};
