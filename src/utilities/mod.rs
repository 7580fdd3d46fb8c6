// Utilities module
// Helper functions and tools

pub mod logging;
pub mod paths;

pub use logging::init_logging;
pub use paths::{folder_and_file_name, normalize_path, resolve_path, resolve_working_dir};
