// Application constants
// Fixed strings and file names shared by the viewer and the sync helper

/// Settings file written by the viewer
pub const SETTINGS_FILE_NAME: &str = "settings.yaml";

/// Settings file used by older releases, read when the current one is absent
pub const LEGACY_SETTINGS_FILE_NAME: &str = "settings.json";

/// Environment variable that overrides the sync helper's working directory
pub const SYNC_DIR_ENV: &str = "SYNC_HELPER_DIR";

/// Environment variable selecting the log level (error, warn, info, debug, trace)
pub const LOG_LEVEL_ENV: &str = "PI_VIEWER_LOG";

// Sync helper prompts and messages

pub const COMMIT_MESSAGE_PROMPT: &str = "Enter a commit message: ";
pub const STATUS_SEPARATOR: &str = "==============================";
pub const CONFIRM_PROMPT: &str = "Proceed with commit? (y/n): ";
pub const CONFIRM_ACCEPT: &str = "y";
pub const ABORT_MESSAGE: &str = "Commit aborted.";
pub const SUCCESS_MESSAGE: &str = "Changes committed and pushed successfully.";

/// Exit code returned when the operator declines the commit
pub const EXIT_DECLINED: i32 = 1;

/// Appended to the overlay title while the slideshow is paused
pub const PAUSED_SUFFIX: &str = "   [PAUSED]";
