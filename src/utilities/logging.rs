// Logging setup
// Both binaries log to stderr so stdout stays reserved for prompts and output

use tracing::Level;

use crate::constants::LOG_LEVEL_ENV;

/// Install the stderr subscriber. Level comes from `PI_VIEWER_LOG`, defaulting to WARN.
pub fn init_logging() {
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());

    // A subscriber may already be installed (tests, embedding); keep that one
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|v| v.trim().parse::<Level>().ok())
        .unwrap_or(Level::WARN)
}
