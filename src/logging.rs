//! File logging.
//!
//! The TUI owns stdout/stderr, so log records go to `T1T2_LOG_FILE` or
//! nowhere. The `log` macros stay cheap no-ops when no logger is installed.

use std::fs::OpenOptions;

use env_logger::{Builder, Target};

use crate::config::Settings;
use crate::error::AppError;

/// Install the global logger if a log file is configured.
///
/// Returns `true` when a logger was installed.
pub fn init(settings: &Settings) -> Result<bool, AppError> {
    let Some(path) = &settings.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open log file '{}': {e}", path.display())))?;

    Builder::new()
        .parse_filters(&settings.log_filter)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| AppError::new(2, format!("Failed to initialize logging: {e}")))?;

    log::info!("logging to {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_logger() {
        assert!(!init(&Settings::default()).unwrap());
    }
}
