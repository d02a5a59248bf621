//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads settings from the environment / `.env`
//! - installs the file logger
//! - hands control to the terminal UI

use crate::config::Settings;
use crate::error::AppError;

pub mod pipeline;
pub mod session;

/// Entry point for the `t1t2` binary.
pub fn run() -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    crate::logging::init(&settings)?;
    log::debug!("settings: {settings:?}");

    crate::tui::run(settings)
}
