//! Runtime settings from the environment (and an optional `.env` file).
//!
//! | variable            | default | meaning                                  |
//! |---------------------|---------|------------------------------------------|
//! | `T1T2_EXPORT_DIR`   | `.`     | where "Save PNG" writes                   |
//! | `T1T2_IMAGE_WIDTH`  | `1000`  | exported image width in pixels            |
//! | `T1T2_IMAGE_HEIGHT` | `800`   | exported image height in pixels           |
//! | `T1T2_LOG_FILE`     | unset   | log file; logging is off when unset       |
//! | `T1T2_LOG`          | `info`  | `env_logger` filter                       |

use std::path::PathBuf;

use crate::error::AppError;
use crate::plot::MIN_IMAGE_EDGE;

pub const DEFAULT_IMAGE_WIDTH: u32 = 1000;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 800;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub export_dir: PathBuf,
    pub image_width: u32,
    pub image_height: u32,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Ok(Self {
            export_dir: get("T1T2_EXPORT_DIR").map(PathBuf::from).unwrap_or(defaults.export_dir),
            image_width: parse_dimension("T1T2_IMAGE_WIDTH", get("T1T2_IMAGE_WIDTH"))?
                .unwrap_or(defaults.image_width),
            image_height: parse_dimension("T1T2_IMAGE_HEIGHT", get("T1T2_IMAGE_HEIGHT"))?
                .unwrap_or(defaults.image_height),
            log_file: get("T1T2_LOG_FILE").map(PathBuf::from),
            log_filter: get("T1T2_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_dimension(key: &str, value: Option<String>) -> Result<Option<u32>, AppError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.parse::<u32>() {
        Ok(v) if (MIN_IMAGE_EDGE..=10_000).contains(&v) => Ok(Some(v)),
        _ => Err(AppError::new(
            2,
            format!("Invalid {key}='{raw}': expected a pixel count between {MIN_IMAGE_EDGE} and 10000."),
        )),
    }
}
