//! Image export sinks: PNG file and system clipboard.
//!
//! Both sinks render the same `ChartData` the TUI shows. Failures come back as
//! `AppError` so the front end can put them in its status line.

use std::borrow::Cow;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::domain::ModelKind;
use crate::error::AppError;
use crate::plot::{ChartData, render_png, render_rgb, rgb_to_rgba};

/// `<dir>/t1t2_<model>_<YYYYmmdd_HHMMSS>.png`
pub fn default_export_path(dir: &Path, model: ModelKind, at: DateTime<Local>) -> PathBuf {
    let ts = at.format("%Y%m%d_%H%M%S");
    let model = model.display_name().to_lowercase();
    dir.join(format!("t1t2_{model}_{ts}.png"))
}

/// Write the chart to `path` as a PNG, creating the parent directory if needed.
pub fn save_png(path: &Path, chart: &ChartData, width: u32, height: u32) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| {
            AppError::new(5, format!("Failed to create export dir '{}': {e}", parent.display()))
        })?;
    }
    render_png(chart, path, width, height)?;
    log::info!("saved chart to {}", path.display());
    Ok(())
}

/// Put the chart on the clipboard as a bitmap.
pub fn copy_to_clipboard(chart: &ChartData, width: u32, height: u32) -> Result<(), AppError> {
    let rgba = rgb_to_rgba(&render_rgb(chart, width, height)?);
    let image = arboard::ImageData {
        width: width as usize,
        height: height as usize,
        bytes: Cow::Owned(rgba),
    };

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| AppError::new(5, format!("Clipboard unavailable: {e}")))?;
    clipboard
        .set_image(image)
        .map_err(|e| AppError::new(5, format!("Failed to copy chart to clipboard: {e}")))?;
    log::info!("copied {width}x{height} chart to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn export_name_carries_model_and_timestamp() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let path = default_export_path(Path::new("out"), ModelKind::T2, at);
        assert_eq!(path, Path::new("out").join("t1t2_t2_20240309_140507.png"));
    }

    #[test]
    fn png_lands_on_disk() {
        let dir = std::env::temp_dir().join(format!("t1t2-export-{}", std::process::id()));
        let path = dir.join("nested").join("chart.png");
        let chart = ChartData {
            points: vec![(0.0, 1.0), (1.0, 0.5)],
            selected: None,
            curve: vec![(0.0, 1.0), (1.0, 0.5)],
            x_bounds: [0.0, 1.0],
            y_bounds: [0.0, 1.0],
            title: String::new(),
            legend: String::new(),
        };

        save_png(&path, &chart, 160, 120).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
