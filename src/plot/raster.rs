//! Off-screen bitmap rendering for image export.
//!
//! Text goes through Plotters' `ab_glyph` backend with a bundled DejaVu Sans,
//! so exports look the same on every machine and need no system fonts.

use std::path::Path;
use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::ChartData;
use crate::error::AppError;

const FONT_FAMILY: &str = "sans-serif";
static FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Smallest image edge the renderer accepts.
pub const MIN_IMAGE_EDGE: u32 = 64;

pub const X_DESC: &str = "\u{03C4} in ms";
pub const Y_DESC: &str = "Magnitude";

/// Register the bundled font under the generic sans-serif family (once).
fn ensure_font() -> Result<(), AppError> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES).map_err(|_| "InvalidFont".to_string())
        })
        .clone()
        .map_err(|e| AppError::new(5, format!("Failed to load the chart font: {e}")))
}

/// Render `chart` into a tightly packed RGB8 buffer of `width * height` pixels.
pub fn render_rgb(chart: &ChartData, width: u32, height: u32) -> Result<Vec<u8>, AppError> {
    check_size(width, height)?;
    ensure_font()?;
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw_chart(chart, &root)
            .map_err(|e| AppError::new(5, format!("Failed to render chart: {e}")))?;
    }
    Ok(buf)
}

/// Render `chart` straight to an image file; the format follows the extension.
pub fn render_png(chart: &ChartData, path: &Path, width: u32, height: u32) -> Result<(), AppError> {
    check_size(width, height)?;
    ensure_font()?;
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    draw_chart(chart, &root).map_err(|e| {
        AppError::new(5, format!("Failed to write image {}: {e}", path.display()))
    })
}

fn check_size(width: u32, height: u32) -> Result<(), AppError> {
    if width < MIN_IMAGE_EDGE || height < MIN_IMAGE_EDGE {
        return Err(AppError::new(
            2,
            format!("Image size {width}x{height} is too small."),
        ));
    }
    Ok(())
}

/// Convert an RGB8 buffer to RGBA8 with full opacity.
pub fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgb.len() / 3 * 4);
    for px in rgb.chunks_exact(3) {
        out.extend_from_slice(px);
        out.push(u8::MAX);
    }
    out
}

fn draw_chart<DB>(
    chart: &ChartData,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let [x0, x1] = chart.x_bounds;
    let [y0, y1] = chart.y_bounds;
    let (width, height) = root.dim_in_pixel();

    root.fill(&WHITE)?;

    let edge = width.min(height);
    let title_size = (edge / 28).max(10);
    let label_size = (edge / 45).max(8);
    let margin = (edge / 40).max(4);

    // Title lines sit in their own strip above the chart.
    let title_lines: Vec<&str> = chart.title.lines().filter(|l| !l.trim().is_empty()).collect();
    let title_height = if title_lines.is_empty() {
        0
    } else {
        margin + title_lines.len() as u32 * (title_size + 4)
    };
    let (title_area, plot_area) = root.split_vertically(title_height as i32);
    let title_style = TextStyle::from((FONT_FAMILY, title_size).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, line) in title_lines.iter().enumerate() {
        let y = margin + i as u32 * (title_size + 4);
        title_area.draw_text(line, &title_style, ((width / 2) as i32, y as i32))?;
    }

    let mut ctx = ChartBuilder::on(&plot_area)
        .margin(margin as i32)
        .x_label_area_size((label_size * 3) as i32)
        .y_label_area_size((label_size * 5) as i32)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    let grid = RGBColor(220, 220, 220);
    ctx.configure_mesh()
        .light_line_style(WHITE)
        .bold_line_style(grid)
        .x_labels(6)
        .y_labels(6)
        .label_style((FONT_FAMILY, label_size).into_font().color(&BLACK))
        .axis_desc_style((FONT_FAMILY, label_size).into_font().color(&BLACK))
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .draw()?;

    let radius = (edge / 200).max(3) as i32;
    ctx.draw_series(
        chart
            .regular_points()
            .map(|p| Circle::new(p, radius, BLUE.filled())),
    )?;
    ctx.draw_series(
        chart
            .highlighted()
            .map(|p| Circle::new(p, radius + 1, RED.filled())),
    )?;

    let curve = ctx.draw_series(LineSeries::new(
        chart.curve.iter().copied(),
        BLACK.stroke_width(2),
    ))?;
    if !chart.legend.is_empty() {
        curve
            .label(chart.legend.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((FONT_FAMILY, label_size).into_font().color(&BLACK))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> ChartData {
        ChartData {
            points: vec![(0.0, 1.0), (5.0, 4.0), (10.0, 9.0)],
            selected: Some(2),
            curve: vec![(0.0, 1.0), (5.0, 4.5), (10.0, 9.0)],
            x_bounds: [-1.0, 11.0],
            y_bounds: [0.0, 10.0],
            title: "TEMPO\n[c] = 5 mM".to_string(),
            legend: "T1=1.00 s".to_string(),
        }
    }

    fn row_has_ink(rgb: &[u8], width: u32, row: u32) -> bool {
        let start = (row * width * 3) as usize;
        rgb[start..start + width as usize * 3]
            .chunks_exact(3)
            .any(|px| px != [255, 255, 255])
    }

    #[test]
    fn renders_a_full_buffer() {
        let rgb = render_rgb(&chart(), 400, 320).unwrap();
        assert_eq!(rgb.len(), 400 * 320 * 3);
        assert_eq!(&rgb[..3], &[255, 255, 255]);
        assert!(rgb.chunks_exact(3).any(|px| px == [255, 0, 0]));
        assert!(rgb.chunks_exact(3).any(|px| px == [0, 0, 255]));
    }

    #[test]
    fn title_text_is_drawn_above_the_chart() {
        let rgb = render_rgb(&chart(), 400, 320).unwrap();
        // Title strip: margin 8, two lines of 11 px type.
        assert!((8..34).any(|row| row_has_ink(&rgb, 400, row)));

        let mut untitled = chart();
        untitled.title.clear();
        assert_ne!(rgb, render_rgb(&untitled, 400, 320).unwrap());
    }

    #[test]
    fn legend_changes_the_image() {
        let with_legend = render_rgb(&chart(), 400, 320).unwrap();
        let mut bare = chart();
        bare.legend.clear();
        assert_ne!(with_legend, render_rgb(&bare, 400, 320).unwrap());
    }

    #[test]
    fn tiny_images_are_rejected() {
        assert_eq!(render_rgb(&chart(), 32, 32).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn rgba_adds_opaque_alpha() {
        assert_eq!(rgb_to_rgba(&[1, 2, 3, 4, 5, 6]), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
