//! Plotters-powered relaxation chart widget for Ratatui.
//!
//! The widget fills its whole area with the plotting region (no margins, no
//! label areas), so a terminal cell maps linearly onto the data bounds. Tick
//! labels are drawn separately with plain Ratatui text around it.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::plot::ChartData;

/// Minimum area (in cells) the chart needs to be drawn at all.
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

pub struct RelaxationChart<'a> {
    pub chart: &'a ChartData,
}

impl<'a> Widget for RelaxationChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let chart = self.chart;
        let [x0, x1] = chart.x_bounds;
        let [y0, y1] = chart.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut ctx = ChartBuilder::on(&root).build_cartesian_2d(x0..x1, y0..y1)?;

            let curve_color = RGBColor(0, 255, 255); // cyan
            let points_color = WHITE;
            let selected_color = RGBColor(255, 0, 0);

            ctx.draw_series(LineSeries::new(chart.curve.iter().copied(), &curve_color))?;

            // `Circle` radii are mapped incorrectly by the ratatui backend, so
            // points are single pixels.
            ctx.draw_series(chart.regular_points().map(|p| Pixel::new(p, points_color)))?;
            ctx.draw_series(chart.highlighted().map(|p| Pixel::new(p, selected_color)))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
