//! Chart data preparation and hit-testing.
//!
//! Everything here is backend-agnostic: the TUI widget and the raster exporter
//! both draw from a `ChartData`, and mouse positions are converted to data
//! coordinates before any hit-testing happens.

pub mod raster;

pub use raster::*;

use crate::app::pipeline::FitOutcome;

/// Relative padding added around the data range on each axis.
pub const BOUNDS_PAD: f64 = 0.05;

/// Render-ready description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Observed `(time, magnitude)` points in series order.
    pub points: Vec<(f64, f64)>,
    /// Index into `points` of the highlighted point.
    pub selected: Option<usize>,
    pub curve: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub title: String,
    pub legend: String,
}

impl ChartData {
    pub fn from_outcome(outcome: &FitOutcome, selected: Option<usize>) -> Self {
        let points = outcome.scatter();
        let curve = outcome.fit.curve.clone();
        let (x_bounds, y_bounds) = padded_bounds(&points, &curve);
        Self {
            selected: selected.filter(|&i| i < points.len()),
            points,
            curve,
            x_bounds,
            y_bounds,
            title: String::new(),
            legend: outcome.legend.clone(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The highlighted point, if any.
    pub fn highlighted(&self) -> Option<(f64, f64)> {
        self.selected.and_then(|i| self.points.get(i).copied())
    }

    /// Points that are not highlighted.
    pub fn regular_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != self.selected)
            .map(|(_, p)| *p)
    }
}

/// Index of the point closest to `(x, y)`.
///
/// Ties resolve to the lowest index; an empty slice yields `None`.
pub fn nearest_point(points: &[(f64, f64)], x: f64, y: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &(px, py)) in points.iter().enumerate() {
        let d2 = (px - x).powi(2) + (py - y).powi(2);
        if d2.is_nan() {
            continue;
        }
        match best {
            Some((_, bd)) if d2 >= bd => {}
            _ => best = Some((i, d2)),
        }
    }
    best.map(|(i, _)| i)
}

/// Axis bounds covering points and curve, padded on every side.
///
/// The x axis always includes 0 since the curve starts there.
pub fn padded_bounds(points: &[(f64, f64)], curve: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let (mut x_min, mut x_max) = (0.0_f64, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points.iter().chain(curve.iter()) {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    (pad_range(x_min, x_max), pad_range(y_min, y_max))
}

fn pad_range(lo: f64, hi: f64) -> [f64; 2] {
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    if hi <= lo {
        let half = if lo == 0.0 { 1.0 } else { lo.abs() * BOUNDS_PAD };
        return [lo - half, hi + half];
    }
    let pad = (hi - lo) * BOUNDS_PAD;
    [lo - pad, hi + pad]
}

/// Map a position inside the plot area to data coordinates.
///
/// `fx` runs left to right and `fy` top to bottom, both in `[0, 1]`.
/// Positions outside that square yield `None`.
pub fn fraction_to_data(fx: f64, fy: f64, x_bounds: [f64; 2], y_bounds: [f64; 2]) -> Option<(f64, f64)> {
    if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) {
        return None;
    }
    let x = x_bounds[0] + fx * (x_bounds[1] - x_bounds[0]);
    let y = y_bounds[1] - fy * (y_bounds[1] - y_bounds[0]);
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_point_picks_the_closest() {
        let pts = [(0.0, 0.0), (10.0, 10.0), (20.0, 5.0)];
        assert_eq!(nearest_point(&pts, 9.0, 9.0), Some(1));
        assert_eq!(nearest_point(&pts, 19.0, 4.0), Some(2));
        assert_eq!(nearest_point(&[], 1.0, 1.0), None);
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        let pts = [(0.0, 0.0), (2.0, 0.0), (1.0, 5.0)];
        assert_eq!(nearest_point(&pts, 1.0, 0.0), Some(0));
    }

    #[test]
    fn bounds_are_padded_and_start_at_zero() {
        let pts = [(100.0, 10.0), (500.0, 30.0)];
        let curve = [(0.0, 5.0), (500.0, 30.0)];
        let (x, y) = padded_bounds(&pts, &curve);
        assert_eq!(x, [-25.0, 525.0]);
        assert_eq!(y, [3.75, 31.25]);
    }

    #[test]
    fn degenerate_ranges_still_have_width() {
        let (x, y) = padded_bounds(&[(0.0, 7.0)], &[]);
        assert!(x[1] > x[0]);
        assert!(y[1] > y[0]);
        assert_eq!(padded_bounds(&[], &[]), ([0.0, 1.0], [0.0, 1.0]));
    }

    #[test]
    fn fractions_map_with_y_flipped() {
        let xb = [0.0, 100.0];
        let yb = [-10.0, 10.0];
        assert_eq!(fraction_to_data(0.0, 0.0, xb, yb), Some((0.0, 10.0)));
        assert_eq!(fraction_to_data(0.5, 1.0, xb, yb), Some((50.0, -10.0)));
        assert_eq!(fraction_to_data(1.2, 0.5, xb, yb), None);
    }

    #[test]
    fn highlighted_point_is_split_out() {
        let chart = ChartData {
            points: vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)],
            selected: Some(1),
            curve: Vec::new(),
            x_bounds: [0.0, 2.0],
            y_bounds: [0.0, 3.0],
            title: String::new(),
            legend: String::new(),
        };
        assert_eq!(chart.highlighted(), Some((1.0, 2.0)));
        assert_eq!(chart.regular_points().collect::<Vec<_>>(), vec![(0.0, 1.0), (2.0, 3.0)]);
    }
}
