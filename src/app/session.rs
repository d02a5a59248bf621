//! Per-window analysis state.
//!
//! A `Session` owns the last successful fit and the currently selected point.
//! It only changes when a solve succeeds, so an input error never wipes what
//! is already on screen.

use crate::app::pipeline::{FitOutcome, run_fit};
use crate::domain::ModelSelection;
use crate::error::FitError;
use crate::plot::nearest_point;

#[derive(Debug, Clone, Default)]
pub struct Session {
    outcome: Option<FitOutcome>,
    selected: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a fit and commit it on success.
    ///
    /// A successful solve replaces the previous outcome and clears the point
    /// selection. On error the session is left untouched.
    pub fn solve(&mut self, raw: &str, selection: ModelSelection) -> Result<&FitOutcome, FitError> {
        let outcome = run_fit(raw, selection)?;
        log::info!("{}", outcome.result_text);
        self.selected = None;
        Ok(self.outcome.insert(outcome))
    }

    pub fn outcome(&self) -> Option<&FitOutcome> {
        self.outcome.as_ref()
    }

    /// Index into the cleaned series of the selected point.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Source line (0-based) of the selected point.
    pub fn selected_line(&self) -> Option<usize> {
        let outcome = self.outcome.as_ref()?;
        let idx = self.selected?;
        outcome.series.points.get(idx).map(|p| p.row)
    }

    /// Select the plotted point closest to `(x, y)` in data coordinates.
    ///
    /// Returns the selected index, or `None` when nothing has been fitted yet.
    pub fn select_nearest(&mut self, x: f64, y: f64) -> Option<usize> {
        let outcome = self.outcome.as_ref()?;
        let idx = nearest_point(&outcome.scatter(), x, y)?;
        self.selected = Some(idx);
        Some(idx)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Forget everything ("new analysis").
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
