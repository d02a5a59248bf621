//! Shared "fit pipeline" logic used by the TUI and the exporters.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! raw text -> parse/clean -> model choice -> regression -> report strings
//!
//! Front-ends can then focus on presentation.

use crate::domain::{CleanedSeries, FitResult, ModelSelection};
use crate::error::FitError;
use crate::io::ingest::parse_measurements;
use crate::report::{
    exclusion_notice, format_fit_quality, format_parameters, format_result, legend_label,
};

/// All computed outputs of a single solve.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub series: CleanedSeries,
    pub fit: FitResult,
    /// `"<Model> = <value> ± <stderr> s"` in the input's decimal convention.
    pub result_text: String,
    /// Legend entry for the fitted curve.
    pub legend: String,
    /// All fitted parameters in input units, then SSE and solver evaluations.
    pub details: String,
    /// Set when rows were excluded for having no usable reading.
    pub notice: Option<String>,
}

impl FitOutcome {
    /// Scatter points `(time, magnitude)` in series order.
    pub fn scatter(&self) -> Vec<(f64, f64)> {
        self.series.points.iter().map(|p| (p.time, p.magnitude)).collect()
    }
}

/// Execute the full pipeline for one "Solve" request.
pub fn run_fit(raw: &str, selection: ModelSelection) -> Result<FitOutcome, FitError> {
    let series = parse_measurements(raw)?;
    let model = selection.resolve()?;
    if series.is_empty() {
        return Err(FitError::EmptySeries);
    }

    let fit = crate::fit::fit_model(model, &series)?;

    let style = series.decimal_style;
    Ok(FitOutcome {
        result_text: format_result(&fit, style),
        legend: legend_label(&fit, style),
        details: format!(
            "{}  {}",
            format_parameters(&fit, style),
            format_fit_quality(&fit, style)
        ),
        notice: exclusion_notice(&series),
        series,
        fit,
    })
}
