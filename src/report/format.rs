//! Human-readable strings for fit results.
//!
//! We keep formatting code in one place so:
//! - the fitting code stays free of presentation concerns
//! - the decimal convention detected on input is applied consistently

use crate::domain::{CleanedSeries, DecimalStyle, FitResult, MS_PER_S};

/// Result line, e.g. `T1 = 0.50 ± 0.012 s`.
///
/// The decay time and its standard error are converted from ms to s.
pub fn format_result(fit: &FitResult, style: DecimalStyle) -> String {
    let value = format_decimal(fit.decay_time() / MS_PER_S, 2, style);
    let std = format_decimal(fit.decay_time_std / MS_PER_S, 3, style);
    format!("{} = {value} \u{00B1} {std} s", fit.model.display_name())
}

/// Legend entry for the fitted curve, e.g. `T2=0.30 s`.
pub fn legend_label(fit: &FitResult, style: DecimalStyle) -> String {
    let value = format_decimal(fit.decay_time() / MS_PER_S, 2, style);
    format!("{}={value} s", fit.model.display_name())
}

/// All three fitted parameters in input units (for the details line / logs).
pub fn format_parameters(fit: &FitResult, style: DecimalStyle) -> String {
    let names = fit.model.param_names();
    let parts: Vec<String> = names
        .iter()
        .zip(fit.params.iter())
        .map(|(name, v)| format!("{name}={}", format_decimal(*v, 4, style)))
        .collect();
    parts.join("  ")
}

/// Solver summary, e.g. `SSE=1.250e-3  evaluations=14`.
pub fn format_fit_quality(fit: &FitResult, style: DecimalStyle) -> String {
    let sse = format!("{:.3e}", fit.sse);
    let sse = match style {
        DecimalStyle::Period => sse,
        DecimalStyle::Comma => sse.replace('.', ","),
    };
    format!("SSE={sse}  evaluations={}", fit.evaluations)
}

/// Informational notice about excluded rows, if any were excluded.
pub fn exclusion_notice(series: &CleanedSeries) -> Option<String> {
    let n = series.excluded_rows.len();
    (n > 0).then(|| {
        format!("{n} rows with only 0 or NaN values were excluded from curve fitting.")
    })
}

/// Chart title built from the two free-text sample fields.
pub fn plot_title(compound: &str, concentration: &str) -> String {
    format!("{}\n[c] = {}", compound.trim(), concentration.trim())
}

/// Cursor read-out for the chart, `X: ---, Y: ---` when outside the plot.
pub fn format_coordinates(pos: Option<(f64, f64)>) -> String {
    match pos {
        Some((x, y)) => format!("X: {x:.2}, Y: {y:.2}"),
        None => "X: ---, Y: ---".to_string(),
    }
}

/// Fixed-point number with the requested decimal separator.
pub fn format_decimal(v: f64, decimals: usize, style: DecimalStyle) -> String {
    let s = format!("{v:.decimals$}");
    match style {
        DecimalStyle::Period => s,
        DecimalStyle::Comma => s.replace('.', ","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;

    fn fit(model: ModelKind, decay_ms: f64, std_ms: f64) -> FitResult {
        FitResult {
            model,
            params: [100.0, -1.0, decay_ms],
            decay_time_std: std_ms,
            curve: Vec::new(),
            sse: 0.0,
            evaluations: 0,
        }
    }

    #[test]
    fn result_is_shown_in_seconds() {
        let f = fit(ModelKind::T1, 1234.0, 56.0);
        assert_eq!(format_result(&f, DecimalStyle::Period), "T1 = 1.23 \u{00B1} 0.056 s");
        assert_eq!(legend_label(&f, DecimalStyle::Period), "T1=1.23 s");
    }

    #[test]
    fn comma_style_applies_to_value_and_error() {
        let f = fit(ModelKind::T2, 300.0, 4.6);
        assert_eq!(format_result(&f, DecimalStyle::Comma), "T2 = 0,30 \u{00B1} 0,005 s");
        assert_eq!(legend_label(&f, DecimalStyle::Comma), "T2=0,30 s");
    }

    #[test]
    fn parameters_are_listed_by_name() {
        let f = fit(ModelKind::T1, 500.0, 1.0);
        assert_eq!(
            format_parameters(&f, DecimalStyle::Period),
            "SI=100.0000  k=-1.0000  T1=500.0000"
        );
    }

    #[test]
    fn fit_quality_shows_sse_and_evaluations() {
        let mut f = fit(ModelKind::T2, 300.0, 1.0);
        f.sse = 0.00125;
        f.evaluations = 14;
        assert_eq!(format_fit_quality(&f, DecimalStyle::Period), "SSE=1.250e-3  evaluations=14");
        assert_eq!(format_fit_quality(&f, DecimalStyle::Comma), "SSE=1,250e-3  evaluations=14");
    }

    #[test]
    fn notice_only_when_rows_were_excluded() {
        let mut series = CleanedSeries::default();
        assert_eq!(exclusion_notice(&series), None);
        series.excluded_rows = vec![3, 7];
        assert_eq!(
            exclusion_notice(&series).as_deref(),
            Some("2 rows with only 0 or NaN values were excluded from curve fitting.")
        );
    }

    #[test]
    fn title_and_coordinates() {
        assert_eq!(plot_title(" TEMPO ", "5 mM"), "TEMPO\n[c] = 5 mM");
        assert_eq!(format_coordinates(Some((12.3456, 6.0))), "X: 12.35, Y: 6.00");
        assert_eq!(format_coordinates(None), "X: ---, Y: ---");
    }
}
