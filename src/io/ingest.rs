//! Pasted-text ingest and cleaning.
//!
//! This module turns tab-separated text copied out of a spectrometer export or a
//! spreadsheet into a clean `(time, mean magnitude)` series that is safe to fit.
//!
//! Rules:
//! - **Decimal style** is decided once for the whole input: any comma means
//!   commas are decimal separators everywhere.
//! - **Sanitization** keeps only digits, `.`, `-`, tabs and newlines.
//! - **Replicates** (columns 1..N) are averaged; empty and zero readings are
//!   missing. Rows with no usable reading are excluded and reported.
//! - **Line numbers** are preserved so a plotted point maps back to its source
//!   line, even when blank lines are skipped.

use std::borrow::Cow;

use crate::domain::{CleanedPoint, CleanedSeries, DecimalStyle, RawSample};
use crate::error::FitError;

/// Parse and clean pasted measurement text.
pub fn parse_measurements(raw: &str) -> Result<CleanedSeries, FitError> {
    let decimal_style = detect_decimal_style(raw);
    let converted: Cow<'_, str> = match decimal_style {
        DecimalStyle::Comma => Cow::Owned(raw.replace(',', ".")),
        DecimalStyle::Period => Cow::Borrowed(raw),
    };
    let cleaned = sanitize(&converted);

    let samples = read_samples(&cleaned)?;
    if samples.is_empty() {
        return Err(FitError::NoData);
    }

    let mut points = Vec::with_capacity(samples.len());
    let mut excluded_rows = Vec::new();
    for sample in &samples {
        match row_mean(&sample.readings) {
            Some(magnitude) => points.push(CleanedPoint {
                row: sample.line,
                time: sample.time,
                magnitude,
            }),
            None => excluded_rows.push(sample.line),
        }
    }

    log::debug!(
        "parsed {} rows ({} retained, {} excluded, decimal={:?})",
        samples.len(),
        points.len(),
        excluded_rows.len(),
        decimal_style
    );

    Ok(CleanedSeries {
        points,
        excluded_rows,
        decimal_style,
        rows_read: samples.len(),
    })
}

/// Decide the decimal separator for the whole input.
///
/// Fields are tab-separated, so "a comma in any field of any row" is the same
/// as "a comma anywhere in the text".
pub fn detect_decimal_style(raw: &str) -> DecimalStyle {
    if raw.contains(',') {
        DecimalStyle::Comma
    } else {
        DecimalStyle::Period
    }
}

/// Drop every character that is not a digit, `.`, `-`, tab or newline.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '\t' | '\n'))
        .collect()
}

/// Split sanitized text into rows of numbers.
///
/// Lines whose fields are all empty are skipped but still counted, so
/// `RawSample::line` is the index of the line in the original text.
pub fn read_samples(cleaned: &str) -> Result<Vec<RawSample>, FitError> {
    let mut samples = Vec::new();

    for (idx, line) in cleaned.split('\n').enumerate() {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }

        let time_field = fields[0];
        if time_field.is_empty() {
            return Err(FitError::MissingTime { line: idx + 1 });
        }
        let time = parse_field(time_field, idx)?;

        let mut readings = Vec::with_capacity(fields.len().saturating_sub(1));
        for field in &fields[1..] {
            if field.is_empty() {
                readings.push(f64::NAN);
                continue;
            }
            let v = parse_field(field, idx)?;
            // A zero reading means "not measured".
            readings.push(if v == 0.0 { f64::NAN } else { v });
        }

        samples.push(RawSample {
            line: idx,
            time,
            readings,
        });
    }

    Ok(samples)
}

/// Mean of the usable (finite, non-zero) readings, or `None` if there are none.
pub fn row_mean(readings: &[f64]) -> Option<f64> {
    let (sum, n) = readings
        .iter()
        .filter(|v| v.is_finite() && **v != 0.0)
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}

fn parse_field(field: &str, line_idx: usize) -> Result<f64, FitError> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FitError::Parse {
            line: line_idx + 1,
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_nonzero_readings_are_all_retained() {
        let raw = "0\t10\n100\t8\n200\t6.5\n300\t5\n";
        let series = parse_measurements(raw).unwrap();
        assert_eq!(series.rows_read, 4);
        assert_eq!(series.len(), 4);
        assert!(series.excluded_rows.is_empty());
        assert_eq!(series.decimal_style, DecimalStyle::Period);
        assert_eq!(series.times(), vec![0.0, 100.0, 200.0, 300.0]);
        assert_eq!(series.magnitudes(), vec![10.0, 8.0, 6.5, 5.0]);
    }

    #[test]
    fn zero_only_row_is_excluded() {
        let raw = "0\t10\n100\t0\n200\t6";
        let series = parse_measurements(raw).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.excluded_rows, vec![1]);
        assert_eq!(series.points[1].row, 2);
    }

    #[test]
    fn zero_replicate_is_ignored_in_mean() {
        let raw = "50\t0\t4\n60\t2\t6";
        let series = parse_measurements(raw).unwrap();
        assert_eq!(series.magnitudes(), vec![4.0, 4.0]);
    }

    #[test]
    fn comma_decimals_parse_like_periods() {
        let comma = parse_measurements("1,5\t2,0").unwrap();
        let period = parse_measurements("1.5\t2.0").unwrap();
        assert_eq!(comma.points, period.points);
        assert_eq!(comma.decimal_style, DecimalStyle::Comma);
        assert_eq!(period.decimal_style, DecimalStyle::Period);
    }

    #[test]
    fn comma_anywhere_switches_the_whole_input() {
        // The comma only appears on the second row, but the first row is read
        // with the same convention.
        let series = parse_measurements("1.5\t2\n3\t4,25").unwrap();
        assert_eq!(series.decimal_style, DecimalStyle::Comma);
        assert_eq!(series.magnitudes(), vec![2.0, 4.25]);
    }

    #[test]
    fn sanitization_strips_units_and_carriage_returns() {
        let raw = "0 ms\t10 au\r\n100 ms\t8 au\r\n";
        let series = parse_measurements(raw).unwrap();
        assert_eq!(series.times(), vec![0.0, 100.0]);
        assert_eq!(series.magnitudes(), vec![10.0, 8.0]);
    }

    #[test]
    fn blank_lines_keep_source_line_numbers() {
        let raw = "\n0\t10\n\nheader only text\n300\t5";
        let series = parse_measurements(raw).unwrap();
        assert_eq!(series.rows_read, 2);
        let rows: Vec<usize> = series.points.iter().map(|p| p.row).collect();
        assert_eq!(rows, vec![1, 4]);
    }

    #[test]
    fn unsorted_input_is_kept_in_order() {
        let series = parse_measurements("300\t5\n0\t10\n100\t8").unwrap();
        assert_eq!(series.times(), vec![300.0, 0.0, 100.0]);
        assert_eq!(series.max_time(), Some(300.0));
    }

    #[test]
    fn malformed_number_is_a_parse_error() {
        let err = parse_measurements("0\t10\n100\t1.2.3").unwrap_err();
        assert_eq!(
            err,
            FitError::Parse {
                line: 2,
                field: "1.2.3".to_string()
            }
        );

        let err = parse_measurements("0\t10\n-\t5").unwrap_err();
        assert!(matches!(err, FitError::Parse { line: 2, .. }));
    }

    #[test]
    fn missing_time_is_a_parse_error() {
        let err = parse_measurements("0\t10\n\t5").unwrap_err();
        assert_eq!(err, FitError::MissingTime { line: 2 });
    }

    #[test]
    fn empty_text_is_no_data() {
        assert_eq!(parse_measurements("").unwrap_err(), FitError::NoData);
        assert_eq!(parse_measurements("\n\t\n  \n").unwrap_err(), FitError::NoData);
    }

    #[test]
    fn time_only_rows_are_excluded_not_rejected() {
        let series = parse_measurements("0\n100\t7\n200\t\t").unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.excluded_rows, vec![0, 2]);
    }

    #[test]
    fn row_mean_skips_missing_values() {
        assert_eq!(row_mean(&[f64::NAN, 2.0, 4.0]), Some(3.0));
        assert_eq!(row_mean(&[0.0, f64::NAN]), None);
        assert_eq!(row_mean(&[]), None);
        assert_eq!(row_mean(&[-2.0, 4.0]), Some(1.0));
    }
}
