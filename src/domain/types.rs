//! Shared domain types.
//!
//! Everything here is rebuilt from scratch on each solve; nothing is cached
//! between solves except what `Session` explicitly holds.

use crate::error::FitError;

/// Number of points in the dense curve drawn over the scatter.
pub const CURVE_POINTS: usize = 10_000;

/// Input time unit is milliseconds; results are shown in seconds.
pub const MS_PER_S: f64 = 1000.0;

/// Relaxation model to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// `|SI * (1 - (1-k) * exp(-t / T1))|`, params (SI, k, T1).
    T1,
    /// `SI0 * exp(-t / T2) + SI`, params (SI0, SI, T2).
    T2,
}

impl ModelKind {
    /// Label used in result text and legends.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::T1 => "T1",
            ModelKind::T2 => "T2",
        }
    }

    /// Parameter names in solver order.
    pub fn param_names(self) -> [&'static str; 3] {
        match self {
            ModelKind::T1 => ["SI", "k", "T1"],
            ModelKind::T2 => ["SI0", "SI", "T2"],
        }
    }

    /// Index of the decay-time parameter inside the parameter vector.
    pub fn decay_index(self) -> usize {
        2
    }
}

/// The two model check boxes, as the user left them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelSelection {
    pub t1: bool,
    pub t2: bool,
}

impl ModelSelection {
    pub fn only(kind: ModelKind) -> Self {
        match kind {
            ModelKind::T1 => Self { t1: true, t2: false },
            ModelKind::T2 => Self { t1: false, t2: true },
        }
    }

    /// Pick the model to fit. T1 wins when both boxes are ticked.
    pub fn resolve(self) -> Result<ModelKind, FitError> {
        if self.t1 {
            Ok(ModelKind::T1)
        } else if self.t2 {
            Ok(ModelKind::T2)
        } else {
            Err(FitError::NoModelSelected)
        }
    }
}

/// Decimal separator convention detected on input and mirrored on output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecimalStyle {
    #[default]
    Period,
    Comma,
}

/// One non-blank input row before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    /// 0-based line index in the pasted text.
    pub line: usize,
    pub time: f64,
    /// Replicate readings; missing readings (empty field or zero) are NaN.
    pub readings: Vec<f64>,
}

/// A retained observation used for fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleanedPoint {
    /// 0-based line index of the source row.
    pub row: usize,
    pub time: f64,
    /// Mean of the non-missing replicate readings.
    pub magnitude: f64,
}

/// Cleaner output: retained points in input order plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedSeries {
    pub points: Vec<CleanedPoint>,
    /// Source line indices of rows whose readings were all missing.
    pub excluded_rows: Vec<usize>,
    pub decimal_style: DecimalStyle,
    /// Number of non-blank rows read.
    pub rows_read: usize,
}

impl CleanedSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.magnitude).collect()
    }

    /// Largest observed time (the right end of the plotted curve).
    pub fn max_time(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.time)
            .filter(|t| t.is_finite())
            .reduce(f64::max)
    }
}

/// Output of one successful regression.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub model: ModelKind,
    /// Fitted parameters in `ModelKind::param_names` order (time unit: ms).
    pub params: [f64; 3],
    /// Standard error of the decay-time parameter (ms).
    pub decay_time_std: f64,
    /// Dense `(time, magnitude)` curve over `[0, max(time)]`.
    pub curve: Vec<(f64, f64)>,
    /// Sum of squared residuals at the solution.
    pub sse: f64,
    /// Objective evaluations the solver used.
    pub evaluations: usize,
}

impl FitResult {
    /// Fitted decay time (T1 or T2) in the input unit (ms).
    pub fn decay_time(&self) -> f64 {
        self.params[self.model.decay_index()]
    }
}
