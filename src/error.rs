//! Error types.
//!
//! - `FitError`: why a single solve failed (library level, one variant per kind)
//! - `AppError`: anything the binary reports, carrying a process exit code

use thiserror::Error;

/// Failure of one parse + fit attempt.
///
/// Every variant aborts the attempt; nothing is committed to the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Text could not be turned into numeric rows, even after sanitization.
    #[error("Could not parse line {line}: '{field}' is not a number.")]
    Parse { line: usize, field: String },

    /// A non-blank row has no time value in its first column.
    #[error("Could not parse line {line}: missing time value.")]
    MissingTime { line: usize },

    /// Nothing but blank lines.
    #[error("No data to parse.")]
    NoData,

    #[error("Please select T1 or T2.")]
    NoModelSelected,

    /// Solver did not converge, or the parameter covariance is unavailable.
    #[error("Fit failed: {0}")]
    Divergence(String),

    #[error("All rows contain only 0 or NaN values; nothing left to fit.")]
    EmptySeries,
}

impl FitError {
    /// True for the variants that come from reading the pasted text.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            FitError::Parse { .. } | FitError::MissingTime { .. } | FitError::NoData
        )
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let exit_code = match err {
            FitError::Divergence(_) => 4,
            _ => 3,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_error_maps_to_exit_codes() {
        let parse: AppError = FitError::Parse { line: 2, field: "1.2.3".to_string() }.into();
        assert_eq!(parse.exit_code(), 3);
        assert_eq!(parse.to_string(), "Could not parse line 2: '1.2.3' is not a number.");

        let diverged: AppError = FitError::Divergence("lost patience".to_string()).into();
        assert_eq!(diverged.exit_code(), 4);
    }

    #[test]
    fn parse_kinds_are_flagged() {
        assert!(FitError::NoData.is_parse());
        assert!(FitError::MissingTime { line: 1 }.is_parse());
        assert!(!FitError::EmptySeries.is_parse());
        assert!(!FitError::NoModelSelected.is_parse());
    }
}
