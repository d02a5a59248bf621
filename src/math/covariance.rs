//! Parameter covariance from a least-squares Jacobian.
//!
//! For an unweighted fit with `n` observations and `p` parameters the usual
//! estimate is:
//!
//! ```text
//! cov = (JᵀJ)⁻¹ · SSE / (n - p)
//! ```
//!
//! We never form `JᵀJ` explicitly. With the thin SVD `J = U Σ Vᵀ`:
//!
//! ```text
//! (JᵀJ)⁻¹ = V Σ⁻² Vᵀ
//! ```
//!
//! which keeps the condition number at `κ(J)` instead of `κ(J)²`.

use nalgebra::{DMatrix, DVector};

/// Estimate the parameter covariance matrix.
///
/// Returns `None` when it cannot be estimated: too few observations
/// (`n <= p`), a rank-deficient Jacobian, or a non-finite result.
pub fn parameter_covariance(jacobian: &DMatrix<f64>, sse: f64) -> Option<DMatrix<f64>> {
    let (n, p) = jacobian.shape();
    if p == 0 || n <= p || !sse.is_finite() {
        return None;
    }
    if jacobian.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let svd = jacobian.clone().svd(false, true);
    let v_t = svd.v_t?;
    let s = &svd.singular_values;

    // Same cutoff LAPACK-style pseudo-inverses use for "numerically zero".
    let s_max = s.max();
    let tol = f64::EPSILON * n.max(p) as f64 * s_max;
    if s_max <= 0.0 || s.iter().any(|&v| v <= tol) {
        return None;
    }

    let inv_sq = DVector::from_iterator(s.len(), s.iter().map(|&v| 1.0 / (v * v)));
    let s_sq = sse / (n - p) as f64;
    let cov = v_t.transpose() * DMatrix::from_diagonal(&inv_sq) * &v_t * s_sq;

    if cov.iter().all(|v| v.is_finite()) {
        Some(cov)
    } else {
        None
    }
}

/// Standard errors (square roots of the covariance diagonal).
pub fn standard_errors(cov: &DMatrix<f64>) -> Vec<f64> {
    cov.diagonal().iter().map(|v| v.max(0.0).sqrt()).collect()
}
