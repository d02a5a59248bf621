//! Model evaluation for T1 / T2.
//!
//! The fitter relies on two primitive operations:
//! - predict the signal at time `t` for a parameter vector (residuals/plots)
//! - fill a Jacobian row `∂signal/∂params` at time `t` (solver)
//!
//! Parameter vectors always have length 3, ordered as `ModelKind::param_names`.

use crate::domain::ModelKind;

/// Predict the signal at time `t`.
pub fn predict(model: ModelKind, t: f64, params: &[f64; 3]) -> f64 {
    match model {
        ModelKind::T1 => {
            let [si, k, t1] = *params;
            (si * (1.0 - (1.0 - k) * (-t / t1).exp())).abs()
        }
        ModelKind::T2 => {
            let [si0, si, t2] = *params;
            si0 * (-t / t2).exp() + si
        }
    }
}

/// Fill `out` with the partial derivatives of `predict` at time `t`.
///
/// For T1 the absolute value is differentiated through its sign; at the kink
/// (inner value exactly 0) the derivative of the positive branch is used.
pub fn fill_jacobian_row(model: ModelKind, t: f64, params: &[f64; 3], out: &mut [f64; 3]) {
    match model {
        ModelKind::T1 => {
            let [si, k, t1] = *params;
            let e = (-t / t1).exp();
            let inner = 1.0 - (1.0 - k) * e;
            let sign = if si * inner < 0.0 { -1.0 } else { 1.0 };
            out[0] = sign * inner;
            out[1] = sign * si * e;
            out[2] = sign * -si * (1.0 - k) * e * t / (t1 * t1);
        }
        ModelKind::T2 => {
            let [si0, _, t2] = *params;
            let e = (-t / t2).exp();
            out[0] = e;
            out[1] = 1.0;
            out[2] = si0 * e * t / (t2 * t2);
        }
    }
}
