//! Nonlinear least-squares fit of a single relaxation model.
//!
//! Given:
//! - times `t_i` (ms)
//! - mean magnitudes `y_i`
//! - a model kind and a starting parameter vector
//!
//! we minimize `Σ (model(t_i; p) - y_i)²` with the Levenberg–Marquardt solver
//! (default settings, unweighted, no bounds), then estimate the covariance of
//! `p` from the Jacobian at the solution.

use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt};
use nalgebra::storage::Owned;
use nalgebra::{DMatrix, DVector, Dyn, OMatrix, U3, Vector3};

use crate::domain::{CURVE_POINTS, CleanedSeries, FitResult, ModelKind};
use crate::error::FitError;
use crate::fit::guess::initial_guess;
use crate::math::{linspace, parameter_covariance, standard_errors};
use crate::models::{fill_jacobian_row, predict};

/// Least-squares problem handed to the solver.
#[derive(Debug, Clone)]
struct RelaxationProblem {
    model: ModelKind,
    times: Vec<f64>,
    magnitudes: Vec<f64>,
    params: [f64; 3],
}

impl RelaxationProblem {
    fn residual_vec(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.times.len(),
            self.times
                .iter()
                .zip(&self.magnitudes)
                .map(|(&t, &y)| predict(self.model, t, &self.params) - y),
        )
    }

    fn jacobian_dmatrix(&self) -> DMatrix<f64> {
        let mut jac = DMatrix::<f64>::zeros(self.times.len(), 3);
        let mut row = [0.0; 3];
        for (i, &t) in self.times.iter().enumerate() {
            fill_jacobian_row(self.model, t, &self.params, &mut row);
            for j in 0..3 {
                jac[(i, j)] = row[j];
            }
        }
        jac
    }
}

impl LeastSquaresProblem<f64, Dyn, U3> for RelaxationProblem {
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, U3>;
    type ParameterStorage = Owned<f64, U3>;

    fn set_params(&mut self, p: &Vector3<f64>) {
        self.params = [p[0], p[1], p[2]];
    }

    fn params(&self) -> Vector3<f64> {
        Vector3::new(self.params[0], self.params[1], self.params[2])
    }

    fn residuals(&self) -> Option<DVector<f64>> {
        let r = self.residual_vec();
        r.iter().all(|v| v.is_finite()).then_some(r)
    }

    fn jacobian(&self) -> Option<OMatrix<f64, Dyn, U3>> {
        let jac = self.jacobian_dmatrix();
        if jac.iter().any(|v| !v.is_finite()) {
            return None;
        }
        Some(OMatrix::<f64, Dyn, U3>::from_fn_generic(
            Dyn(self.times.len()),
            U3,
            |i, j| jac[(i, j)],
        ))
    }
}

/// Fit `model` to the cleaned series using the standard starting point.
pub fn fit_model(model: ModelKind, series: &CleanedSeries) -> Result<FitResult, FitError> {
    if series.is_empty() {
        return Err(FitError::EmptySeries);
    }
    let times = series.times();
    let magnitudes = series.magnitudes();
    let p0 = initial_guess(model, &times, &magnitudes);
    fit_from_guess(model, &times, &magnitudes, p0)
}

/// Fit `model` starting from an explicit parameter vector.
pub fn fit_from_guess(
    model: ModelKind,
    times: &[f64],
    magnitudes: &[f64],
    p0: [f64; 3],
) -> Result<FitResult, FitError> {
    if times.is_empty() || times.len() != magnitudes.len() {
        return Err(FitError::EmptySeries);
    }

    log::debug!("{} start: {:?}", model.display_name(), p0);

    let problem = RelaxationProblem {
        model,
        times: times.to_vec(),
        magnitudes: magnitudes.to_vec(),
        params: p0,
    };
    if problem.residuals().is_none() {
        return Err(FitError::Divergence(
            "residuals are not finite at the initial guess".to_string(),
        ));
    }

    let (problem, report) = LevenbergMarquardt::new().minimize(problem);
    log::debug!(
        "{} solver: {:?} after {} evaluations",
        model.display_name(),
        report.termination,
        report.number_of_evaluations
    );

    if !report.termination.was_successful() {
        return Err(FitError::Divergence(format!(
            "optimal parameters not found ({:?})",
            report.termination
        )));
    }

    let params = problem.params;
    if params.iter().any(|v| !v.is_finite()) {
        return Err(FitError::Divergence("solver returned non-finite parameters".to_string()));
    }

    let sse = problem.residual_vec().norm_squared();
    let jac = problem.jacobian_dmatrix();
    let cov = parameter_covariance(&jac, sse).ok_or_else(|| {
        FitError::Divergence("covariance of the parameters could not be estimated".to_string())
    })?;
    let idx = model.decay_index();
    let decay_time_std = standard_errors(&cov)[idx];

    let t_max = times.iter().copied().filter(|t| t.is_finite()).fold(f64::NEG_INFINITY, f64::max);
    let curve = dense_curve(model, &params, t_max);

    log::info!(
        "{} fit: params={:?} std({})={:.6} sse={:.6e}",
        model.display_name(),
        params,
        model.param_names()[idx],
        decay_time_std,
        sse
    );

    Ok(FitResult {
        model,
        params,
        decay_time_std,
        curve,
        sse,
        evaluations: report.number_of_evaluations,
    })
}

/// Evaluate the fitted model on `CURVE_POINTS` evenly spaced times in `[0, t_max]`.
pub fn dense_curve(model: ModelKind, params: &[f64; 3], t_max: f64) -> Vec<(f64, f64)> {
    linspace(0.0, t_max, CURVE_POINTS)
        .into_iter()
        .map(|t| (t, predict(model, t, params)))
        .collect()
}
