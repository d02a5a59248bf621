//! Starting points for the solver.
//!
//! The solver is sensitive to where it starts, so these rules are fixed:
//!
//! - T1: `(max magnitude, -1, t_min / ln 2)` where `t_min` is the time of the
//!   smallest magnitude. For an inversion-recovery curve the magnitude is
//!   smallest at the zero crossing `T1 · ln 2`, so this places the model's null
//!   on the observed minimum.
//! - T2: `(-1, first magnitude, last magnitude)`.

use crate::domain::ModelKind;

/// Initial parameter vector for `model`.
///
/// `times` and `magnitudes` must have the same, non-zero length.
pub fn initial_guess(model: ModelKind, times: &[f64], magnitudes: &[f64]) -> [f64; 3] {
    match model {
        ModelKind::T1 => {
            let si = magnitudes
                .iter()
                .copied()
                .filter(|v| !v.is_nan())
                .fold(f64::NEG_INFINITY, f64::max);
            [si, -1.0, t1_time_guess(times, magnitudes)]
        }
        ModelKind::T2 => {
            let first = magnitudes.first().copied().unwrap_or(f64::NAN);
            let last = magnitudes.last().copied().unwrap_or(f64::NAN);
            [-1.0, first, last]
        }
    }
}

/// `-(1 / ln 0.5) · t` at the smallest magnitude.
///
/// NaN magnitudes count as `+∞`, so they are never the minimum. The first
/// occurrence wins on ties.
pub fn t1_time_guess(times: &[f64], magnitudes: &[f64]) -> f64 {
    let mut best_idx = 0usize;
    let mut best = f64::INFINITY;
    for (i, &m) in magnitudes.iter().enumerate() {
        let m = if m.is_nan() { f64::INFINITY } else { m };
        if m < best {
            best = m;
            best_idx = i;
        }
    }
    let t = times.get(best_idx).copied().unwrap_or(f64::NAN);
    -(1.0 / 0.5_f64.ln()) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t1_guess_uses_time_of_minimum() {
        let times = [0.0, 100.0, 200.0];
        let mags = [10.0, 2.0, 8.0];
        let expected = -(1.0 / 0.5_f64.ln()) * 100.0;
        assert_eq!(t1_time_guess(&times, &mags), expected);
        assert!((expected - 144.269_504_088_896_34).abs() < 1e-9);

        let guess = initial_guess(ModelKind::T1, &times, &mags);
        assert_eq!(guess, [10.0, -1.0, expected]);
    }

    #[test]
    fn t1_guess_never_picks_nan() {
        let times = [0.0, 100.0, 200.0];
        let mags = [f64::NAN, 5.0, 3.0];
        assert_eq!(t1_time_guess(&times, &mags), -(1.0 / 0.5_f64.ln()) * 200.0);
        assert_eq!(initial_guess(ModelKind::T1, &times, &mags)[0], 5.0);
    }

    #[test]
    fn t1_guess_first_minimum_wins() {
        let times = [10.0, 20.0, 30.0];
        let mags = [4.0, 1.0, 1.0];
        let guess = t1_time_guess(&times, &mags);
        assert!((guess - 20.0 / std::f64::consts::LN_2).abs() < 1e-9);
    }

    #[test]
    fn t2_guess_uses_first_and_last_magnitude() {
        let times = [0.0, 100.0, 200.0, 300.0];
        let mags = [55.0, 40.0, 30.0, 22.0];
        assert_eq!(initial_guess(ModelKind::T2, &times, &mags), [-1.0, 55.0, 22.0]);
    }
}
