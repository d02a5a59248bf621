//! Curve fitting.
//!
//! Responsibilities:
//!
//! - pick the solver's starting point for T1 / T2 (`guess`)
//! - run the Levenberg–Marquardt regression and estimate the decay-time
//!   standard error (`fitter`)
//! - sample the fitted model densely for plotting

pub mod fitter;
pub mod guess;

pub use fitter::*;
pub use guess::*;
