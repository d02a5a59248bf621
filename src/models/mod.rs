//! T1 recovery / T2 decay model implementations.
//!
//! Models are implemented as small, pure functions so that the fitter and the
//! plotting code can stay generic over the model kind.

pub mod model;

pub use model::*;
