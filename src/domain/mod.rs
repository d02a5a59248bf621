//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - model choice (`ModelKind`, `ModelSelection`)
//! - parsed input (`RawSample`, `CleanedPoint`, `CleanedSeries`)
//! - fit outputs (`FitResult`)

pub mod types;

pub use types::*;
