//! `t1t2-fit` library crate.
//!
//! Fits T1 (inversion recovery) and T2 (exponential decay) relaxation models
//! to pasted tabular measurements.
//!
//! The binary (`t1t2`) is a thin wrapper around this library so that:
//!
//! - parsing and fitting are testable without a terminal
//! - the terminal UI only deals with presentation

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod tui;
