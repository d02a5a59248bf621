//! Reporting utilities: result text, legend labels and notices.

pub mod format;

pub use format::*;
