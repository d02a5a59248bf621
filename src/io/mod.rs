//! Input/output helpers.
//!
//! - pasted-text ingest + cleaning (`ingest`)
//! - chart image exports (PNG file, clipboard) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
