//! Core module tree: samples, statistics and the closed-form checks.

#[macro_use]
pub mod debug; // gated debug logging (FUEL_ALIGN_DEBUG=1 or --debug) provides debug_log! macro
pub mod check;
pub mod diagnostics;
pub mod error;
pub mod sample;
pub mod statistics;

pub use error::SampleError;
pub use sample::{CostKind, Sample, ScanResult};
