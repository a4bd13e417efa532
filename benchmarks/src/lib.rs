//! Benchmark utilities for salary-regression.
//!
//! - Synthetic salary tables of arbitrary size
//! - Timing helpers for the metrics collector

pub mod data;
pub mod timing;

pub use data::SyntheticSalaries;
pub use timing::{benchmark_fn, time_fn};
