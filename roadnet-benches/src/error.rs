//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?`.

use crate::grid::GridError;
use roadnet_core::AnalysisError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic grid generation failed.
    #[error("synthetic grid generation failed: {0}")]
    Grid(#[from] GridError),
    /// Map analysis failed.
    #[error("map analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}
