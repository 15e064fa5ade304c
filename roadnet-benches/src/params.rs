//! Benchmark parameter types.

use std::fmt;

use roadnet_core::Weight;

use crate::grid::GridConfig;

/// Dimensions of a grid benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GridBenchParams {
    /// Number of points per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Number of random shortcut roads laid over the lattice.
    pub shortcuts: usize,
}

impl GridBenchParams {
    /// Builds the generator configuration for these dimensions.
    #[must_use]
    pub const fn grid_config(&self, max_weight: Weight, seed: u64) -> GridConfig {
        GridConfig {
            width: self.width,
            height: self.height,
            max_weight,
            shortcuts: self.shortcuts,
            seed,
        }
    }
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
