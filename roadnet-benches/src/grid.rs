//! Synthetic road grids for benchmarking.
//!
//! Provides [`GridMap`], a [`RoadSource`] laid out as a rectangular lattice
//! with seeded random road lengths and a number of random shortcut roads.
//! Generation is deterministic for a given [`GridConfig`].

use rand::{Rng, SeedableRng, rngs::SmallRng};
use roadnet_core::{EdgeId, Road, RoadSource, Weight};

/// Errors that may occur during grid generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero.
    #[error("grid must have at least one row and one column")]
    Empty,
    /// The maximum road length was zero.
    #[error("maximum road length must be greater than zero")]
    ZeroMaxWeight,
}

/// Configuration for synthetic grid generation.
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Number of points per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Road lengths are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// Number of extra roads between random points.
    pub shortcuts: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A lattice-shaped road map whose route runs corner to corner.
///
/// # Examples
///
/// ```
/// use roadnet_benches::grid::{GridConfig, GridMap};
/// use roadnet_core::RoadSource;
///
/// let config = GridConfig { width: 3, height: 2, max_weight: 9, shortcuts: 1, seed: 7 };
/// let map = GridMap::generate(&config).expect("valid config");
/// assert_eq!(map.roads().len(), 8);
/// assert_eq!((map.start(), map.end()), ("r0c0", "r1c2"));
/// ```
#[derive(Clone, Debug)]
pub struct GridMap {
    start: String,
    end: String,
    roads: Vec<Road>,
}

impl GridMap {
    /// Generates a grid eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] when either dimension is zero and
    /// [`GridError::ZeroMaxWeight`] when `max_weight` is zero.
    pub fn generate(config: &GridConfig) -> Result<Self, GridError> {
        if config.width == 0 || config.height == 0 {
            return Err(GridError::Empty);
        }
        if config.max_weight == 0 {
            return Err(GridError::ZeroMaxWeight);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut roads = Vec::new();

        for row in 0..config.height {
            for col in 0..config.width {
                if col + 1 < config.width {
                    let weight = rng.gen_range(1..=config.max_weight);
                    push_road(&mut roads, label(row, col), label(row, col + 1), weight);
                }
                if row + 1 < config.height {
                    let weight = rng.gen_range(1..=config.max_weight);
                    push_road(&mut roads, label(row, col), label(row + 1, col), weight);
                }
            }
        }

        for _ in 0..config.shortcuts {
            let from = label(rng.gen_range(0..config.height), rng.gen_range(0..config.width));
            let to = label(rng.gen_range(0..config.height), rng.gen_range(0..config.width));
            let weight = rng.gen_range(1..=config.max_weight);
            push_road(&mut roads, from, to, weight);
        }

        Ok(Self {
            start: label(0, 0),
            end: label(config.height - 1, config.width - 1),
            roads,
        })
    }
}

impl RoadSource for GridMap {
    fn name(&self) -> &str {
        "grid"
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn end(&self) -> &str {
        &self.end
    }

    fn roads(&self) -> &[Road] {
        &self.roads
    }
}

/// Appends a road whose id is its position in `roads`.
fn push_road(roads: &mut Vec<Road>, from: String, to: String, weight: Weight) {
    let id = i64::try_from(roads.len()).unwrap_or(i64::MAX);
    roads.push(Road::new(from, to, weight, EdgeId::new(id)));
}

fn label(row: usize, col: usize) -> String {
    format!("r{row}c{col}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn config(width: usize, height: usize) -> GridConfig {
        GridConfig {
            width,
            height,
            max_weight: 10,
            shortcuts: 0,
            seed: 42,
        }
    }

    #[rstest]
    #[case(1, 1, 0)]
    #[case(2, 2, 4)]
    #[case(4, 3, 17)]
    fn lattice_has_expected_road_count(
        #[case] width: usize,
        #[case] height: usize,
        #[case] expected: usize,
    ) {
        let map = GridMap::generate(&config(width, height)).expect("valid config");
        assert_eq!(map.roads().len(), expected);
    }

    #[test]
    fn generation_is_deterministic() {
        let mut with_shortcuts = config(5, 5);
        with_shortcuts.shortcuts = 10;
        let first = GridMap::generate(&with_shortcuts).expect("valid config");
        let second = GridMap::generate(&with_shortcuts).expect("valid config");
        assert_eq!(first.roads(), second.roads());
    }

    #[test]
    fn shortcuts_extend_the_lattice_with_sequential_ids() {
        let mut with_shortcuts = config(2, 2);
        with_shortcuts.shortcuts = 3;
        let map = GridMap::generate(&with_shortcuts).expect("valid config");
        let ids: Vec<i64> = map.roads().iter().map(|road| road.id().get()).collect();
        assert_eq!(ids, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    #[case(0, 3, GridError::Empty)]
    #[case(3, 0, GridError::Empty)]
    fn rejects_empty_grids(#[case] width: usize, #[case] height: usize, #[case] expected: GridError) {
        assert_eq!(
            GridMap::generate(&config(width, height)).expect_err("empty grid"),
            expected
        );
    }

    #[test]
    fn rejects_zero_max_weight() {
        let mut zero = config(2, 2);
        zero.max_weight = 0;
        assert_eq!(
            GridMap::generate(&zero).expect_err("zero weight"),
            GridError::ZeroMaxWeight
        );
    }
}
