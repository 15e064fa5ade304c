//! Shared test utilities for `roadnet-core`.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use roadnet_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::road::{EdgeId, Road, Weight};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `ROADNET_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Shorthand for building a road in tests.
pub(crate) fn road(source: &str, target: &str, weight: Weight, id: i64) -> Road {
    Road::new(source, target, weight, EdgeId::new(id))
}

/// Label used for the `index`-th generated point.
pub(crate) fn label(index: usize) -> String {
    format!("P{index}")
}

/// Small random road map: a node count and roads with unique ids and
/// strictly positive weights.
#[derive(Clone, Debug)]
pub(crate) struct MapFixture {
    /// Number of points that may appear in the roads.
    pub node_count: usize,
    /// Generated roads, ids unique and assigned in generation order.
    pub roads: Vec<Road>,
}

/// Generates maps small enough for brute-force oracles.
///
/// Self-loops and parallel roads are allowed so both algorithms see the
/// multigraph shapes they must tolerate.
pub(crate) fn map_fixture_strategy(
    max_nodes: usize,
    max_roads: usize,
) -> impl Strategy<Value = MapFixture> {
    (2..=max_nodes).prop_flat_map(move |node_count| {
        prop::collection::vec((0..node_count, 0..node_count, 1..=20_u64), 0..=max_roads).prop_map(
            move |raw| {
                let roads = raw
                    .into_iter()
                    .zip(0_i64..)
                    .map(|((source, target, weight), id)| {
                        road(&label(source), &label(target), weight, id)
                    })
                    .collect();
                MapFixture { node_count, roads }
            },
        )
    })
}

/// Same as [`map_fixture_strategy`] but also yields a shuffled copy of the
/// roads, for order-independence checks.
pub(crate) fn shuffled_map_strategy(
    max_nodes: usize,
    max_roads: usize,
) -> impl Strategy<Value = (MapFixture, Vec<Road>)> {
    map_fixture_strategy(max_nodes, max_roads).prop_flat_map(|fixture| {
        let shuffled = Just(fixture.roads.clone()).prop_shuffle();
        (Just(fixture), shuffled)
    })
}
