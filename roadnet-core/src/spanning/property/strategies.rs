//! Map generators for spanning-subgraph properties.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::test_utils::{MapFixture, label, road};

/// How road lengths are drawn for a generated map.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightProfile {
    /// Lengths spread over a wide range, ties are rare.
    #[weight(2)]
    Spread,
    /// Lengths drawn from `{1, 2}` so most comparisons fall to the id.
    #[weight(2)]
    ManyIdentical,
    /// Every road has length zero.
    #[weight(1)]
    Flat,
}

impl WeightProfile {
    fn weights(self) -> std::ops::RangeInclusive<u64> {
        match self {
            Self::Spread => 1..=1_000,
            Self::ManyIdentical => 1..=2,
            Self::Flat => 0..=0,
        }
    }
}

/// A generated map together with the profile it was drawn from.
#[derive(Clone, Debug)]
pub(super) struct ProfiledMap {
    pub profile: WeightProfile,
    pub fixture: MapFixture,
}

/// Generates maps of up to `max_nodes` points and `max_roads` roads with ids
/// assigned in generation order.
pub(super) fn profiled_map_strategy(
    max_nodes: usize,
    max_roads: usize,
) -> impl Strategy<Value = ProfiledMap> {
    (any::<WeightProfile>(), 2..=max_nodes).prop_flat_map(move |(profile, node_count)| {
        prop::collection::vec(
            (0..node_count, 0..node_count, profile.weights()),
            0..=max_roads,
        )
        .prop_map(move |raw| {
            let roads = raw
                .into_iter()
                .zip(0_i64..)
                .map(|((source, target, weight), id)| {
                    road(&label(source), &label(target), weight, id)
                })
                .collect();
            ProfiledMap {
                profile,
                fixture: MapFixture { node_count, roads },
            }
        })
    })
}
