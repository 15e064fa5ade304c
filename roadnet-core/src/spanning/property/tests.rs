//! Property runners for the barely connected map builder, plus unit tests for
//! the sequential oracle itself.

use std::collections::HashMap;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::graph::Graph;
use crate::road::{EdgeId, Road};
use crate::spanning::{SpanningSubgraph, spanning_subgraph};
use crate::test_utils::{label, road, suite_proptest_config};

use super::oracle::{find_root, sequential_kruskal};
use super::strategies::{ProfiledMap, profiled_map_strategy};

fn ids(subgraph: &SpanningSubgraph) -> Vec<EdgeId> {
    subgraph.roads().iter().map(Road::id).collect()
}

// ========================================================================
// Property 1: oracle equivalence
// ========================================================================

fn run_oracle_equivalence_property(map: &ProfiledMap) -> TestCaseResult {
    let roads = &map.fixture.roads;
    let root = label(0);
    let subgraph = spanning_subgraph(&Graph::from_roads(roads.clone()), &root);
    let expected = sequential_kruskal(roads, &root);

    prop_assert_eq!(
        subgraph.total_weight(),
        expected.total_weight,
        "weight mismatch for {:?} profile",
        map.profile,
    );
    prop_assert_eq!(subgraph.len(), expected.edge_count);
    prop_assert_eq!(subgraph.reached_nodes(), expected.component_size);
    if expected.component_size > 0 {
        prop_assert_eq!(subgraph.len(), expected.component_size - 1);
    }
    Ok(())
}

// ========================================================================
// Property 2: structural invariants
// ========================================================================

fn run_structural_invariants_property(map: &ProfiledMap) -> TestCaseResult {
    let root = label(0);
    let subgraph = spanning_subgraph(&Graph::from_roads(map.fixture.roads.clone()), &root);
    let roads = subgraph.roads();

    let keys: Vec<_> = roads.iter().map(|road| (road.weight(), road.id())).collect();
    prop_assert!(keys.is_sorted(), "roads not sorted by (weight, id): {:?}", keys);

    let mut indices: HashMap<&str, usize> = HashMap::from([(root.as_str(), 0)]);
    for road in roads {
        prop_assert_ne!(road.source(), road.target(), "self-loop accepted");
        for endpoint in [road.source(), road.target()] {
            let next = indices.len();
            indices.entry(endpoint).or_insert(next);
        }
    }

    let mut parent: Vec<usize> = (0..indices.len()).collect();
    for road in roads {
        let a = find_root(&mut parent, indices[road.source()]);
        let b = find_root(&mut parent, indices[road.target()]);
        prop_assert_ne!(a, b, "road {} closes a cycle", road);
        parent[a] = b;
    }

    let root_set = find_root(&mut parent, 0);
    for index in 0..indices.len() {
        prop_assert_eq!(
            find_root(&mut parent, index),
            root_set,
            "subgraph is not connected to the root",
        );
    }
    Ok(())
}

// ========================================================================
// Property 3: rebuilding is idempotent
// ========================================================================

fn run_idempotence_property(map: &ProfiledMap) -> TestCaseResult {
    let root = label(0);
    let first = spanning_subgraph(&Graph::from_roads(map.fixture.roads.clone()), &root);
    let second = spanning_subgraph(&first.to_graph(), &root);

    prop_assert_eq!(ids(&first), ids(&second));
    prop_assert_eq!(first.total_weight(), second.total_weight());
    Ok(())
}

fn shuffled_profiled_map_strategy() -> impl Strategy<Value = (ProfiledMap, Vec<Road>)> {
    profiled_map_strategy(8, 16).prop_flat_map(|map| {
        let shuffled = Just(map.fixture.roads.clone()).prop_shuffle();
        (Just(map), shuffled)
    })
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn spanning_subgraph_matches_kruskal(map in profiled_map_strategy(8, 16)) {
        run_oracle_equivalence_property(&map)?;
    }

    #[test]
    fn spanning_subgraph_is_a_tree(map in profiled_map_strategy(8, 16)) {
        run_structural_invariants_property(&map)?;
    }

    #[test]
    fn spanning_subgraph_is_idempotent(map in profiled_map_strategy(8, 16)) {
        run_idempotence_property(&map)?;
    }

    #[test]
    fn spanning_subgraph_ignores_insertion_order(
        (map, shuffled) in shuffled_profiled_map_strategy(),
    ) {
        let root = label(0);
        let original = spanning_subgraph(&Graph::from_roads(map.fixture.roads.clone()), &root);
        let reordered = spanning_subgraph(&Graph::from_roads(shuffled), &root);
        prop_assert_eq!(ids(&original), ids(&reordered));
    }
}

// ========================================================================
// Oracle unit tests
// ========================================================================

#[test]
fn oracle_picks_the_lighter_pair() {
    let roads = [road("A", "B", 5, 1), road("B", "C", 3, 2), road("A", "C", 10, 3)];
    let result = sequential_kruskal(&roads, "A");
    assert_eq!(result.total_weight, 8);
    assert_eq!(result.edge_count, 2);
    assert_eq!(result.component_size, 3);
}

#[test]
fn oracle_ignores_other_components() {
    let roads = [road("A", "B", 5, 1), road("C", "D", 1, 2)];
    let result = sequential_kruskal(&roads, "A");
    assert_eq!(result.total_weight, 5);
    assert_eq!(result.edge_count, 1);
    assert_eq!(result.component_size, 2);
}

#[test]
fn oracle_returns_empty_for_unknown_root() {
    let result = sequential_kruskal(&[road("A", "B", 5, 1)], "Z");
    assert_eq!(result.edge_count, 0);
    assert_eq!(result.component_size, 0);
}
