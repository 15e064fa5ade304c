//! Barely connected maps via Prim's algorithm.
//!
//! Grows a minimum-weight tree outward from a root point. The frontier is a
//! min-heap of lanes ordered by `(weight, edge id)`, so whenever two roads of
//! equal length compete the lower id is accepted first. Accepted lanes are
//! mapped back to the road records they came from, which keeps original ids
//! and orientation intact in the result.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::{Span, debug, field, instrument};

use crate::graph::{Graph, Lane, NodeId};
use crate::road::{Road, Weight};

/// The roads of a minimum spanning tree (or forest component) of a map.
///
/// # Examples
/// ```
/// use roadnet_core::{EdgeId, Graph, Road, spanning_subgraph};
///
/// let graph = Graph::from_roads([
///     Road::new("A", "B", 5, EdgeId::new(1)),
///     Road::new("B", "C", 3, EdgeId::new(2)),
///     Road::new("A", "C", 10, EdgeId::new(3)),
/// ]);
/// let tree = spanning_subgraph(&graph, "A");
/// let ids: Vec<i64> = tree.roads().iter().map(|road| road.id().get()).collect();
/// assert_eq!(ids, [2, 1]);
/// assert_eq!(tree.total_weight(), 8);
/// assert_eq!(tree.reached_nodes(), 3);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpanningSubgraph {
    roads: Vec<Road>,
    reached: usize,
}

impl SpanningSubgraph {
    /// Returns the accepted roads sorted by `(weight, id)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn roads(&self) -> &[Road] { &self.roads }

    /// Returns the number of points connected by the subgraph, root included.
    ///
    /// Zero when the root is not a point of the graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn reached_nodes(&self) -> usize { self.reached }

    /// Returns the number of accepted roads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    /// Returns `true` when no road was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Sums the lengths of the accepted roads.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.roads
            .iter()
            .fold(0, |total: Weight, road| total.saturating_add(road.weight()))
    }

    /// Builds a fresh [`Graph`] containing only the accepted roads.
    #[must_use]
    pub fn to_graph(&self) -> Graph {
        Graph::from_roads(self.roads.iter().cloned())
    }

    /// Consumes the subgraph and returns its roads.
    #[must_use]
    pub fn into_roads(self) -> Vec<Road> {
        self.roads
    }
}

/// Frontier entry ordered by `(weight, edge id, destination)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct FrontierLane(Lane);

impl Ord for FrontierLane {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .weight()
            .cmp(&other.0.weight())
            .then_with(|| self.0.id().cmp(&other.0.id()))
            .then_with(|| self.0.destination().cmp(&other.0.destination()))
    }
}

impl PartialOrd for FrontierLane {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Frontier<'g> {
    graph: &'g Graph,
    visited: Vec<bool>,
    queue: BinaryHeap<Reverse<FrontierLane>>,
}

impl<'g> Frontier<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.node_count()],
            queue: BinaryHeap::new(),
        }
    }

    fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node.index()).copied().unwrap_or(true)
    }

    /// Marks `node` as part of the tree and queues its outgoing lanes.
    fn expand(&mut self, node: NodeId) {
        if let Some(flag) = self.visited.get_mut(node.index()) {
            *flag = true;
        }
        for lane in self.graph.lanes(node) {
            if !self.is_visited(lane.destination()) {
                self.queue.push(Reverse(FrontierLane(*lane)));
            }
        }
    }

    /// Pops the cheapest lane that still leads outside the tree.
    fn next_crossing(&mut self) -> Option<Lane> {
        while let Some(Reverse(FrontierLane(lane))) = self.queue.pop() {
            if !self.is_visited(lane.destination()) {
                return Some(lane);
            }
        }
        None
    }
}

/// Builds the barely connected map of `graph` rooted at `root`.
///
/// The result connects every point reachable from `root` with the least total
/// road length. Points in other components are never included. An unknown
/// root yields an empty subgraph.
#[instrument(
    name = "core.spanning_subgraph",
    skip(graph),
    fields(nodes = graph.node_count(), roads = field::Empty, weight = field::Empty),
)]
pub fn spanning_subgraph(graph: &Graph, root: &str) -> SpanningSubgraph {
    let Some(root_node) = graph.node(root) else {
        debug!("root is not a point of the graph");
        return SpanningSubgraph::default();
    };

    let target_edges = graph.node_count().saturating_sub(1);
    let mut frontier = Frontier::new(graph);
    let mut roads = Vec::with_capacity(target_edges);
    let mut accepted = 0_usize;
    frontier.expand(root_node);

    while accepted < target_edges {
        let Some(lane) = frontier.next_crossing() else {
            break;
        };
        accepted = accepted.saturating_add(1);
        frontier.expand(lane.destination());
        match graph.edge_by_id(lane.id()) {
            Some(road) => roads.push(road.clone()),
            None => debug!(id = %lane.id(), "accepted lane has no road record"),
        }
    }

    roads.sort_by_key(|road| (road.weight(), road.id()));

    let subgraph = SpanningSubgraph {
        roads,
        reached: accepted.saturating_add(1),
    };
    let span = Span::current();
    span.record("roads", subgraph.len());
    span.record("weight", subgraph.total_weight());
    subgraph
}

#[cfg(test)]
mod property;
