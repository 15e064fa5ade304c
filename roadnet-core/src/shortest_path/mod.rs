//! Deterministic single-pair shortest routes.
//!
//! A Dijkstra relaxation over the lanes of a [`Graph`]. The frontier is a
//! min-heap ordered by `(cumulative distance, edge id)`, and an equal-distance
//! relaxation replaces the recorded predecessor only when it arrives over a
//! road with a lower id. Together these make the chosen route independent of
//! the order in which roads were inserted.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::Arc;

use tracing::{Span, debug, field, instrument};

use crate::graph::{Graph, Lane, NodeId};
use crate::road::{EdgeId, Road, Weight};

/// One road travelled along a [`Route`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteHop {
    road: Road,
    from: Arc<str>,
    to: Arc<str>,
    cumulative: Weight,
}

impl RouteHop {
    /// Returns the road as originally recorded, which may point against the
    /// direction of travel.
    #[must_use]
    #[rustfmt::skip]
    pub fn road(&self) -> &Road { &self.road }

    /// Returns the point this hop leaves from.
    #[must_use]
    #[rustfmt::skip]
    pub fn origin(&self) -> &str { &self.from }

    /// Returns the point this hop arrives at.
    #[must_use]
    #[rustfmt::skip]
    pub fn destination(&self) -> &str { &self.to }

    /// Returns the distance from the route start to the end of this hop.
    #[must_use]
    #[rustfmt::skip]
    pub fn cumulative(&self) -> Weight { self.cumulative }
}

/// An ordered sequence of hops from a start point to an end point.
///
/// An empty route means no travel is needed or possible: the points are equal,
/// unknown, or disconnected.
///
/// # Examples
/// ```
/// use roadnet_core::{EdgeId, Graph, Road, shortest_path};
///
/// let graph = Graph::from_roads([
///     Road::new("A", "B", 5, EdgeId::new(1)),
///     Road::new("B", "C", 3, EdgeId::new(2)),
///     Road::new("A", "C", 10, EdgeId::new(3)),
/// ]);
/// let route = shortest_path(&graph, "A", "C");
/// assert_eq!(route.total_distance(), 8);
/// let legs: Vec<(i64, u64)> = route
///     .legs()
///     .map(|(hop, distance)| (hop.road().id().get(), distance))
///     .collect();
/// assert_eq!(legs, [(1, 5), (2, 3)]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Route {
    hops: Vec<RouteHop>,
}

impl Route {
    /// Returns the hops in travel order.
    #[must_use]
    #[rustfmt::skip]
    pub fn hops(&self) -> &[RouteHop] { &self.hops }

    /// Returns the number of hops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Returns `true` when the route has no hops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Returns the length of the whole route, or zero for an empty route.
    #[must_use]
    pub fn total_distance(&self) -> Weight {
        self.hops.last().map_or(0, RouteHop::cumulative)
    }

    /// Iterates hops together with the distance covered by each one alone.
    pub fn legs(&self) -> impl Iterator<Item = (&RouteHop, Weight)> + '_ {
        self.hops.iter().scan(0, |previous: &mut Weight, hop| {
            let leg = hop.cumulative.saturating_sub(*previous);
            *previous = hop.cumulative;
            Some((hop, leg))
        })
    }
}

/// Frontier entry ordered by `(distance, edge, node)`.
///
/// The seed entry carries no edge and therefore sorts before any real road at
/// the same distance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Candidate {
    distance: Weight,
    edge: Option<EdgeId>,
    node: NodeId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.edge.cmp(&other.edge))
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best known way into a node.
#[derive(Clone, Copy, Debug)]
struct Predecessor {
    lane: Lane,
    distance: Weight,
}

impl Predecessor {
    fn is_improved_by(&self, distance: Weight, edge: EdgeId) -> bool {
        distance < self.distance || (distance == self.distance && edge < self.lane.id())
    }
}

/// Computes the shortest route from `start` to `end`.
///
/// Returns an empty [`Route`] when `start == end`, when either label is not a
/// point of `graph`, or when `end` cannot be reached.
#[instrument(
    name = "core.shortest_path",
    skip(graph),
    fields(nodes = graph.node_count(), hops = field::Empty, distance = field::Empty),
)]
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Route {
    let (Some(source), Some(target)) = (graph.node(start), graph.node(end)) else {
        debug!("start or end is not a point of the graph");
        return Route::default();
    };

    let predecessors = relax_from(graph, source);
    let route = reconstruct(graph, &predecessors, source, target);

    let span = Span::current();
    span.record("hops", route.len());
    span.record("distance", route.total_distance());
    route
}

fn relax_from(graph: &Graph, source: NodeId) -> Vec<Option<Predecessor>> {
    let node_count = graph.node_count();
    let mut predecessors: Vec<Option<Predecessor>> = vec![None; node_count];
    let mut finalized = vec![false; node_count];
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(Candidate {
        distance: 0,
        edge: None,
        node: source,
    }));

    while let Some(Reverse(current)) = frontier.pop() {
        match finalized.get_mut(current.node.index()) {
            Some(done) if !*done => *done = true,
            _ => continue,
        }

        for lane in graph.lanes(current.node) {
            let next = lane.destination();
            if finalized.get(next.index()).copied().unwrap_or(true) {
                continue;
            }
            let distance = current.distance.saturating_add(lane.weight());
            let Some(slot) = predecessors.get_mut(next.index()) else {
                continue;
            };
            let improves = slot
                .as_ref()
                .is_none_or(|best| best.is_improved_by(distance, lane.id()));
            if improves {
                *slot = Some(Predecessor {
                    lane: *lane,
                    distance,
                });
                frontier.push(Reverse(Candidate {
                    distance,
                    edge: Some(lane.id()),
                    node: next,
                }));
            }
        }
    }

    predecessors
}

fn reconstruct(
    graph: &Graph,
    predecessors: &[Option<Predecessor>],
    source: NodeId,
    target: NodeId,
) -> Route {
    let mut hops = Vec::new();
    let mut cursor = target;

    while cursor != source {
        // A predecessor chain never revisits a node, so it cannot be longer
        // than the node count.
        if hops.len() >= graph.node_count() {
            return Route::default();
        }
        let Some(step) = predecessors.get(cursor.index()).copied().flatten() else {
            return Route::default();
        };
        let Some(hop) = hop_for(graph, step) else {
            return Route::default();
        };
        hops.push(hop);
        cursor = step.lane.origin();
    }

    hops.reverse();
    Route { hops }
}

fn hop_for(graph: &Graph, step: Predecessor) -> Option<RouteHop> {
    let from = Arc::clone(graph.label_arc(step.lane.origin())?);
    let to = Arc::clone(graph.label_arc(step.lane.destination())?);
    let road = graph.edge_by_id(step.lane.id()).cloned().unwrap_or_else(|| {
        Road::new(
            Arc::clone(&from),
            Arc::clone(&to),
            step.lane.weight(),
            step.lane.id(),
        )
    });
    Some(RouteHop {
        road,
        from,
        to,
        cumulative: step.distance,
    })
}
