//! Undirected multigraph storage for road maps.
//!
//! Every road is stored once in insertion order and twice in the adjacency
//! store, as one [`Lane`] per travel direction. Lanes are plain values that
//! share the road's id and weight; nothing points back into the road list.
//! Point labels are interned into dense [`NodeId`]s in first-seen order, which
//! keeps every traversal over the graph deterministic.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::road::{EdgeId, Road, Weight};

/// Dense index of a point within one [`Graph`].
///
/// Ids are assigned in the order labels are first seen and are only
/// meaningful for the graph that issued them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One travel direction of a road.
///
/// Inserting road `(A, B, w, id)` yields the lane `A -> B` in `A`'s adjacency
/// list and the lane `B -> A` in `B`'s, both carrying `w` and `id`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Lane {
    from: NodeId,
    to: NodeId,
    weight: Weight,
    id: EdgeId,
}

impl Lane {
    /// Returns the point the lane leaves from.
    #[must_use]
    #[rustfmt::skip]
    pub fn origin(&self) -> NodeId { self.from }

    /// Returns the point the lane leads to.
    #[must_use]
    #[rustfmt::skip]
    pub fn destination(&self) -> NodeId { self.to }

    /// Returns the length of the underlying road.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }

    /// Returns the id of the underlying road.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> EdgeId { self.id }
}

/// How [`Graph::total_weight`] decides that two lanes describe the same road.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum WeightDedup {
    /// Count one road per unordered pair of endpoints.
    ///
    /// Parallel roads joining the same two points contribute only the weight
    /// of the first one encountered. This reproduces the historical report
    /// totals.
    #[default]
    EndpointPair,
    /// Count one road per distinct [`EdgeId`], so parallel roads are all
    /// included.
    EdgeId,
}

/// A weighted, undirected multigraph of points joined by roads.
///
/// # Examples
/// ```
/// use roadnet_core::{EdgeId, Graph, Road};
///
/// let mut graph = Graph::new();
/// graph.add_edge(Road::new("A", "B", 5, EdgeId::new(1)));
/// graph.add_edge(Road::new("B", "C", 3, EdgeId::new(2)));
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.total_distinct_weight(), 8);
/// assert_eq!(graph.edge_by_id(EdgeId::new(2)).map(|road| road.source()), Some("B"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    roads: Vec<Road>,
    road_index: HashMap<EdgeId, usize>,
    labels: Vec<Arc<str>>,
    nodes: HashMap<Arc<str>, NodeId>,
    adjacency: Vec<Vec<Lane>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh graph from `roads`, inserted in iteration order.
    ///
    /// Use this to derive a smaller topology from an existing one; the new
    /// graph shares nothing with the graph the roads came from.
    ///
    /// # Examples
    /// ```
    /// use roadnet_core::{EdgeId, Graph, Road};
    ///
    /// let graph = Graph::from_roads([
    ///     Road::new("A", "B", 4, EdgeId::new(7)),
    ///     Road::new("A", "B", 4, EdgeId::new(2)),
    /// ]);
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    #[must_use]
    pub fn from_roads(roads: impl IntoIterator<Item = Road>) -> Self {
        let mut graph = Self::new();
        for road in roads {
            graph.add_edge(road);
        }
        graph
    }

    /// Registers `road` and both of its lanes.
    ///
    /// Ids are not checked for uniqueness: adding two roads with the same id
    /// keeps both, and [`Self::edge_by_id`] keeps answering with the first.
    pub fn add_edge(&mut self, road: Road) {
        let from = self.intern(road.source_label());
        let to = self.intern(road.target_label());
        let weight = road.weight();
        let id = road.id();

        self.push_lane(Lane {
            from,
            to,
            weight,
            id,
        });
        self.push_lane(Lane {
            from: to,
            to: from,
            weight,
            id,
        });

        let position = self.roads.len();
        self.road_index.entry(id).or_insert(position);
        self.roads.push(road);
    }

    /// Returns the number of distinct points.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of roads as supplied, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.roads.len()
    }

    /// Returns `true` when no road has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Returns the roads in insertion order, with their original orientation.
    #[must_use]
    pub fn edges(&self) -> &[Road] {
        &self.roads
    }

    /// Looks up a point by label.
    #[must_use]
    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.nodes.get(label).copied()
    }

    /// Returns the label of `node`, or `None` for ids issued by another graph.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node.0).map(AsRef::as_ref)
    }

    pub(crate) fn label_arc(&self, node: NodeId) -> Option<&Arc<str>> {
        self.labels.get(node.0)
    }

    /// Returns the lanes leaving `node` in insertion order.
    ///
    /// Unknown nodes have no lanes.
    #[must_use]
    pub fn lanes(&self, node: NodeId) -> &[Lane] {
        self.adjacency.get(node.0).map_or(&[], Vec::as_slice)
    }

    /// Returns the first road added with `id`.
    #[must_use]
    pub fn edge_by_id(&self, id: EdgeId) -> Option<&Road> {
        self.road_index
            .get(&id)
            .and_then(|&position| self.roads.get(position))
    }

    /// Sums the length of every road once, deduplicating by endpoint pair.
    ///
    /// Equivalent to `total_weight(WeightDedup::EndpointPair)`.
    #[must_use]
    pub fn total_distinct_weight(&self) -> Weight {
        self.total_weight(WeightDedup::EndpointPair)
    }

    /// Sums the length of every road once under the given policy.
    ///
    /// # Examples
    /// ```
    /// use roadnet_core::{EdgeId, Graph, Road, WeightDedup};
    ///
    /// let graph = Graph::from_roads([
    ///     Road::new("A", "B", 5, EdgeId::new(1)),
    ///     Road::new("B", "A", 9, EdgeId::new(2)),
    /// ]);
    /// assert_eq!(graph.total_weight(WeightDedup::EndpointPair), 5);
    /// assert_eq!(graph.total_weight(WeightDedup::EdgeId), 14);
    /// ```
    #[must_use]
    pub fn total_weight(&self, dedup: WeightDedup) -> Weight {
        match dedup {
            WeightDedup::EndpointPair => self.total_by_endpoint_pair(),
            WeightDedup::EdgeId => self.total_by_edge_id(),
        }
    }

    fn total_by_endpoint_pair(&self) -> Weight {
        let mut seen = HashSet::new();
        self.adjacency
            .iter()
            .flatten()
            .filter(|lane| seen.insert(canonical_pair(lane.from, lane.to)))
            .fold(0, |total: Weight, lane| total.saturating_add(lane.weight))
    }

    fn total_by_edge_id(&self) -> Weight {
        let mut seen = HashSet::new();
        self.roads
            .iter()
            .filter(|road| seen.insert(road.id()))
            .fold(0, |total: Weight, road| total.saturating_add(road.weight()))
    }

    fn intern(&mut self, label: &Arc<str>) -> NodeId {
        if let Some(&node) = self.nodes.get(label.as_ref()) {
            return node;
        }
        let node = NodeId(self.labels.len());
        self.labels.push(Arc::clone(label));
        self.nodes.insert(Arc::clone(label), node);
        self.adjacency.push(Vec::new());
        node
    }

    fn push_lane(&mut self, lane: Lane) {
        if let Some(lanes) = self.adjacency.get_mut(lane.from.0) {
            lanes.push(lane);
        }
    }
}

fn canonical_pair(left: NodeId, right: NodeId) -> (NodeId, NodeId) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}
