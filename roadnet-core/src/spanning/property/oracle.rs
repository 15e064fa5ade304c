//! Sequential Kruskal oracle for spanning-subgraph verification.
//!
//! A simple, trusted implementation used as a reference in property tests.
//! Roads are sorted by `(weight, id)` exactly like the Prim frontier so that
//! total weights are directly comparable.

use std::collections::{HashMap, VecDeque};

use crate::road::{Road, Weight};

/// Result of the sequential Kruskal oracle restricted to one component.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the minimum spanning tree of the component.
    pub total_weight: Weight,
    /// Number of roads in that tree.
    pub edge_count: usize,
    /// Number of points in the component, root included.
    pub component_size: usize,
}

/// Computes the minimum spanning tree of the component containing `root`.
///
/// Returns an empty result when `root` is not an endpoint of any road.
pub(super) fn sequential_kruskal(roads: &[Road], root: &str) -> SequentialMstResult {
    let mut indices: HashMap<&str, usize> = HashMap::new();
    for road in roads {
        let next = indices.len();
        indices.entry(road.source()).or_insert(next);
        let next = indices.len();
        indices.entry(road.target()).or_insert(next);
    }

    let Some(&root_index) = indices.get(root) else {
        return SequentialMstResult {
            total_weight: 0,
            edge_count: 0,
            component_size: 0,
        };
    };

    let endpoints: Vec<(usize, usize)> = roads
        .iter()
        .map(|road| (indices[road.source()], indices[road.target()]))
        .collect();
    let component = component_of(indices.len(), &endpoints, root_index);

    let mut order: Vec<usize> = (0..roads.len())
        .filter(|&position| component[endpoints[position].0])
        .collect();
    order.sort_by_key(|&position| (roads[position].weight(), roads[position].id()));

    let mut parent: Vec<usize> = (0..indices.len()).collect();
    let mut rank: Vec<usize> = vec![0; indices.len()];
    let mut total_weight: Weight = 0;
    let mut edge_count = 0;

    for position in order {
        let (source, target) = endpoints[position];
        let ra = find_root(&mut parent, source);
        let rb = find_root(&mut parent, target);
        if ra != rb {
            union_by_rank(&mut parent, &mut rank, ra, rb);
            total_weight += roads[position].weight();
            edge_count += 1;
        }
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_size: component.iter().filter(|&&inside| inside).count(),
    }
}

/// Marks every point reachable from `root`.
fn component_of(node_count: usize, endpoints: &[(usize, usize)], root: usize) -> Vec<bool> {
    let mut adjacency = vec![Vec::new(); node_count];
    for &(source, target) in endpoints {
        adjacency[source].push(target);
        adjacency[target].push(source);
    }

    let mut inside = vec![false; node_count];
    inside[root] = true;
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        for &next in &adjacency[node] {
            if !inside[next] {
                inside[next] = true;
                queue.push_back(next);
            }
        }
    }
    inside
}

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Union by rank, breaking ties by smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (root, child) = match rank[a].cmp(&rank[b]) {
        std::cmp::Ordering::Greater => (a, b),
        std::cmp::Ordering::Less => (b, a),
        std::cmp::Ordering::Equal if a <= b => (a, b),
        std::cmp::Ordering::Equal => (b, a),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
