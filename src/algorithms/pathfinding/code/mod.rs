//! Single-source shortest path implementations.
//!
//! All variants start from node 0 and index nodes by position, so they
//! assume [`Graph::has_sequential_ids`](crate::graph::Graph::has_sequential_ids).
//! Edges pointing outside `0..node_count` are ignored.

mod astar;
mod bellman_ford;
mod dijkstra;

pub use astar::astar;
pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;

use crate::graph::{Distance, Graph, NodeId};
use crate::registry::{AlgorithmInfo, Descriptor};

/// Type alias for shortest path function signature
pub type PathFn = fn(&Graph) -> Vec<Distance>;

/// Source node of every benchmark run.
pub const SOURCE: NodeId = 0;

/// Outgoing `(target, weight)` lists indexed by node, in edge order.
pub(crate) fn adjacency(graph: &Graph) -> Vec<Vec<(NodeId, i64)>> {
    let n = graph.node_count();
    let mut adj = vec![Vec::new(); n];
    for edge in &graph.edges {
        if edge.source < n && edge.target < n {
            adj[edge.source].push((edge.target, edge.weight));
        }
    }
    adj
}

/// Distances with only the source at zero.
pub(crate) fn initial_distances(n: usize) -> Vec<Distance> {
    let mut distances = vec![Distance::Infinite; n];
    if let Some(d) = distances.get_mut(SOURCE) {
        *d = Distance::ZERO;
    }
    distances
}

fn variant(
    id: &'static str,
    name: &'static str,
    complexity: &'static str,
    space_complexity: &'static str,
    function: PathFn,
) -> AlgorithmInfo<PathFn> {
    AlgorithmInfo {
        descriptor: Descriptor {
            id,
            name,
            complexity,
            space_complexity,
        },
        function,
    }
}

/// All shortest path variants, in catalog order
pub fn available_variants() -> Vec<AlgorithmInfo<PathFn>> {
    vec![
        variant("dijkstra", "Dijkstra's Algorithm", "O(E + V log V)", "O(V)", dijkstra),
        variant("bellmanFord", "Bellman-Ford Algorithm", "O(V × E)", "O(V)", bellman_ford),
        variant("astar", "A* Algorithm", "O(E)", "O(V)", astar),
    ]
}
