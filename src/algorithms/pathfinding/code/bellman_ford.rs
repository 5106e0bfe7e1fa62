use super::initial_distances;
use crate::graph::{Distance, Graph};

/// Bellman-Ford from node 0: up to `V - 1` passes over the edge list,
/// stopping after the first pass that changes nothing.
pub fn bellman_ford(graph: &Graph) -> Vec<Distance> {
    let n = graph.node_count();
    let mut distances = initial_distances(n);

    for _ in 0..n.saturating_sub(1) {
        let mut relaxed = false;
        for edge in &graph.edges {
            let (Some(&from), Some(&to)) = (distances.get(edge.source), distances.get(edge.target))
            else {
                continue;
            };
            if from.is_finite() && from.extend(edge.weight) < to {
                distances[edge.target] = from.extend(edge.weight);
                relaxed = true;
            }
        }
        if !relaxed {
            break;
        }
    }
    distances
}
