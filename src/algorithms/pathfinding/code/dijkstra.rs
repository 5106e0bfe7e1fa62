use super::{adjacency, initial_distances};
use crate::graph::{Distance, Graph};

/// Array-scan Dijkstra from node 0.
///
/// Each round picks the first unvisited node with the smallest finite
/// distance, so the loop ends as soon as nothing reachable is left.
/// Negative weights are not detected.
pub fn dijkstra(graph: &Graph) -> Vec<Distance> {
    let n = graph.node_count();
    let adj = adjacency(graph);
    let mut distances = initial_distances(n);
    let mut visited = vec![false; n];

    loop {
        let mut current = None;
        let mut smallest = Distance::Infinite;
        for (node, &d) in distances.iter().enumerate() {
            if !visited[node] && d < smallest {
                smallest = d;
                current = Some(node);
            }
        }
        let Some(u) = current else { break };
        visited[u] = true;

        for &(v, weight) in &adj[u] {
            let candidate = distances[u].extend(weight);
            if !visited[v] && candidate < distances[v] {
                distances[v] = candidate;
            }
        }
    }
    distances
}
