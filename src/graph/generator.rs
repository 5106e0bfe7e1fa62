//! Random connected graphs for the step-trace visualizations.

use rand::Rng;

use super::{Graph, NodeId};

/// Create a random weighted directed graph whose underlying undirected graph
/// is connected.
///
/// Every ordered pair `(i, j)` with `i != j` receives an edge with
/// probability `density` (clamped to `[0, 1]`) and a weight in `[1, 10]`.
/// Afterwards every node `i >= 1` that touches no smaller id in either
/// direction is linked from a random earlier node.
pub fn create_random_graph(node_count: usize, density: f64) -> Graph {
    create_random_graph_with(&mut rand::rng(), node_count, density)
}

/// Same as [`create_random_graph`] with a caller-supplied random source.
pub fn create_random_graph_with<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    density: f64,
) -> Graph {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut graph = Graph::with_nodes(node_count);

    for i in 0..node_count {
        for j in 0..node_count {
            if i != j && rng.random_bool(density) {
                let weight = rng.random_range(1..=10);
                graph.add_edge(i, j, weight);
            }
        }
    }

    for i in 1..node_count {
        let linked_backwards = graph
            .edges
            .iter()
            .any(|e| (e.source == i && e.target < i) || (e.target == i && e.source < i));

        if !linked_backwards {
            let previous: NodeId = rng.random_range(0..i);
            let weight = rng.random_range(1..=10);
            graph.add_edge(previous, i, weight);
        }
    }

    graph
}
