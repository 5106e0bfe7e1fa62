//! # Minimum Spanning Trees
//!
//! Kruskal (sorted edges plus union-find, direction ignored) and Prim (grown
//! from node 0 along outgoing edges). On a graph that lists every edge in
//! both directions the two reach the same total weight even when they pick
//! different edges.

pub mod code;
pub mod test;

pub use code::*;

use crate::graph::{create_random_graph_with, Edge, Graph};
use crate::registry::{family_from, AlgorithmFamily, Category};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type MstFamily = AlgorithmFamily<Graph, Vec<Edge>>;

/// Build the spanning tree family
pub fn family() -> MstFamily {
    family_from(Category::Mst, available_variants())
}

/// Mirror every edge so that outgoing edges alone connect the graph.
pub fn symmetric(graph: &Graph) -> Graph {
    let mut both = Graph::with_nodes(graph.node_count());
    for edge in &graph.edges {
        both.add_edge(edge.source, edge.target, edge.weight);
        both.add_edge(edge.target, edge.source, edge.weight);
    }
    both
}

/// Check that every member spans a connected random graph with the same
/// total weight, using only edges of that graph.
pub fn verify(family: &MstFamily) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(0x7ee);
    // The generator links every node to an earlier one, so the graph is
    // weakly connected; mirroring makes it strongly connected
    let graph = symmetric(&create_random_graph_with(&mut rng, 40, 0.08));
    let expected = total_weight(&kruskal(&graph));

    for algo in family.all() {
        let tree = algo.run(&graph);
        if let Some(edge) = tree.iter().find(|e| !graph.edges.contains(e)) {
            return Err(format!(
                "Variant '{}' returned edge {:?} which is not in the graph",
                algo.id(),
                edge
            ));
        }
        if tree.len() != graph.node_count() - 1 {
            return Err(format!(
                "Variant '{}' returned {} edges for {} nodes",
                algo.id(),
                tree.len(),
                graph.node_count()
            ));
        }
        let weight = total_weight(&tree);
        if weight != expected {
            return Err(format!(
                "Variant '{}' failed verification. Expected weight {}, got {}",
                algo.id(),
                expected,
                weight
            ));
        }
    }
    Ok(())
}
