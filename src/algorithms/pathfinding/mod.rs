//! # Shortest Paths
//!
//! Distances from node 0 to every node of a directed weighted graph.
//! Unreachable nodes are [`Distance::Infinite`].
//!
//! - **dijkstra**: `O(V²)` array scan, stops once nothing reachable is left
//! - **bellmanFord**: edge-list relaxation with early exit on a quiet pass
//! - **astar**: best-first search towards the last node with an id-distance
//!   heuristic

pub mod code;
pub mod test;

pub use code::*;

use crate::graph::{create_random_graph_with, Distance, Graph};
use crate::registry::{family_from, AlgorithmFamily, Category};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type PathfindingFamily = AlgorithmFamily<Graph, Vec<Distance>>;

/// Variants whose distances are upper bounds rather than exact values.
const UPPER_BOUND_VARIANTS: &[&str] = &["astar"];

/// Build the shortest path family
pub fn family() -> PathfindingFamily {
    family_from(Category::Pathfinding, available_variants())
}

/// Compare every member with Bellman-Ford on a seeded random graph.
pub fn verify(family: &PathfindingFamily) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(0xd157);
    let graph = create_random_graph_with(&mut rng, 40, 0.1);
    let expected = bellman_ford(&graph);

    for algo in family.all() {
        let result = algo.run(&graph);
        if result.len() != expected.len() {
            return Err(format!(
                "Variant '{}' returned {} distances, expected {}",
                algo.id(),
                result.len(),
                expected.len()
            ));
        }
        let upper_bound = UPPER_BOUND_VARIANTS.contains(&algo.id());
        for (node, (got, want)) in result.iter().zip(&expected).enumerate() {
            let ok = if upper_bound { got >= want } else { got == want };
            if !ok {
                return Err(format!(
                    "Variant '{}' failed verification at node {}: expected {}, got {}",
                    algo.id(),
                    node,
                    want,
                    got
                ));
            }
        }
    }
    Ok(())
}
