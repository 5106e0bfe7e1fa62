//! Minimum spanning tree implementations.
//!
//! Kruskal treats edges as undirected and returns a spanning forest on a
//! disconnected graph. Prim follows edge direction from node 0 and returns
//! the tree of what it can reach.

mod kruskal;
mod prim;

pub use kruskal::kruskal;
pub use prim::prim;

use crate::graph::{Edge, Graph};
use crate::registry::{AlgorithmInfo, Descriptor};

/// Type alias for spanning tree function signature
pub type MstFn = fn(&Graph) -> Vec<Edge>;

/// Sum of edge weights.
pub fn total_weight(edges: &[Edge]) -> i64 {
    edges.iter().map(|e| e.weight).sum()
}

/// All spanning tree variants, in catalog order
pub fn available_variants() -> Vec<AlgorithmInfo<MstFn>> {
    vec![
        AlgorithmInfo {
            descriptor: Descriptor {
                id: "kruskal",
                name: "Kruskal's Algorithm",
                complexity: "O(E log E)",
                space_complexity: "O(E + V)",
            },
            function: kruskal,
        },
        AlgorithmInfo {
            descriptor: Descriptor {
                id: "prim",
                name: "Prim's Algorithm",
                complexity: "O(E log V)",
                space_complexity: "O(V)",
            },
            function: prim,
        },
    ]
}
