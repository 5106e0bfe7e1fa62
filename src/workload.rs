//! Random race inputs.
//!
//! A race hands one workload to both competitors, so everything here is
//! generated once per race from the arena's random source.

use rand::Rng;
use serde::Serialize;

use crate::config::{GRAPH_EDGE_CAP, GRAPH_NODE_CAP};
use crate::graph::Graph;
use crate::registry::Category;

/// Input of the dynamic programming family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DpWorkload {
    /// Problem size: the Fibonacci index and the knapsack item count
    pub size: usize,
    pub values: Vec<u64>,
    pub weights: Vec<u64>,
    pub capacity: u64,
}

/// Input shared by the two competitors of a race.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "data")]
pub enum Workload {
    Sorting(Vec<i64>),
    Graph(Graph),
    Dp(DpWorkload),
    /// Integer sequence for a category name nothing else claims
    Generic(Vec<i64>),
}

impl Workload {
    pub fn kind(&self) -> &'static str {
        match self {
            Workload::Sorting(_) => "sorting",
            Workload::Graph(_) => "graph",
            Workload::Dp(_) => "dp",
            Workload::Generic(_) => "generic",
        }
    }
}

/// Generate the workload of `category` for `size`.
///
/// - sorting: `size` integers in `[0, 10000)`
/// - pathfinding, mst: `min(size, 500)` nodes and `min(3 * nodes, 2000)`
///   random edges between distinct nodes, weights in `[1, 100]`
/// - dp: `size` item values in `[1, 100]` and weights in `[1, 50]`,
///   capacity `25 * size`
pub fn generate<R: Rng + ?Sized>(category: Category, size: usize, rng: &mut R) -> Workload {
    match category {
        Category::Sorting => Workload::Sorting(random_ints(rng, size, 10_000)),
        Category::Pathfinding | Category::Mst => Workload::Graph(race_graph(rng, size)),
        Category::Dp => Workload::Dp(DpWorkload {
            size,
            values: (0..size).map(|_| rng.random_range(1..=100)).collect(),
            weights: (0..size).map(|_| rng.random_range(1..=50)).collect(),
            capacity: size as u64 * 25,
        }),
    }
}

/// Like [`generate`] but keyed by category name; unknown names get a
/// generic sequence of integers in `[0, 1000)`.
pub fn generate_named<R: Rng + ?Sized>(name: &str, size: usize, rng: &mut R) -> Workload {
    match name.parse::<Category>() {
        Ok(category) => generate(category, size, rng),
        Err(_) => Workload::Generic(random_ints(rng, size, 1_000)),
    }
}

fn random_ints<R: Rng + ?Sized>(rng: &mut R, size: usize, bound: i64) -> Vec<i64> {
    (0..size).map(|_| rng.random_range(0..bound)).collect()
}

/// Sparse random graph. It may be disconnected and may repeat edges.
fn race_graph<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Graph {
    let nodes = size.min(GRAPH_NODE_CAP);
    let mut graph = Graph::with_nodes(nodes);
    if nodes < 2 {
        return graph;
    }

    let edges = (nodes * 3).min(GRAPH_EDGE_CAP);
    for _ in 0..edges {
        let source = rng.random_range(0..nodes);
        // Shift past `source` so the endpoints always differ
        let mut target = rng.random_range(0..nodes - 1);
        if target >= source {
            target += 1;
        }
        graph.add_edge(source, target, rng.random_range(1..=100));
    }
    graph
}
