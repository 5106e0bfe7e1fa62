//! Dijkstra's algorithm as a replayable step trace.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::graph::{Distance, Edge, Graph, NodeId};

/// One snapshot of Dijkstra's working state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DijkstraStep {
    /// Tentative distance of every node.
    pub distances: BTreeMap<NodeId, Distance>,
    /// Visited nodes in visit order.
    pub visited: Vec<NodeId>,
    /// Node settled in this step; `None` on the terminal step.
    pub current: Option<NodeId>,
    /// Edges that strictly lowered a tentative distance in this step.
    pub relaxed_edges: Vec<Edge>,
}

/// Run Dijkstra from `start` and record a step per settled node.
///
/// Step 0 is the initial state with `current = Some(start)`; the last step
/// always has `current = None`. The next node is the first unvisited node in
/// `graph.nodes` order whose tentative distance is finite and strictly
/// smaller than every node scanned before it. The search stops once no
/// unvisited node is reachable.
///
/// Edge weights must be non-negative for the distances to be shortest paths.
/// Negative weights are not detected.
///
/// # Example
/// ```
/// use algo_race::graph::{Distance, Graph};
/// use algo_race::trace::run_dijkstra;
///
/// let graph = Graph::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 1)]);
/// let steps = run_dijkstra(&graph, 0);
/// let last = steps.last().unwrap();
/// assert_eq!(last.visited, vec![0, 2, 1]);
/// assert_eq!(last.distances[&1], Distance::Finite(2));
/// ```
pub fn run_dijkstra(graph: &Graph, start: NodeId) -> Vec<DijkstraStep> {
    let mut steps = Vec::new();
    let mut distances: BTreeMap<NodeId, Distance> = graph
        .nodes
        .iter()
        .map(|n| {
            let d = if n.id == start {
                Distance::ZERO
            } else {
                Distance::Infinite
            };
            (n.id, d)
        })
        .collect();
    let mut visited: Vec<NodeId> = Vec::new();
    let mut unvisited: Vec<NodeId> = graph.nodes.iter().map(|n| n.id).collect();

    steps.push(DijkstraStep {
        distances: distances.clone(),
        visited: visited.clone(),
        current: Some(start),
        relaxed_edges: Vec::new(),
    });

    loop {
        let mut selected: Option<(usize, NodeId)> = None;
        let mut smallest = Distance::Infinite;
        for (pos, &node) in unvisited.iter().enumerate() {
            let d = distances[&node];
            if d < smallest {
                smallest = d;
                selected = Some((pos, node));
            }
        }

        let Some((pos, current)) = selected else {
            break;
        };
        unvisited.remove(pos);
        visited.push(current);

        let mut relaxed_edges = Vec::new();
        for edge in graph.outgoing(current) {
            let Some(&old) = distances.get(&edge.target) else {
                continue;
            };
            let tentative = smallest.extend(edge.weight);
            if tentative < old {
                distances.insert(edge.target, tentative);
                relaxed_edges.push(*edge);
            }
        }

        steps.push(DijkstraStep {
            distances: distances.clone(),
            visited: visited.clone(),
            current: Some(current),
            relaxed_edges,
        });
    }

    steps.push(DijkstraStep {
        distances,
        visited,
        current: None,
        relaxed_edges: Vec::new(),
    });

    steps
}
