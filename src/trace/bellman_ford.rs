//! Bellman-Ford as a replayable step trace, with negative-cycle detection.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::graph::{Distance, Edge, Graph, NodeId};

/// Outcome of the extra detection pass, attached to the final step only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleCheck {
    pub has_negative_cycle: bool,
    /// Edges that could still be relaxed after the main passes.
    pub negative_cycle_edges: Vec<Edge>,
}

/// One snapshot of Bellman-Ford's working state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BellmanFordStep {
    pub distances: BTreeMap<NodeId, Distance>,
    /// Pass index; `-1` for the initial state.
    pub iteration: isize,
    /// Edges relaxed during this pass.
    pub relaxed_edges: Vec<Edge>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub cycle_check: Option<CycleCheck>,
}

impl BellmanFordStep {
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle_check
            .as_ref()
            .is_some_and(|check| check.has_negative_cycle)
    }
}

/// Whether `edge` can lower its target's distance.
fn relaxable(distances: &BTreeMap<NodeId, Distance>, edge: &Edge) -> Option<Distance> {
    let from = *distances.get(&edge.source)?;
    let to = *distances.get(&edge.target)?;
    if !from.is_finite() {
        return None;
    }
    let candidate = from.extend(edge.weight);
    (candidate < to).then_some(candidate)
}

/// Run Bellman-Ford from `start`, one step per relaxation pass.
///
/// Performs at most `|V| - 1` passes over all edges and stops after the
/// first pass (other than pass 0) that relaxes nothing. A final detection
/// pass looks for edges that are still relaxable; it does not update
/// distances. The last step carries the [`CycleCheck`] and reports
/// `iteration = |V| - 1`.
pub fn run_bellman_ford(graph: &Graph, start: NodeId) -> Vec<BellmanFordStep> {
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

    steps.push(BellmanFordStep {
        distances: distances.clone(),
        iteration: -1,
        relaxed_edges: Vec::new(),
        cycle_check: None,
    });

    let passes = graph.node_count().saturating_sub(1);
    for pass in 0..passes {
        let mut relaxed_edges = Vec::new();
        for edge in &graph.edges {
            if let Some(candidate) = relaxable(&distances, edge) {
                distances.insert(edge.target, candidate);
                relaxed_edges.push(*edge);
            }
        }

        let quiet = relaxed_edges.is_empty();
        steps.push(BellmanFordStep {
            distances: distances.clone(),
            iteration: pass as isize,
            relaxed_edges,
            cycle_check: None,
        });

        if quiet && pass > 0 {
            break;
        }
    }

    let negative_cycle_edges: Vec<Edge> = graph
        .edges
        .iter()
        .filter(|edge| relaxable(&distances, edge).is_some())
        .copied()
        .collect();

    steps.push(BellmanFordStep {
        distances,
        iteration: passes as isize,
        relaxed_edges: Vec::new(),
        cycle_check: Some(CycleCheck {
            has_negative_cycle: !negative_cycle_edges.is_empty(),
            negative_cycle_edges,
        }),
    });

    steps
}
