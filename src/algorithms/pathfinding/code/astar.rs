use super::{adjacency, initial_distances, SOURCE};
use crate::graph::{Distance, Graph, NodeId};

/// A* from node 0 towards the last node.
///
/// The heuristic is the id distance `|node - target|`. It is not admissible
/// on arbitrary graphs, so the returned g-scores (taken when the target is
/// popped) are path lengths that actually exist but not necessarily the
/// shortest ones.
pub fn astar(graph: &Graph) -> Vec<Distance> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    let target = n - 1;
    let heuristic = |node: NodeId| node.abs_diff(target) as i64;

    let adj = adjacency(graph);
    let mut g_score = initial_distances(n);
    let mut f_score = vec![Distance::Infinite; n];
    f_score[SOURCE] = Distance::Finite(heuristic(SOURCE));
    let mut in_open = vec![false; n];
    let mut open = vec![SOURCE];
    in_open[SOURCE] = true;

    while !open.is_empty() {
        let mut lowest = 0;
        for i in 1..open.len() {
            if f_score[open[i]] < f_score[open[lowest]] {
                lowest = i;
            }
        }
        let current = open[lowest];
        if current == target {
            break;
        }
        open.remove(lowest);
        in_open[current] = false;

        for &(neighbor, weight) in &adj[current] {
            let tentative = g_score[current].extend(weight);
            if tentative < g_score[neighbor] {
                g_score[neighbor] = tentative;
                f_score[neighbor] = tentative.extend(heuristic(neighbor));
                if !in_open[neighbor] {
                    in_open[neighbor] = true;
                    open.push(neighbor);
                }
            }
        }
    }
    g_score
}
