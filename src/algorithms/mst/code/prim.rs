use crate::graph::{Edge, Graph};

/// Prim's algorithm grown from node 0 along outgoing edges.
///
/// Every round scans the edge list for the lightest edge leading from the
/// tree to a node outside it (first one wins on equal weight). Every edge
/// returned is an edge of `graph`. Stops early when no such edge exists, so
/// nodes that node 0 cannot reach are left out.
pub fn prim(graph: &Graph) -> Vec<Edge> {
    let n = graph.node_count();
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    if n == 0 {
        return tree;
    }
    let mut selected = vec![false; n];
    selected[0] = true;

    for _ in 1..n {
        let mut best: Option<Edge> = None;
        for edge in &graph.edges {
            if edge.source >= n || edge.target >= n {
                continue;
            }
            if !selected[edge.source] || selected[edge.target] {
                continue;
            }
            if best.map_or(true, |b| edge.weight < b.weight) {
                best = Some(*edge);
            }
        }
        let Some(edge) = best else { break };
        selected[edge.target] = true;
        tree.push(edge);
    }
    tree
}
