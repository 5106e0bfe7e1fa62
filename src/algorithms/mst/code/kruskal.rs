use crate::graph::{Edge, Graph, NodeId};

/// Kruskal's algorithm.
///
/// Edges are stably sorted by weight, so equal weights keep their graph
/// order. Stops once `V - 1` edges are taken or the edges run out.
pub fn kruskal(graph: &Graph) -> Vec<Edge> {
    let n = graph.node_count();
    let mut edges: Vec<&Edge> = graph
        .edges
        .iter()
        .filter(|e| e.source < n && e.target < n)
        .collect();
    edges.sort_by_key(|e| e.weight);

    let mut sets = DisjointSet::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    for edge in edges {
        if tree.len() + 1 >= n {
            break;
        }
        if sets.union(edge.source, edge.target) {
            tree.push(*edge);
        }
    }
    tree
}

/// Union-find with path compression.
struct DisjointSet {
    parent: Vec<NodeId>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, node: NodeId) -> NodeId {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cursor = node;
        while self.parent[cursor] != root {
            let next = self.parent[cursor];
            self.parent[cursor] = root;
            cursor = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns false if they were already one.
    fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}
