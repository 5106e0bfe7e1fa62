//! Tests for spanning tree implementations.

#[cfg(test)]
mod tests {
    use crate::algorithms::mst::code::*;
    use crate::algorithms::mst::{family, symmetric, verify};
    use crate::graph::{Edge, Graph};

    fn square() -> Graph {
        // 0 - 1 - 2 - 3 - 0 with a heavy diagonal
        Graph::from_edges(4, [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5)])
    }

    #[test]
    fn test_kruskal_basic() {
        let tree = kruskal(&square());
        assert_eq!(tree, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 3)]);
    }

    #[test]
    fn test_prim_basic() {
        let tree = prim(&square());
        assert_eq!(tree, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 3)]);
    }

    #[test]
    fn test_prim_follows_outgoing_edges() {
        // Only edges pointing into node 0: nothing is reachable
        let graph = Graph::from_edges(3, [(1, 0, 2), (2, 0, 7)]);
        assert!(prim(&graph).is_empty());

        // The light edge into node 0 is skipped for the heavier outgoing one
        let graph = Graph::from_edges(3, [(1, 0, 1), (0, 1, 5), (2, 1, 1), (1, 2, 3)]);
        let tree = prim(&graph);
        assert_eq!(tree, vec![Edge::new(0, 1, 5), Edge::new(1, 2, 3)]);
        assert!(tree.iter().all(|e| graph.edges.contains(e)));
    }

    #[test]
    fn test_prim_matches_kruskal_on_mirrored_graph() {
        let graph = symmetric(&Graph::from_edges(3, [(1, 0, 2), (2, 0, 7), (2, 1, 1)]));
        let tree = prim(&graph);
        assert_eq!(tree, vec![Edge::new(0, 1, 2), Edge::new(1, 2, 1)]);
        assert_eq!(total_weight(&tree), total_weight(&kruskal(&graph)));
    }

    #[test]
    fn test_kruskal_stable_on_equal_weights() {
        let graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
        assert_eq!(kruskal(&graph), vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1)]);
    }

    #[test]
    fn test_disconnected_graph_gives_forest() {
        let graph = Graph::from_edges(4, [(0, 1, 3), (2, 3, 1)]);
        assert_eq!(kruskal(&graph), vec![Edge::new(2, 3, 1), Edge::new(0, 1, 3)]);
        // Prim only reaches the component of node 0
        assert_eq!(prim(&graph), vec![Edge::new(0, 1, 3)]);
    }

    #[test]
    fn test_trivial_graphs() {
        for v in available_variants() {
            assert!((v.function)(&Graph::default()).is_empty(), "{}", v.descriptor.id);
            assert!((v.function)(&Graph::with_nodes(1)).is_empty(), "{}", v.descriptor.id);
        }
    }

    #[test]
    fn test_family_verify() {
        let fam = family();
        assert_eq!(fam.ids(), vec!["kruskal", "prim"]);
        assert_eq!(verify(&fam), Ok(()));
    }
}
