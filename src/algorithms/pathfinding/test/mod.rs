//! Tests for shortest path implementations.

#[cfg(test)]
mod tests {
    use crate::algorithms::pathfinding::code::*;
    use crate::algorithms::pathfinding::{family, verify};
    use crate::graph::{Distance, Graph};

    use Distance::{Finite, Infinite};

    fn sample() -> Graph {
        Graph::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 1)])
    }

    #[test]
    fn test_dijkstra_basic() {
        assert_eq!(dijkstra(&sample()), vec![Finite(0), Finite(2), Finite(1)]);
    }

    #[test]
    fn test_bellman_ford_basic() {
        assert_eq!(bellman_ford(&sample()), vec![Finite(0), Finite(2), Finite(1)]);
    }

    #[test]
    fn test_bellman_ford_negative_edge() {
        let graph = Graph::from_edges(3, [(0, 1, 5), (0, 2, 4), (2, 1, -2)]);
        assert_eq!(bellman_ford(&graph), vec![Finite(0), Finite(2), Finite(4)]);
    }

    #[test]
    fn test_astar_reaches_target() {
        // Target is node 2 (the last node)
        let result = astar(&sample());
        assert_eq!(result[0], Finite(0));
        assert_eq!(result[2], Finite(1));
    }

    #[test]
    fn test_astar_stops_at_target() {
        // 0 -> 1 -> 2 and 0 -> 3 where 3 is the target: node 2 is never expanded
        let graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 0, 1), (0, 3, 1)]);
        let result = astar(&graph);
        assert_eq!(result[3], Finite(1));
        assert_eq!(result[0], Finite(0));
    }

    #[test]
    fn test_unreachable_is_infinite() {
        let graph = Graph::from_edges(4, [(0, 1, 3), (2, 3, 1)]);
        for v in available_variants() {
            let result = (v.function)(&graph);
            assert_eq!(result[0], Finite(0), "{}", v.descriptor.id);
            assert_eq!(result[2], Infinite, "{}", v.descriptor.id);
            assert_eq!(result[3], Infinite, "{}", v.descriptor.id);
        }
    }

    #[test]
    fn test_empty_and_single_node() {
        for v in available_variants() {
            assert!((v.function)(&Graph::default()).is_empty(), "{}", v.descriptor.id);
            assert_eq!((v.function)(&Graph::with_nodes(1)), vec![Finite(0)]);
        }
    }

    #[test]
    fn test_dangling_edges_are_ignored() {
        let graph = Graph::from_edges(2, [(0, 1, 2), (0, 7, 1), (9, 1, 1)]);
        for v in available_variants() {
            assert_eq!((v.function)(&graph), vec![Finite(0), Finite(2)], "{}", v.descriptor.id);
        }
    }

    #[test]
    fn test_family_verify() {
        let fam = family();
        assert_eq!(fam.ids(), vec!["dijkstra", "bellmanFord", "astar"]);
        assert_eq!(verify(&fam), Ok(()));
    }
}
