//! Tests for the step-trace algorithms.

#[cfg(test)]
mod tests {
    use crate::graph::{Distance, Edge, Graph, Node, NodeId};
    use crate::trace::*;
    use std::collections::BTreeMap;

    fn example_graph() -> Graph {
        Graph::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 1)])
    }

    fn finals(map: &BTreeMap<NodeId, Distance>) -> Vec<Distance> {
        map.values().copied().collect()
    }

    // ------------------------------------------------------------------
    // Dijkstra
    // ------------------------------------------------------------------

    #[test]
    fn test_dijkstra_example_scenario() {
        let steps = run_dijkstra(&example_graph(), 0);
        let last = steps.last().unwrap();

        assert_eq!(last.current, None);
        assert_eq!(last.visited, vec![0, 2, 1]);
        assert_eq!(
            finals(&last.distances),
            vec![Distance::Finite(0), Distance::Finite(2), Distance::Finite(1)]
        );
    }

    #[test]
    fn test_dijkstra_initial_step() {
        let steps = run_dijkstra(&example_graph(), 0);
        let first = &steps[0];

        assert_eq!(first.current, Some(0));
        assert!(first.visited.is_empty());
        assert!(first.relaxed_edges.is_empty());
        assert_eq!(
            finals(&first.distances),
            vec![Distance::ZERO, Distance::Infinite, Distance::Infinite]
        );
    }

    #[test]
    fn test_dijkstra_records_relaxed_edges_per_step() {
        let steps = run_dijkstra(&example_graph(), 0);
        // init, three settled nodes, terminal
        assert_eq!(steps.len(), 5);

        assert_eq!(steps[1].current, Some(0));
        assert_eq!(
            steps[1].relaxed_edges,
            vec![Edge::new(0, 1, 4), Edge::new(0, 2, 1)]
        );
        assert_eq!(steps[2].current, Some(2));
        assert_eq!(steps[2].relaxed_edges, vec![Edge::new(2, 1, 1)]);
        assert_eq!(steps[3].current, Some(1));
        assert!(steps[3].relaxed_edges.is_empty());
    }

    #[test]
    fn test_dijkstra_unreachable_nodes_stay_infinite() {
        let graph = Graph::from_edges(4, [(0, 1, 3), (2, 3, 1)]);
        let steps = run_dijkstra(&graph, 0);
        let last = steps.last().unwrap();

        assert_eq!(last.visited, vec![0, 1]);
        assert_eq!(last.distances[&2], Distance::Infinite);
        assert_eq!(last.distances[&3], Distance::Infinite);
    }

    #[test]
    fn test_dijkstra_tie_break_follows_node_order() {
        let mut graph = Graph::from_edges(3, [(0, 1, 1), (0, 2, 1)]);
        let steps = run_dijkstra(&graph, 0);
        assert_eq!(steps.last().unwrap().visited, vec![0, 1, 2]);

        graph.nodes = vec![Node { id: 0 }, Node { id: 2 }, Node { id: 1 }];
        let steps = run_dijkstra(&graph, 0);
        assert_eq!(steps.last().unwrap().visited, vec![0, 2, 1]);
    }

    #[test]
    fn test_dijkstra_unknown_start() {
        let steps = run_dijkstra(&example_graph(), 9);
        assert_eq!(steps.len(), 2);
        let last = steps.last().unwrap();
        assert!(last.visited.is_empty());
        assert!(last.distances.values().all(|d| *d == Distance::Infinite));
    }

    #[test]
    fn test_dijkstra_empty_graph() {
        let steps = run_dijkstra(&Graph::default(), 0);
        assert_eq!(steps.len(), 2);
        assert!(steps[1].distances.is_empty());
    }

    #[test]
    fn test_steps_survive_graph_mutation() {
        let mut graph = example_graph();
        let steps = run_dijkstra(&graph, 0);
        let bf_steps = run_bellman_ford(&graph, 0);
        let snapshot = steps.clone();
        let bf_snapshot = bf_steps.clone();

        graph.edges[0].weight = 100;
        graph.edges[2].target = 0;
        graph.add_edge(1, 2, -50);
        graph.nodes.push(Node { id: 3 });

        assert_eq!(steps, snapshot);
        assert_eq!(bf_steps, bf_snapshot);
        assert_eq!(steps[2].relaxed_edges, vec![Edge::new(2, 1, 1)]);
    }

    #[test]
    fn test_earlier_steps_are_independent_of_later_ones() {
        let steps = run_dijkstra(&example_graph(), 0);
        // Node 1 is lowered twice over the run; each step keeps its own value.
        assert_eq!(steps[0].distances[&1], Distance::Infinite);
        assert_eq!(steps[1].distances[&1], Distance::Finite(4));
        assert_eq!(steps[2].distances[&1], Distance::Finite(2));
        assert_eq!(steps[1].visited, vec![0]);
    }

    // ------------------------------------------------------------------
    // Bellman-Ford
    // ------------------------------------------------------------------

    #[test]
    fn test_bellman_ford_matches_dijkstra_on_example() {
        let graph = example_graph();
        let dijkstra = run_dijkstra(&graph, 0);
        let bellman = run_bellman_ford(&graph, 0);

        let last = bellman.last().unwrap();
        assert_eq!(last.distances, dijkstra.last().unwrap().distances);
        assert!(!last.has_negative_cycle());
    }

    #[test]
    fn test_bellman_ford_iteration_numbering() {
        let graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let steps = run_bellman_ford(&graph, 0);

        // init, pass 0 relaxes everything, pass 1 is quiet and stops, final
        let iterations: Vec<isize> = steps.iter().map(|s| s.iteration).collect();
        assert_eq!(iterations, vec![-1, 0, 1, 3]);
        assert_eq!(steps[1].relaxed_edges.len(), 3);
        assert!(steps[2].relaxed_edges.is_empty());
        assert!(steps[..3].iter().all(|s| s.cycle_check.is_none()));
        assert!(steps[3].cycle_check.is_some());
    }

    #[test]
    fn test_bellman_ford_uses_all_passes_when_needed() {
        let graph = Graph::from_edges(4, [(2, 3, 1), (1, 2, 1), (0, 1, 1)]);
        let steps = run_bellman_ford(&graph, 0);

        let iterations: Vec<isize> = steps.iter().map(|s| s.iteration).collect();
        assert_eq!(iterations, vec![-1, 0, 1, 2, 3]);
        assert_eq!(steps[1].relaxed_edges, vec![Edge::new(0, 1, 1)]);
        assert_eq!(steps[2].relaxed_edges, vec![Edge::new(1, 2, 1)]);
        assert_eq!(steps[3].relaxed_edges, vec![Edge::new(2, 3, 1)]);
        assert_eq!(steps[4].distances[&3], Distance::Finite(3));
    }

    #[test]
    fn test_bellman_ford_first_pass_never_stops_early() {
        let graph = Graph::from_edges(3, [(1, 2, 1)]);
        let steps = run_bellman_ford(&graph, 0);

        let iterations: Vec<isize> = steps.iter().map(|s| s.iteration).collect();
        assert_eq!(iterations, vec![-1, 0, 1, 2]);
        assert!(steps[1].relaxed_edges.is_empty());
    }

    #[test]
    fn test_bellman_ford_detects_negative_cycle() {
        let graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, -2), (2, 1, 1), (2, 3, 2)]);
        let steps = run_bellman_ford(&graph, 0);
        let last = steps.last().unwrap();

        assert!(last.has_negative_cycle());
        let check = last.cycle_check.as_ref().unwrap();
        assert!(!check.negative_cycle_edges.is_empty());
        assert!(check
            .negative_cycle_edges
            .iter()
            .all(|e| graph.edges.contains(e)));
        // detection does not update distances
        assert_eq!(last.distances, steps[steps.len() - 2].distances);
    }

    #[test]
    fn test_bellman_ford_negative_edge_without_cycle() {
        let graph = Graph::from_edges(3, [(0, 1, 4), (0, 2, 5), (2, 1, -3)]);
        let steps = run_bellman_ford(&graph, 0);
        let last = steps.last().unwrap();

        assert!(!last.has_negative_cycle());
        assert_eq!(last.distances[&1], Distance::Finite(2));
    }

    #[test]
    fn test_bellman_ford_trivial_graphs() {
        let steps = run_bellman_ford(&Graph::default(), 0);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].iteration, 0);

        let steps = run_bellman_ford(&Graph::with_nodes(1), 0);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].distances[&0], Distance::ZERO);
    }

    #[test]
    fn test_bellman_ford_serializes_cycle_fields_on_final_step_only() {
        let steps = run_bellman_ford(&example_graph(), 0);
        let first = serde_json::to_value(&steps[0]).unwrap();
        let last = serde_json::to_value(steps.last().unwrap()).unwrap();

        assert!(first.get("hasNegativeCycle").is_none());
        assert_eq!(last["hasNegativeCycle"], serde_json::Value::Bool(false));
        assert_eq!(last["iteration"], serde_json::json!(2));
        assert_eq!(first["distances"]["1"], serde_json::json!("Infinity"));
    }

    #[test]
    fn test_traces_are_deterministic() {
        let graph = crate::graph::create_random_graph(12, 0.25);
        assert_eq!(run_dijkstra(&graph, 0), run_dijkstra(&graph, 0));
        assert_eq!(run_bellman_ford(&graph, 3), run_bellman_ford(&graph, 3));
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    #[test]
    fn test_sort_traces_end_sorted() {
        let input = [5, 3, 8, 1, 9, 2, 2, 7];
        let mut expected = input.to_vec();
        expected.sort();

        for kind in SortKind::ALL {
            let steps = trace_sort(kind, &input);
            assert_eq!(steps[0].array, input.to_vec(), "{} init", kind);
            let last = steps.last().unwrap();
            assert_eq!(last.array, expected, "{} result", kind);
            assert_eq!(last.sorted, (0..input.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_sort_trace_steps_are_permutations() {
        let input = [4, 4, 1, 0, 3];
        let mut reference = input.to_vec();
        reference.sort();

        for kind in SortKind::ALL {
            for step in trace_sort(kind, &input) {
                let mut values = step.array.clone();
                values.sort();
                assert_eq!(values, reference, "{}: {}", kind, step.description);
            }
        }
    }

    #[test]
    fn test_merge_trace_keeps_duplicates_while_merging() {
        let input = [4, 4, 1, 0, 3];
        let steps = trace_sort(SortKind::Merge, &input);

        let merging: Vec<&SortStep> = steps
            .iter()
            .filter(|s| s.description.starts_with("Merging"))
            .collect();
        assert!(!merging.is_empty());
        for step in &steps {
            assert_eq!(step.array.iter().filter(|&&v| v == 4).count(), 2, "{}", step.description);
            assert_eq!(step.array.len(), input.len());
        }
        assert_eq!(steps.last().unwrap().array, vec![0, 1, 3, 4, 4]);
    }

    #[test]
    fn test_merge_trace_shift_moves_right_element_down() {
        // [2, 1]: one comparison, then 1 shifts in front of 2
        let steps = trace_sort(SortKind::Merge, &[2, 1]);
        let shift = steps
            .iter()
            .find(|s| s.description.starts_with("Moving"))
            .unwrap();
        assert_eq!(shift.array, vec![2, 1]);
        assert_eq!(shift.swapping, vec![0, 1]);
        assert_eq!(steps.last().unwrap().array, vec![1, 2]);
    }

    #[test]
    fn test_sort_trace_small_inputs() {
        for kind in SortKind::ALL {
            assert_eq!(trace_sort(kind, &[]).len(), 2);
            let single = trace_sort(kind, &[42]);
            assert_eq!(single.last().unwrap().array, vec![42]);
        }
    }

    #[test]
    fn test_bubble_trace_swaps_only_out_of_order_pairs() {
        let steps = trace_sort(SortKind::Bubble, &[2, 1]);
        // init, compare, swap, element settled, final
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[1].comparing, vec![0, 1]);
        assert_eq!(steps[2].swapping, vec![0, 1]);
        assert_eq!(steps[2].array, vec![2, 1]);

        let steps = trace_sort(SortKind::Bubble, &[1, 2]);
        assert!(steps.iter().all(|s| s.swapping.is_empty()));
    }

    #[test]
    fn test_sort_kind_parsing() {
        assert_eq!("heap".parse::<SortKind>(), Ok(SortKind::Heap));
        assert_eq!("Quick".parse::<SortKind>(), Ok(SortKind::Quick));
        assert!("bogo".parse::<SortKind>().is_err());
    }

    // ------------------------------------------------------------------
    // Binary search, N-Queens, Fibonacci
    // ------------------------------------------------------------------

    #[test]
    fn test_binary_search_found() {
        let array = [1, 3, 5, 7, 9, 11];
        let steps = trace_binary_search(&array, 9);
        let last = steps.last().unwrap();

        assert_eq!(last.found, Some(true));
        assert_eq!(array[last.mid as usize], 9);
        assert_eq!(steps[0].found, None);
    }

    #[test]
    fn test_binary_search_not_found() {
        let steps = trace_binary_search(&[1, 3, 5, 7], 4);
        let last = steps.last().unwrap();

        assert_eq!(last.found, Some(false));
        assert_eq!(last.comparison, None);
        assert!(last.left > last.right);
    }

    #[test]
    fn test_binary_search_empty() {
        let steps = trace_binary_search(&[], 4);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].found, Some(false));
    }

    #[test]
    fn test_n_queens_four() {
        let steps = trace_n_queens(4);
        let last = steps.last().unwrap();
        assert_eq!(last.action, QueensAction::Solution);
        assert_eq!(steps[0].action, QueensAction::Start);
        assert!(steps.iter().any(|s| s.action == QueensAction::Remove));

        let queens: Vec<(usize, usize)> = last
            .board
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, queen)| **queen)
                    .map(move |(c, _)| (r, c))
            })
            .collect();
        assert_eq!(queens, vec![(0, 1), (1, 3), (2, 0), (3, 2)]);
    }

    #[test]
    fn test_n_queens_unsolvable() {
        let steps = trace_n_queens(3);
        assert!(steps.iter().all(|s| s.action != QueensAction::Solution));
        let last = steps.last().unwrap();
        assert_eq!(last.action, QueensAction::Remove);
        assert!(last.board.iter().flatten().all(|&q| !q));
    }

    #[test]
    fn test_fibonacci_trace() {
        let steps = trace_fibonacci(10);
        assert_eq!(steps.len(), 1 + 2 * 9 + 1);
        let last = steps.last().unwrap();
        assert_eq!(last.table[10], Some(55));
        assert_eq!(steps[1].subproblems, vec![1, 0]);
        assert_eq!(steps[1].table[2], None);
        assert_eq!(steps[2].table[2], Some(1));
    }

    #[test]
    fn test_fibonacci_trace_cap() {
        let steps = trace_fibonacci(10_000);
        let last = steps.last().unwrap();
        assert_eq!(last.table.len(), FIBONACCI_TRACE_MAX + 1);
        assert!(last.table.iter().all(|c| c.is_some()));
    }
}
