//! # Step Traces
//!
//! Algorithms that return every intermediate state as an owned snapshot, so
//! a viewer can jump to any step in any order. A step never borrows from the
//! graph or array it was computed from, and the working state is copied into
//! each step when it is recorded, so later mutation cannot reach back into
//! earlier steps.
//!
//! - [`run_dijkstra`] and [`run_bellman_ford`] over a [`Graph`](crate::graph::Graph)
//! - [`trace_sort`] for six sorting algorithms
//! - [`trace_binary_search`], [`trace_n_queens`], [`trace_fibonacci`]

pub mod backtracking;
pub mod bellman_ford;
pub mod dijkstra;
pub mod dp;
pub mod search;
pub mod sorting;
pub mod test;

pub use backtracking::{trace_n_queens, QueensAction, QueensStep};
pub use bellman_ford::{run_bellman_ford, BellmanFordStep, CycleCheck};
pub use dijkstra::{run_dijkstra, DijkstraStep};
pub use dp::{trace_fibonacci, FibonacciStep, FIBONACCI_TRACE_MAX};
pub use search::{trace_binary_search, BinarySearchStep};
pub use sorting::{trace_sort, SortKind, SortStep};
