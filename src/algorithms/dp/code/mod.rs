//! Dynamic programming implementations.
//!
//! Each variant clamps its input to a hard cap from [`crate::config`] so the
//! exponential ones stay tractable.

mod fibonacci;
mod knapsack;

pub use fibonacci::{fibonacci_recursive, fibonacci_tabulated};
pub use knapsack::{knapsack_recursive, knapsack_tabulated};

use crate::registry::{AlgorithmInfo, Descriptor};
use crate::workload::DpWorkload;

/// Type alias for DP function signature
pub type DpFn = fn(&DpWorkload) -> f64;

fn variant(
    id: &'static str,
    name: &'static str,
    complexity: &'static str,
    space_complexity: &'static str,
    function: DpFn,
) -> AlgorithmInfo<DpFn> {
    AlgorithmInfo {
        descriptor: Descriptor {
            id,
            name,
            complexity,
            space_complexity,
        },
        function,
    }
}

/// All DP variants, in catalog order
pub fn available_variants() -> Vec<AlgorithmInfo<DpFn>> {
    vec![
        variant("fibonacci", "Fibonacci (Recursive)", "O(2^n)", "O(n)", fibonacci_recursive),
        variant("fibonacciDP", "Fibonacci (DP)", "O(n)", "O(n)", fibonacci_tabulated),
        variant("knapsackRecursive", "Knapsack (Recursive)", "O(2^n)", "O(n)", knapsack_recursive),
        variant("knapsackDP", "Knapsack (DP)", "O(n × W)", "O(n × W)", knapsack_tabulated),
    ]
}
