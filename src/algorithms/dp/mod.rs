//! # Dynamic Programming
//!
//! Two problems, each solved naively and with tabulation:
//!
//! - Fibonacci: exponential recursion against a linear table
//! - 0/1 knapsack: include/exclude recursion against the `n × W` table
//!
//! Results are reported as `f64` because the tabulated Fibonacci outgrows
//! every integer type long before its cap.

pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{family_from, AlgorithmFamily, Category};
use crate::workload::DpWorkload;

pub type DpFamily = AlgorithmFamily<DpWorkload, f64>;

/// Build the DP family
pub fn family() -> DpFamily {
    family_from(Category::Dp, available_variants())
}

/// Cross-check the naive and tabulated solvers of each problem on an input
/// small enough for both.
pub fn verify(family: &DpFamily) -> Result<(), String> {
    let data = DpWorkload {
        size: 15,
        values: vec![12, 7, 33, 5, 90, 41, 18, 64, 3, 27, 55, 9, 71, 36, 22],
        weights: vec![4, 9, 13, 2, 30, 17, 6, 25, 1, 11, 20, 5, 28, 14, 8],
        capacity: 60,
    };
    let fib = fibonacci_recursive(&data);
    let knapsack = knapsack_recursive(&data);

    for algo in family.all() {
        let result = algo.run(&data);
        if result != fib && result != knapsack {
            return Err(format!(
                "Variant '{}' failed verification. Got {}, expected {} or {}",
                algo.id(),
                result,
                fib,
                knapsack
            ));
        }
    }
    if fibonacci_tabulated(&data) != fib {
        return Err("Fibonacci solvers disagree".to_string());
    }
    if knapsack_tabulated(&data) != knapsack {
        return Err("Knapsack solvers disagree".to_string());
    }
    Ok(())
}
