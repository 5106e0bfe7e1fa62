//! Tests for dynamic programming implementations.

#[cfg(test)]
mod tests {
    use crate::algorithms::dp::code::*;
    use crate::algorithms::dp::{family, verify};
    use crate::workload::DpWorkload;

    fn knapsack_example() -> DpWorkload {
        DpWorkload {
            size: 3,
            values: vec![60, 100, 120],
            weights: vec![10, 20, 30],
            capacity: 50,
        }
    }

    fn sized(size: usize) -> DpWorkload {
        DpWorkload {
            size,
            values: Vec::new(),
            weights: Vec::new(),
            capacity: 0,
        }
    }

    #[test]
    fn test_knapsack_example() {
        assert_eq!(knapsack_tabulated(&knapsack_example()), 220.0);
        assert_eq!(knapsack_recursive(&knapsack_example()), 220.0);
    }

    #[test]
    fn test_knapsack_zero_capacity_or_items() {
        let mut data = knapsack_example();
        data.capacity = 0;
        assert_eq!(knapsack_tabulated(&data), 0.0);
        assert_eq!(knapsack_recursive(&data), 0.0);

        let data = sized(10);
        assert_eq!(knapsack_tabulated(&data), 0.0);
        assert_eq!(knapsack_recursive(&data), 0.0);
    }

    #[test]
    fn test_knapsack_respects_size() {
        // Only the first item is considered
        let mut data = knapsack_example();
        data.size = 1;
        assert_eq!(knapsack_tabulated(&data), 60.0);
        assert_eq!(knapsack_recursive(&data), 60.0);
    }

    #[test]
    fn test_fibonacci_small() {
        for (n, expected) in [(0, 0.0), (1, 1.0), (2, 1.0), (10, 55.0), (20, 6765.0)] {
            assert_eq!(fibonacci_recursive(&sized(n)), expected);
            assert_eq!(fibonacci_tabulated(&sized(n)), expected);
        }
    }

    #[test]
    fn test_fibonacci_caps() {
        // Recursive is capped at 30
        assert_eq!(fibonacci_recursive(&sized(5000)), 832_040.0);
        // Tabulated is capped at 1000 and stays finite
        let capped = fibonacci_tabulated(&sized(5000));
        assert_eq!(capped, fibonacci_tabulated(&sized(1000)));
        assert!(capped.is_finite());
    }

    #[test]
    fn test_family_verify() {
        let fam = family();
        assert_eq!(
            fam.ids(),
            vec!["fibonacci", "fibonacciDP", "knapsackRecursive", "knapsackDP"]
        );
        assert_eq!(verify(&fam), Ok(()));
    }
}
