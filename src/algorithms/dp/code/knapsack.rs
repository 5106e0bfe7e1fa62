use crate::config::{KNAPSACK_RECURSIVE_CAP, KNAPSACK_TABULATED_CAP};
use crate::workload::DpWorkload;

/// Items considered: the first `min(size, cap)` that have both a value and
/// a weight.
fn item_count(data: &DpWorkload, cap: usize) -> usize {
    data.size
        .min(cap)
        .min(data.values.len())
        .min(data.weights.len())
}

/// 0/1 knapsack by plain include/exclude recursion over at most 20 items.
pub fn knapsack_recursive(data: &DpWorkload) -> f64 {
    fn best(capacity: u64, weights: &[u64], values: &[u64], n: usize) -> u64 {
        if n == 0 || capacity == 0 {
            return 0;
        }
        let skip = best(capacity, weights, values, n - 1);
        if weights[n - 1] > capacity {
            return skip;
        }
        let take = values[n - 1] + best(capacity - weights[n - 1], weights, values, n - 1);
        take.max(skip)
    }

    let n = item_count(data, KNAPSACK_RECURSIVE_CAP);
    best(data.capacity, &data.weights, &data.values, n) as f64
}

/// 0/1 knapsack with the full `(n + 1) × (W + 1)` table over at most 500
/// items.
pub fn knapsack_tabulated(data: &DpWorkload) -> f64 {
    let n = item_count(data, KNAPSACK_TABULATED_CAP);
    let capacity = data.capacity as usize;
    if n == 0 || capacity == 0 {
        return 0.0;
    }

    let mut table = vec![vec![0u64; capacity + 1]; n + 1];
    for i in 1..=n {
        let weight = data.weights[i - 1] as usize;
        let value = data.values[i - 1];
        for w in 1..=capacity {
            table[i][w] = if weight <= w {
                table[i - 1][w].max(value + table[i - 1][w - weight])
            } else {
                table[i - 1][w]
            };
        }
    }
    table[n][capacity] as f64
}
