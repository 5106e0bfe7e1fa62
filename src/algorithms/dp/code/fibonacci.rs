use crate::config::{FIB_RECURSIVE_CAP, FIB_TABULATED_CAP};
use crate::workload::DpWorkload;

/// Naive recursive Fibonacci of `min(size, 30)`.
pub fn fibonacci_recursive(data: &DpWorkload) -> f64 {
    fn fib(n: usize) -> u64 {
        if n <= 1 {
            return n as u64;
        }
        fib(n - 1) + fib(n - 2)
    }

    fib(data.size.min(FIB_RECURSIVE_CAP)) as f64
}

/// Bottom-up Fibonacci of `min(size, 1000)`.
///
/// The table holds `f64`, so results beyond `F(78)` lose precision
/// and stay finite up to the cap.
pub fn fibonacci_tabulated(data: &DpWorkload) -> f64 {
    let n = data.size.min(FIB_TABULATED_CAP);
    if n <= 1 {
        return n as f64;
    }

    let mut table = vec![0.0f64; n + 1];
    table[1] = 1.0;
    for i in 2..=n {
        table[i] = table[i - 1] + table[i - 2];
    }
    table[n]
}
