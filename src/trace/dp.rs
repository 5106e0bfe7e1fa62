//! Fibonacci tabulation as a replayable step trace.

use serde::Serialize;

/// One snapshot of the DP table. Unfilled cells are `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FibonacciStep {
    pub table: Vec<Option<u128>>,
    /// Cell being computed, if any.
    pub current: Option<usize>,
    /// Cells read to compute `current`.
    pub subproblems: Vec<usize>,
    pub description: String,
}

/// Largest `n` whose Fibonacci number fits the `u128` table cells.
pub const FIBONACCI_TRACE_MAX: usize = 186;

/// Trace the bottom-up Fibonacci table for `n`, capped at
/// [`FIBONACCI_TRACE_MAX`].
///
/// Each cell `i >= 2` produces a "computing" step that names its two
/// subproblems and a "set" step with the filled value.
pub fn trace_fibonacci(n: usize) -> Vec<FibonacciStep> {
    let n = n.min(FIBONACCI_TRACE_MAX);
    let mut table: Vec<Option<u128>> = vec![None; n.max(1) + 1];
    table[0] = Some(0);
    table[1] = Some(1);

    let mut steps = vec![FibonacciStep {
        table: table.clone(),
        current: None,
        subproblems: Vec::new(),
        description: "Initialize DP table with base cases: dp[0] = 0, dp[1] = 1".to_string(),
    }];

    for i in 2..=n {
        steps.push(FibonacciStep {
            table: table.clone(),
            current: Some(i),
            subproblems: vec![i - 1, i - 2],
            description: format!("Computing dp[{}] = dp[{}] + dp[{}]", i, i - 1, i - 2),
        });

        let a = table[i - 1].unwrap_or_default();
        let b = table[i - 2].unwrap_or_default();
        table[i] = Some(a + b);

        steps.push(FibonacciStep {
            table: table.clone(),
            current: Some(i),
            subproblems: Vec::new(),
            description: format!("Set dp[{}] = {} + {} = {}", i, a, b, a + b),
        });
    }

    let result = table[n].unwrap_or_default();
    steps.push(FibonacciStep {
        table,
        current: Some(n),
        subproblems: Vec::new(),
        description: format!("Fibonacci({}) = {}", n, result),
    });
    steps
}
