//! Wall-clock timing for algorithm executions.
//!
//! This module provides the single timing infrastructure with:
//! - the [`measure!`](crate::measure) macro, timing one expression with the
//!   monotonic clock
//! - millisecond conversion and fixed-decimal rounding for reported values
//! - summary statistics over repeated timings

use std::time::Duration;

/// Time one expression with [`std::time::Instant`].
///
/// Evaluates to `(Duration, value)`. The value goes through
/// [`std::hint::black_box`] so the work is not optimized away.
///
/// # Example
/// ```
/// let (elapsed, value) = algo_race::measure!(2 + 2);
/// assert_eq!(value, 4);
/// assert!(elapsed.as_nanos() < 1_000_000_000);
/// ```
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = ::std::time::Instant::now();
        let value = ::std::hint::black_box($body);
        (start.elapsed(), value)
    }};
}

/// Convert a duration to fractional milliseconds.
pub fn to_millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Summary of repeated timings of one algorithm, in milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingStats {
    pub runs: usize,
    pub mean_ms: f64,
    pub median_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub std_dev_ms: f64,
}

/// Compute statistics from raw timings. Returns `None` for an empty slice.
pub fn compute_stats(times_ms: &[f64]) -> Option<TimingStats> {
    if times_ms.is_empty() {
        return None;
    }

    let mut sorted = times_ms.to_vec();
    sorted.sort_by(f64::total_cmp);

    let runs = sorted.len();
    let mean_ms = sorted.iter().sum::<f64>() / runs as f64;
    let variance = sorted
        .iter()
        .map(|t| {
            let diff = t - mean_ms;
            diff * diff
        })
        .sum::<f64>()
        / (runs - 1).max(1) as f64;

    Some(TimingStats {
        runs,
        mean_ms,
        median_ms: sorted[runs / 2],
        min_ms: sorted[0],
        max_ms: sorted[runs - 1],
        std_dev_ms: variance.sqrt(),
    })
}
