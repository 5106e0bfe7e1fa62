//! Binary search as a replayable step trace.

use serde::Serialize;

/// One snapshot of a binary search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BinarySearchStep {
    /// Inclusive lower bound of the search window.
    pub left: isize,
    /// Inclusive upper bound of the search window; `-1` once it is empty on the left.
    pub right: isize,
    pub mid: isize,
    /// Value at `mid` being compared, if a comparison happens in this step.
    pub comparison: Option<i64>,
    /// `Some(true)` when the target was found, `Some(false)` after a miss.
    pub found: Option<bool>,
    pub description: String,
}

/// Trace a binary search for `target` in the ascending slice `sorted`.
///
/// The input must already be sorted; the trace does not check it.
pub fn trace_binary_search(sorted: &[i64], target: i64) -> Vec<BinarySearchStep> {
    let mut steps = Vec::new();
    let mut left: isize = 0;
    let mut right: isize = sorted.len() as isize - 1;
    let midpoint = |l: isize, r: isize| (l + r).div_euclid(2);

    steps.push(BinarySearchStep {
        left,
        right,
        mid: midpoint(left, right),
        comparison: None,
        found: None,
        description: format!("Initialize binary search for target {}", target),
    });

    while left <= right {
        let mid = midpoint(left, right);
        let value = sorted[mid as usize];

        steps.push(BinarySearchStep {
            left,
            right,
            mid,
            comparison: Some(value),
            found: None,
            description: format!(
                "Examining middle element at index {} with value {}",
                mid, value
            ),
        });

        if value == target {
            steps.push(BinarySearchStep {
                left,
                right,
                mid,
                comparison: Some(value),
                found: Some(true),
                description: format!("Found target {} at index {}!", target, mid),
            });
            return steps;
        }

        let description = if value < target {
            format!("{} < {}, search right half", value, target)
        } else {
            format!("{} > {}, search left half", value, target)
        };
        steps.push(BinarySearchStep {
            left,
            right,
            mid,
            comparison: Some(value),
            found: Some(false),
            description,
        });

        if value < target {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }

    steps.push(BinarySearchStep {
        left,
        right,
        mid: midpoint(left, right),
        comparison: None,
        found: Some(false),
        description: format!("Target {} not found in the array", target),
    });
    steps
}
