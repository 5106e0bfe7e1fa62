//! Sorting algorithms as replayable step traces.
//!
//! Each trace starts with an initialization step, records every comparison
//! and every element move, and ends with a step in which all indices are
//! sorted. Elements only ever move by swaps or shifts, so every snapshot is
//! a permutation of the input.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The traced sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl SortKind {
    pub const ALL: [SortKind; 6] = [
        SortKind::Bubble,
        SortKind::Selection,
        SortKind::Insertion,
        SortKind::Merge,
        SortKind::Quick,
        SortKind::Heap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble",
            SortKind::Selection => "Selection",
            SortKind::Insertion => "Insertion",
            SortKind::Merge => "Merge",
            SortKind::Quick => "Quick",
            SortKind::Heap => "Heap",
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for SortKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKind::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sorting algorithm '{}'", s))
    }
}

/// One snapshot of a traced sort.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortStep {
    pub array: Vec<i64>,
    /// Indices being compared.
    pub comparing: Vec<usize>,
    /// Indices about to be swapped, or the target and source of a shift.
    pub swapping: Vec<usize>,
    /// Indices known to hold their final value, ascending.
    pub sorted: Vec<usize>,
    pub description: String,
}

struct Recorder {
    steps: Vec<SortStep>,
    sorted: BTreeSet<usize>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            steps: Vec::new(),
            sorted: BTreeSet::new(),
        }
    }

    fn push(&mut self, arr: &[i64], comparing: Vec<usize>, swapping: Vec<usize>, description: String) {
        self.steps.push(SortStep {
            array: arr.to_vec(),
            comparing,
            swapping,
            sorted: self.sorted.iter().copied().collect(),
            description,
        });
    }

    fn compare(&mut self, arr: &[i64], a: usize, b: usize) {
        self.push(
            arr,
            vec![a, b],
            Vec::new(),
            format!("Comparing indices {} and {}: {} and {}", a, b, arr[a], arr[b]),
        );
    }

    fn swap(&mut self, arr: &mut [i64], a: usize, b: usize) {
        self.push(
            arr,
            Vec::new(),
            vec![a, b],
            format!("Swapping {} and {}", arr[a], arr[b]),
        );
        arr.swap(a, b);
    }

    /// Move `arr[from]` down to `to`, shifting `arr[to..from]` up by one.
    fn shift(&mut self, arr: &mut [i64], from: usize, to: usize) {
        self.push(
            arr,
            Vec::new(),
            vec![to, from],
            format!("Moving {} from index {} to index {}", arr[from], from, to),
        );
        arr[to..=from].rotate_right(1);
    }

    fn settle(&mut self, index: usize) {
        self.sorted.insert(index);
    }
}

/// Trace `kind` over a copy of `input`.
///
/// # Example
/// ```
/// use algo_race::trace::{trace_sort, SortKind};
///
/// let steps = trace_sort(SortKind::Insertion, &[3, 1, 2]);
/// assert_eq!(steps.first().unwrap().array, vec![3, 1, 2]);
/// assert_eq!(steps.last().unwrap().array, vec![1, 2, 3]);
/// ```
pub fn trace_sort(kind: SortKind, input: &[i64]) -> Vec<SortStep> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = Recorder::new();

    rec.push(
        &arr,
        Vec::new(),
        Vec::new(),
        format!(
            "Initialize {} sort for an array of {} elements",
            kind.label(),
            n
        ),
    );

    match kind {
        SortKind::Bubble => bubble(&mut rec, &mut arr),
        SortKind::Selection => selection(&mut rec, &mut arr),
        SortKind::Insertion => insertion(&mut rec, &mut arr),
        SortKind::Merge => {
            if n > 1 {
                merge_range(&mut rec, &mut arr, 0, n);
            }
        }
        SortKind::Quick => {
            if n > 1 {
                quick_range(&mut rec, &mut arr, 0, n - 1);
            }
        }
        SortKind::Heap => heap(&mut rec, &mut arr),
    }

    rec.sorted = (0..n).collect();
    let joined = arr
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    rec.push(
        &arr,
        Vec::new(),
        Vec::new(),
        format!("Array is now sorted using {} Sort: {}", kind.label(), joined),
    );
    rec.steps
}

fn bubble(rec: &mut Recorder, arr: &mut [i64]) {
    let n = arr.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            rec.compare(arr, j, j + 1);
            if arr[j] > arr[j + 1] {
                rec.swap(arr, j, j + 1);
            }
        }
        rec.settle(n - i - 1);
        if i + 1 < n {
            rec.push(
                arr,
                Vec::new(),
                Vec::new(),
                format!(
                    "Element {} is now in its correct position at index {}",
                    arr[n - i - 1],
                    n - i - 1
                ),
            );
        }
    }
}

fn selection(rec: &mut Recorder, arr: &mut [i64]) {
    let n = arr.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            rec.compare(arr, j, min_idx);
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            rec.swap(arr, i, min_idx);
        }
        rec.settle(i);
    }
}

fn insertion(rec: &mut Recorder, arr: &mut [i64]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 {
            rec.compare(arr, j - 1, j);
            if arr[j - 1] <= arr[j] {
                break;
            }
            rec.swap(arr, j - 1, j);
            j -= 1;
        }
    }
}

/// Sort `arr[lo..hi]` top-down.
fn merge_range(rec: &mut Recorder, arr: &mut [i64], lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_range(rec, arr, lo, mid);
    merge_range(rec, arr, mid, hi);

    // Merge in place: arr[l..m] is the pending left run, arr[m..hi] the right one
    let (mut l, mut m) = (lo, mid);
    while l < m && m < hi {
        rec.push(
            arr,
            vec![l, m],
            Vec::new(),
            format!("Merging: comparing {} and {}", arr[l], arr[m]),
        );
        if arr[m] < arr[l] {
            rec.shift(arr, m, l);
            m += 1;
        }
        l += 1;
    }
}

/// Lomuto partition around the middle element, sorting `arr[lo..=hi]`.
fn quick_range(rec: &mut Recorder, arr: &mut [i64], lo: usize, hi: usize) {
    if lo >= hi {
        if lo == hi {
            rec.settle(lo);
        }
        return;
    }
    let mid = lo + (hi - lo) / 2;
    rec.push(
        arr,
        vec![mid],
        Vec::new(),
        format!("Selected pivot element: {} at index {}", arr[mid], mid),
    );
    if mid != hi {
        rec.swap(arr, mid, hi);
    }

    let mut store = lo;
    for j in lo..hi {
        rec.compare(arr, j, hi);
        if arr[j] < arr[hi] {
            if j != store {
                rec.swap(arr, j, store);
            }
            store += 1;
        }
    }
    if store != hi {
        rec.swap(arr, store, hi);
    }
    rec.settle(store);

    if store > lo {
        quick_range(rec, arr, lo, store - 1);
    }
    quick_range(rec, arr, store + 1, hi);
}

fn heap(rec: &mut Recorder, arr: &mut [i64]) {
    let n = arr.len();
    for i in (0..n / 2).rev() {
        sift_down(rec, arr, n, i);
    }
    for end in (1..n).rev() {
        rec.swap(arr, 0, end);
        rec.settle(end);
        sift_down(rec, arr, end, 0);
    }
}

fn sift_down(rec: &mut Recorder, arr: &mut [i64], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < len {
            rec.compare(arr, left, largest);
            if arr[left] > arr[largest] {
                largest = left;
            }
        }
        if right < len {
            rec.compare(arr, right, largest);
            if arr[right] > arr[largest] {
                largest = right;
            }
        }
        if largest == root {
            return;
        }
        rec.swap(arr, root, largest);
        root = largest;
    }
}
