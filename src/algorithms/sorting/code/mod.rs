//! Sorting implementations.
//!
//! Every variant takes a borrowed slice and returns a new sorted vector; the
//! input is never modified.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

use crate::registry::{AlgorithmInfo, Descriptor};

/// Type alias for sorting function signature
pub type SortFn = fn(&[i64]) -> Vec<i64>;

fn variant(
    id: &'static str,
    name: &'static str,
    complexity: &'static str,
    space_complexity: &'static str,
    function: SortFn,
) -> AlgorithmInfo<SortFn> {
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

/// All sorting variants, in catalog order
pub fn available_variants() -> Vec<AlgorithmInfo<SortFn>> {
    vec![
        variant("bubbleSort", "Bubble Sort", "O(n²)", "O(1)", bubble_sort),
        variant("selectionSort", "Selection Sort", "O(n²)", "O(1)", selection_sort),
        variant("insertionSort", "Insertion Sort", "O(n²)", "O(1)", insertion_sort),
        variant("quickSort", "Quick Sort", "O(n log n)", "O(log n)", quick_sort),
        variant("mergeSort", "Merge Sort", "O(n log n)", "O(n)", merge_sort),
        variant("heapSort", "Heap Sort", "O(n log n)", "O(1)", heap_sort),
    ]
}
