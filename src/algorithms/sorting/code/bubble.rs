//! Bubble sort.

/// Sort a copy of `input` by repeatedly swapping adjacent out-of-order pairs.
pub fn bubble_sort(input: &[i64]) -> Vec<i64> {
    let mut arr = input.to_vec();
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
    arr
}
