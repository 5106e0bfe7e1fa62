//! Selection sort.

/// Sort a copy of `input` by moving the minimum of the unsorted suffix to
/// its front on every pass.
pub fn selection_sort(input: &[i64]) -> Vec<i64> {
    let mut arr = input.to_vec();
    let n = arr.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
        }
    }
    arr
}
