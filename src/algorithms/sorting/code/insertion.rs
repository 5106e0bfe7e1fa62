//! Insertion sort.

/// Sort a copy of `input` by shifting each element left past every larger
/// element before it.
pub fn insertion_sort(input: &[i64]) -> Vec<i64> {
    let mut arr = input.to_vec();
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
    arr
}
