//! Heap sort.

/// Sort a copy of `input`.
///
/// Builds a max-heap bottom-up starting from the last parent, then swaps the
/// root with the last unsorted element and sifts the new root down.
pub fn heap_sort(input: &[i64]) -> Vec<i64> {
    let mut arr = input.to_vec();
    let n = arr.len();

    for i in (0..n / 2).rev() {
        heapify(&mut arr, n, i);
    }

    for end in (1..n).rev() {
        arr.swap(0, end);
        heapify(&mut arr, end, 0);
    }
    arr
}

fn heapify(arr: &mut [i64], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && arr[left] > arr[largest] {
            largest = left;
        }
        if right < len && arr[right] > arr[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        arr.swap(root, largest);
        root = largest;
    }
}
