//! Quick sort with a three-way split into fresh vectors.
//!
//! The pivot is the middle element. Partitioning is not in place: each level
//! allocates the "less", "equal" and "greater" groups, which keeps the code
//! close to the textbook description at the cost of O(n) extra memory per
//! level.

/// Sort a copy of `input`.
pub fn quick_sort(input: &[i64]) -> Vec<i64> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let pivot = input[input.len() / 2];
    let less: Vec<i64> = input.iter().copied().filter(|&x| x < pivot).collect();
    let equal: Vec<i64> = input.iter().copied().filter(|&x| x == pivot).collect();
    let greater: Vec<i64> = input.iter().copied().filter(|&x| x > pivot).collect();

    let mut sorted = quick_sort(&less);
    sorted.extend(equal);
    sorted.extend(quick_sort(&greater));
    sorted
}
