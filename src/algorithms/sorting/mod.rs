//! # Sorting
//!
//! Six comparison sorts over `i64` values, from the quadratic classics
//! (bubble, selection, insertion) to the `O(n log n)` ones (quick, merge,
//! heap). All of them return a fresh ascending vector and leave the input
//! untouched.

pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{family_from, AlgorithmFamily, Category};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type SortingFamily = AlgorithmFamily<[i64], Vec<i64>>;

/// Build the sorting family
pub fn family() -> SortingFamily {
    family_from(Category::Sorting, available_variants())
}

/// Check every member against the standard library sort on a fixed pseudo-random
/// input with duplicates and negative values.
pub fn verify(family: &SortingFamily) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    // Odd length so the middle pivot and heap parents hit uneven splits
    let input: Vec<i64> = (0..257).map(|_| rng.random_range(-50..50)).collect();
    let mut expected = input.clone();
    expected.sort_unstable();

    for algo in family.all() {
        let result = algo.run(&input);
        if result != expected {
            return Err(format!(
                "Variant '{}' failed verification: output is not the sorted input",
                algo.id()
            ));
        }
    }
    Ok(())
}
