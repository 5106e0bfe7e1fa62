//! Tests for sorting implementations.

#[cfg(test)]
mod tests {
    use crate::algorithms::sorting::code::*;
    use crate::algorithms::sorting::{family, verify};

    fn each_variant(check: impl Fn(&str, SortFn)) {
        for v in available_variants() {
            check(v.descriptor.id, v.function);
        }
    }

    #[test]
    fn test_basic() {
        each_variant(|id, sort| {
            assert_eq!(sort(&[5, 3, 1, 4, 2]), vec![1, 2, 3, 4, 5], "{}", id);
        });
    }

    #[test]
    fn test_empty_and_single() {
        each_variant(|id, sort| {
            assert_eq!(sort(&[]), Vec::<i64>::new(), "{}", id);
            assert_eq!(sort(&[7]), vec![7], "{}", id);
        });
    }

    #[test]
    fn test_duplicates_and_negatives() {
        each_variant(|id, sort| {
            assert_eq!(
                sort(&[3, -1, 3, 0, -1, 2, 3]),
                vec![-1, -1, 0, 2, 3, 3, 3],
                "{}",
                id
            );
        });
    }

    #[test]
    fn test_already_sorted_and_reversed() {
        let ascending: Vec<i64> = (0..50).collect();
        let descending: Vec<i64> = (0..50).rev().collect();
        each_variant(|id, sort| {
            assert_eq!(sort(&ascending), ascending, "{}", id);
            assert_eq!(sort(&descending), ascending, "{}", id);
        });
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![9, 8, 7, 1];
        each_variant(|_, sort| {
            let _ = sort(&input);
        });
        assert_eq!(input, vec![9, 8, 7, 1]);
    }

    #[test]
    fn test_family_order_and_verify() {
        let fam = family();
        assert_eq!(
            fam.ids(),
            vec![
                "bubbleSort",
                "selectionSort",
                "insertionSort",
                "quickSort",
                "mergeSort",
                "heapSort"
            ]
        );
        assert_eq!(fam.find("mergeSort").map(|a| a.name()), Some("Merge Sort"));
        assert!(verify(&fam).is_ok());
    }
}
