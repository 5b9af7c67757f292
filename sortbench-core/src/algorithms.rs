//! Sorting Implementations Under Test
//!
//! Both algorithms take a borrowed slice and return a freshly allocated
//! sorted vector. Leaving the input untouched lets the harness reuse one
//! dataset across every repeated run.

use std::cmp::Ordering;

/// Signature shared by every algorithm in the registry.
pub type SortFn = fn(&[i64]) -> Vec<i64>;

/// Bubble sort over a copy of `input`.
///
/// Scans a range that shrinks by one each pass and stops as soon as a
/// full pass performs no swap, so already-sorted input finishes in a
/// single O(n) pass. Worst and average case remain O(n²).
pub fn bubble_sort(input: &[i64]) -> Vec<i64> {
    let mut a = input.to_vec();
    let n = a.len();

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    a
}

/// Recursive quicksort with a middle pivot and three-way partition.
///
/// Partitions into strictly-less, equal, and strictly-greater buckets and
/// concatenates the recursively sorted halves around the equal bucket.
/// Not in-place: each level allocates its partitions. The equal bucket
/// keeps duplicate-heavy input out of the quadratic worst case; the
/// middle pivot does the same for sorted and reversed input.
pub fn quicksort(input: &[i64]) -> Vec<i64> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let pivot = input[input.len() / 2];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for &x in input {
        match x.cmp(&pivot) {
            Ordering::Less => less.push(x),
            Ordering::Equal => equal.push(x),
            Ordering::Greater => greater.push(x),
        }
    }

    let mut sorted = quicksort(&less);
    sorted.extend_from_slice(&equal);
    sorted.extend(quicksort(&greater));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_non_decreasing(a: &[i64]) -> bool {
        a.windows(2).all(|w| w[0] <= w[1])
    }

    /// Sorted output must be a permutation of the input.
    fn assert_sorts(sort: SortFn, input: &[i64]) {
        let sorted = sort(input);
        assert!(is_non_decreasing(&sorted), "not sorted: {:?}", sorted);

        let mut expected = input.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected, "not a permutation of the input");
    }

    #[test]
    fn test_sorts_mixed_input() {
        let input = [5, 2, 8, 1, 9, 3, 7, 4, 6];
        assert_sorts(bubble_sort, &input);
        assert_sorts(quicksort, &input);
    }

    #[test]
    fn test_sorts_with_duplicates() {
        let input = [4, 1, 4, 4, 2, 2, 9, 1, 4];
        assert_sorts(bubble_sort, &input);
        assert_sorts(quicksort, &input);
    }

    #[test]
    fn test_sorts_negative_values() {
        let input = [0, -5, 3, -1, -5, 2];
        assert_sorts(bubble_sort, &input);
        assert_sorts(quicksort, &input);
    }

    #[test]
    fn test_empty_and_singleton() {
        assert_eq!(bubble_sort(&[]), Vec::<i64>::new());
        assert_eq!(quicksort(&[]), Vec::<i64>::new());
        assert_eq!(bubble_sort(&[7]), vec![7]);
        assert_eq!(quicksort(&[7]), vec![7]);
    }

    #[test]
    fn test_sorted_input_is_idempotent() {
        let input: Vec<i64> = (0..50).collect();
        assert_eq!(bubble_sort(&input), input);
        assert_eq!(quicksort(&input), input);
    }

    #[test]
    fn test_reversed_input() {
        let input: Vec<i64> = (1..=50).rev().collect();
        assert_sorts(bubble_sort, &input);
        assert_sorts(quicksort, &input);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![3, 1, 2];
        let before = input.clone();
        let _ = bubble_sort(&input);
        assert_eq!(input, before);
        let _ = quicksort(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_algorithms_agree() {
        let input: Vec<i64> = (0..200).map(|i| (i * 37) % 101).collect();
        assert_eq!(bubble_sort(&input), quicksort(&input));
    }
}
