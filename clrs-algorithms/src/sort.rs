/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! In-place comparison sorts.
//!
//! Every routine sorts in ascending order under `PartialOrd`. Incomparable elements
//! (such as `NaN`) never compare as out of order, so they leave the output in an
//! unspecified but memory-safe arrangement.

/// Sink the last element of `arr` into the sorted prefix `arr[..arr.len() - 1]`.
///
/// Only strictly greater elements are moved past, so equal elements keep their order.
fn insert_last<T: PartialOrd>(arr: &mut [T]) {
    let mut j = arr.len().saturating_sub(1);
    while j > 0 && arr[j - 1] > arr[j] {
        arr.swap(j - 1, j);
        j -= 1;
    }
}

/// Sort `arr` with insertion sort.
///
/// Stable. `O(n^2)` comparisons in the worst case, `O(n)` on sorted input.
///
/// ```
/// use clrs_algorithms::insertion_sort;
///
/// let mut arr = [5, 2, 4, 6, 1, 3];
/// insertion_sort(&mut arr);
/// assert_eq!(arr, [1, 2, 3, 4, 5, 6]);
/// ```
pub fn insertion_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        insert_last(&mut arr[..=i]);
    }
}

/// Sort `arr` with insertion sort, expressed recursively: sort the first `n - 1`
/// elements, then insert the last one.
///
/// Stable. Recursion depth is `arr.len()`.
pub fn recursive_insertion_sort<T: PartialOrd>(arr: &mut [T]) {
    let n = arr.len();
    if n <= 1 {
        return;
    }
    recursive_insertion_sort(&mut arr[..n - 1]);
    insert_last(arr);
}

/// Sort `arr` with selection sort.
///
/// Not stable. Always `O(n^2)` comparisons but at most `n - 1` swaps.
pub fn selection_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 0..arr.len().saturating_sub(1) {
        let mut min = i;
        for j in i + 1..arr.len() {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        arr.swap(i, min);
    }
}

/// Sort `arr` with bubble sort.
///
/// Stable. Pass `i` carries the smallest remaining element down to index `i`.
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in (i + 1..n).rev() {
            if arr[j] < arr[j - 1] {
                arr.swap(j, j - 1);
            }
        }
    }
}

/// Merge the sorted halves `arr[..mid]` and `arr[mid..]`.
///
/// Ties are taken from the left half.
fn merge<T: PartialOrd + Clone>(arr: &mut [T], mid: usize) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in arr.iter_mut() {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
        }
    }
}

/// Sort `arr` with top-down merge sort.
///
/// Stable. `O(n log n)` comparisons, `O(n)` scratch space per merge.
pub fn merge_sort<T: PartialOrd + Clone>(arr: &mut [T]) {
    let n = arr.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);
    merge(arr, mid);
}

///////////
// Tests //
///////////

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    use super::*;

    type Sorter = fn(&mut [i64]);

    const SORTERS: [(&str, Sorter); 5] = [
        ("insertion", insertion_sort),
        ("recursive_insertion", recursive_insertion_sort),
        ("selection", selection_sort),
        ("bubble", bubble_sort),
        ("merge", merge_sort),
    ];

    fn check(name: &str, sort: Sorter, input: &[i64]) {
        let mut got = input.to_vec();
        sort(&mut got);

        let mut expected = input.to_vec();
        expected.sort();
        assert_eq!(got, expected, "{name} failed on {input:?}");
    }

    #[test]
    fn sorts_edge_cases() {
        let cases: [&[i64]; 7] = [
            &[],
            &[42],
            &[2, 1],
            &[5, 2, 4, 6, 1, 3],
            &[3, 3, 1, 1, 2, 2, 3],
            &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[i64::MAX, i64::MIN, 0, -1, 1],
        ];
        for (name, sort) in SORTERS {
            for case in cases {
                check(name, sort, case);
            }
        }
    }

    #[rstest]
    fn sorts_random_inputs(#[values(3, 16, 17, 100)] len: usize) {
        let mut rng = StdRng::seed_from_u64(0x2024 + len as u64);
        for (name, sort) in SORTERS {
            let input: Vec<i64> = (0..len).map(|_| rng.random_range(-50..50)).collect();
            check(name, sort, &input);
        }
    }

    #[test]
    fn sorts_floats() {
        let mut arr = [0.5, -1.25, 3.0, 0.0, -0.5];
        merge_sort(&mut arr);
        assert_eq!(arr, [-1.25, -0.5, 0.0, 0.5, 3.0]);

        let mut arr = [0.5, -1.25, 3.0, 0.0, -0.5];
        insertion_sort(&mut arr);
        assert_eq!(arr, [-1.25, -0.5, 0.0, 0.5, 3.0]);
    }

    // Orders by `key` only so that the payload exposes the relative order of ties.
    #[derive(Debug, Clone, PartialEq)]
    struct Keyed {
        key: u8,
        payload: usize,
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    #[test]
    fn stable_sorts_keep_ties_in_order() {
        let stable: [(&str, fn(&mut [Keyed])); 4] = [
            ("insertion", insertion_sort),
            ("recursive_insertion", recursive_insertion_sort),
            ("bubble", bubble_sort),
            ("merge", merge_sort),
        ];

        let mut rng = StdRng::seed_from_u64(11);
        let input: Vec<Keyed> = (0..64)
            .map(|payload| Keyed {
                key: rng.random_range(0..4),
                payload,
            })
            .collect();

        for (name, sort) in stable {
            let mut arr = input.clone();
            sort(&mut arr);
            for pair in arr.windows(2) {
                assert!(pair[0].key <= pair[1].key, "{name} is not sorted");
                if pair[0].key == pair[1].key {
                    assert!(pair[0].payload < pair[1].payload, "{name} is not stable");
                }
            }
        }
    }

    #[test]
    fn merge_takes_ties_from_the_left() {
        let mut arr = vec![
            Keyed { key: 1, payload: 0 },
            Keyed { key: 2, payload: 1 },
            Keyed { key: 1, payload: 2 },
            Keyed { key: 2, payload: 3 },
        ];
        merge(&mut arr, 2);
        let payloads: Vec<usize> = arr.iter().map(|k| k.payload).collect();
        assert_eq!(payloads, [0, 2, 1, 3]);
    }
}
