/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

/// Return the index of the first element of `arr` equal to `target`, or `None` if there
/// is no such element.
///
/// ```
/// use clrs_algorithms::linear_search;
///
/// assert_eq!(linear_search(&[4, 7, 7, 1], &7), Some(1));
/// assert_eq!(linear_search(&[4, 7, 7, 1], &3), None);
/// ```
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|x| x == target)
}
