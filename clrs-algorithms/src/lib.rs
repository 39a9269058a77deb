/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Elementary algorithms over slices: comparison sorts, linear search, summation,
//! polynomial evaluation and normal random vectors.

#![cfg_attr(
    not(test),
    warn(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

pub mod numeric;
pub use numeric::{horner, sum_array, sum_array_with};

pub mod random;
pub use random::{randn, randn_with, RandomError};

pub mod search;
pub use search::linear_search;

pub mod sort;
pub use sort::{bubble_sort, insertion_sort, merge_sort, recursive_insertion_sort, selection_sort};
