/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::fmt;

use clap::ValueEnum;
use clrs_algorithms::{
    bubble_sort, insertion_sort, merge_sort, recursive_insertion_sort, selection_sort,
};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum SortAlgorithm {
    /// Iterative insertion sort.
    #[default]
    Insertion,

    /// Selection sort.
    Selection,

    /// Top-down merge sort.
    Merge,

    /// Bubble sort.
    Bubble,

    /// Insertion sort written recursively.
    RecursiveInsertion,
}

impl SortAlgorithm {
    /// Sort `arr` in ascending order with this algorithm.
    pub fn sort<T: PartialOrd + Clone>(self, arr: &mut [T]) {
        match self {
            Self::Insertion => insertion_sort(arr),
            Self::Selection => selection_sort(arr),
            Self::Merge => merge_sort(arr),
            Self::Bubble => bubble_sort(arr),
            Self::RecursiveInsertion => recursive_insertion_sort(arr),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Bubble => "bubble",
            Self::RecursiveInsertion => "recursive-insertion",
        };
        f.write_str(name)
    }
}
