/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::io::Write;

use clrs_algorithms::{linear_search, randn_with, sum_array};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::utils::{SortAlgorithm, ToolError, ToolResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chapter2Params {
    pub len: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// Seed for the random number generator. A fresh seed is drawn when absent.
    pub seed: Option<u64>,
    pub algorithm: SortAlgorithm,
}

impl Default for Chapter2Params {
    fn default() -> Self {
        Self {
            len: 10,
            mean: 0.0,
            std_dev: 1.0,
            seed: None,
            algorithm: SortAlgorithm::default(),
        }
    }
}

/// Generate a normal random array, sort it, sum it and search it, writing each step to
/// `out`.
///
/// Returns the sorted array.
pub fn run_chapter2<W: Write>(out: &mut W, params: &Chapter2Params) -> ToolResult<Vec<f64>> {
    if params.len == 0 {
        return Err(ToolError::new("the array length must be positive"));
    }
    if !params.mean.is_finite() {
        return Err(ToolError::new(format!(
            "the mean must be finite, but got {}",
            params.mean
        )));
    }

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut arr = randn_with(&mut rng, params.mean, params.std_dev, params.len)?;
    info!(
        len = params.len,
        mean = params.mean,
        std_dev = params.std_dev,
        "generated random array"
    );
    writeln!(out, "Input: {arr:?}")?;
    if arr.iter().any(|x| !x.is_finite()) {
        return Err(ToolError::new(
            "the generated values overflowed, reduce the mean or standard deviation",
        ));
    }

    params.algorithm.sort(&mut arr);
    info!(algorithm = %params.algorithm, "sorted array");
    writeln!(out, "Sorted ({}): {arr:?}", params.algorithm)?;

    writeln!(out, "Sum of array elements: {}", sum_array(&arr))?;

    // One target taken from the array and the next float above its maximum.
    let present = arr[arr.len() / 2];
    let absent = arr[arr.len() - 1].next_up();
    for target in [present, absent] {
        let found = linear_search(&arr, &target);
        debug!(value = target, ?found, "linear search");
        match found {
            Some(i) => writeln!(out, "Found {target} at index {i}")?,
            None => writeln!(out, "{target} not found")?,
        }
    }

    Ok(arr)
}
