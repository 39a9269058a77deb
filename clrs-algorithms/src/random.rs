/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::fmt::Display;

use num_traits::Float;
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RandomError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Generate `n` samples from the normal distribution with the given mean and standard
/// deviation, using the thread-local generator.
///
/// Returns an error if `std_dev` is not positive and finite.
pub fn randn<T>(mean: T, std_dev: T, n: usize) -> Result<Vec<T>, RandomError>
where
    T: Float + Display,
    StandardNormal: Distribution<T>,
{
    randn_with(&mut rand::rng(), mean, std_dev, n)
}

/// Like [`randn`], but draws from `rng`. Passing a seeded generator makes the output
/// reproducible.
pub fn randn_with<T, R>(rng: &mut R, mean: T, std_dev: T, n: usize) -> Result<Vec<T>, RandomError>
where
    T: Float + Display,
    R: Rng + ?Sized,
    StandardNormal: Distribution<T>,
{
    // Written so that `NaN` is rejected as well.
    if !(std_dev > T::zero() && std_dev.is_finite()) {
        return Err(RandomError::InvalidArgument(format!(
            "the standard deviation must be positive and finite, but got {std_dev}"
        )));
    }
    let normal =
        Normal::new(mean, std_dev).map_err(|err| RandomError::InvalidArgument(err.to_string()))?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}
