/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::ops::{Add, Mul};

use num_traits::Zero;

/// Return the sum of the elements of `arr`, starting from zero.
pub fn sum_array<T>(arr: &[T]) -> T
where
    T: Zero + Clone,
{
    sum_array_with(arr, T::zero())
}

/// Return `initial` plus the sum of the elements of `arr`, accumulated left to right.
pub fn sum_array_with<T>(arr: &[T], initial: T) -> T
where
    T: Add<Output = T> + Clone,
{
    arr.iter().cloned().fold(initial, |acc, x| acc + x)
}

/// Evaluate the polynomial `a[0] + a[1] x + ... + a[n] x^n` at `x` using Horner's method.
///
/// An empty coefficient list is the zero polynomial.
///
/// ```
/// use clrs_algorithms::horner;
///
/// // 1 + 2x + 3x^2 at x = 2
/// assert_eq!(horner(&[1.0, 2.0, 3.0], 2.0), 17.0);
/// ```
pub fn horner<T>(coefficients: &[T], x: T) -> T
where
    T: Zero + Mul<Output = T> + Copy,
{
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}
