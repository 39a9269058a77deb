/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! A dense, row-major 2D matrix with bounds-checked access and borrowed sub-rectangle
//! views.
//!
//! ```
//! use clrs_utils::Matrix;
//!
//! let mut m = Matrix::<i32>::zeros(3, 4).unwrap();
//! m[(1, 2)] = 5;
//!
//! let v = m.view(1, 1, 2, 2).unwrap();
//! assert_eq!(v[(0, 1)], 5);
//! assert!(v.at(2, 0).is_err());
//! ```

#![cfg_attr(
    not(test),
    warn(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

pub mod error;
pub use error::{
    CapacityOverflow, IndexOutOfBounds, MatrixError, TryFromError, TryFromErrorLight,
    ViewOutOfBounds,
};

pub mod matrix;
pub use matrix::{Generator, Init, Matrix};

// Views
pub mod views;
pub use views::{DenseData, MatrixView, MatrixViewBase, MatrixViewMut, MutDenseData};
