/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::fmt;

use thiserror::Error;

use crate::views::DenseData;

/// Returned by the checked accessors (`at`, `at_mut`) when `(row, col)` lies outside the
/// logical dimensions of the matrix or view.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
#[error("index ({row}, {col}) is out of bounds for a matrix with {nrows} rows and {ncols} columns")]
pub struct IndexOutOfBounds {
    pub row: usize,
    pub col: usize,
    pub nrows: usize,
    pub ncols: usize,
}

impl IndexOutOfBounds {
    pub(crate) fn new(row: usize, col: usize, nrows: usize, ncols: usize) -> Self {
        Self {
            row,
            col,
            nrows,
            ncols,
        }
    }
}

/// Returned when a requested sub-rectangle is not fully contained in the matrix (or view)
/// it is carved from.
///
/// The parent dimensions are those of the immediate parent, not of the root matrix.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
#[error(
    "tried to view {nrows} rows and {ncols} columns starting at ({row_start}, {col_start}) \
     of a matrix with {parent_nrows} rows and {parent_ncols} columns"
)]
pub struct ViewOutOfBounds {
    pub row_start: usize,
    pub col_start: usize,
    pub nrows: usize,
    pub ncols: usize,
    pub parent_nrows: usize,
    pub parent_ncols: usize,
}

/// Check that the window `[row_start, row_start + nrows) x [col_start, col_start + ncols)`
/// fits inside a parent of dimensions `parent`.
pub(crate) fn check_window(
    parent: (usize, usize),
    row_start: usize,
    col_start: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), ViewOutOfBounds> {
    let fits = |start: usize, len: usize, max: usize| {
        start.checked_add(len).is_some_and(|end| end <= max)
    };

    if fits(row_start, nrows, parent.0) && fits(col_start, ncols, parent.1) {
        Ok(())
    } else {
        Err(ViewOutOfBounds {
            row_start,
            col_start,
            nrows,
            ncols,
            parent_nrows: parent.0,
            parent_ncols: parent.1,
        })
    }
}

/// Returned when `nrows * ncols` elements cannot be represented, either because the
/// product overflows `usize` or because the allocation would exceed `isize::MAX` bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
#[error("a matrix with {nrows} rows and {ncols} columns exceeds the maximum allocation size")]
pub struct CapacityOverflow {
    pub nrows: usize,
    pub ncols: usize,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
#[error(
    "tried to construct a matrix with {nrows} rows and {ncols} columns over a slice \
     of length {len}"
)]
pub struct TryFromErrorLight {
    pub len: usize,
    pub nrows: usize,
    pub ncols: usize,
}

/// Returned when a dense buffer does not hold exactly `nrows * ncols` elements.
///
/// The buffer is handed back through [`TryFromError::into_inner`].
#[derive(Error)]
#[non_exhaustive]
#[error(
    "tried to construct a matrix with {nrows} rows and {ncols} columns over a slice \
     of length {}", data.as_slice().len()
)]
pub struct TryFromError<T: DenseData> {
    data: T,
    nrows: usize,
    ncols: usize,
}

// Manually implement `fmt::Debug` so we don't require `T::Debug`.
impl<T: DenseData> fmt::Debug for TryFromError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFromError")
            .field("data_len", &self.data.as_slice().len())
            .field("nrows", &self.nrows)
            .field("ncols", &self.ncols)
            .finish()
    }
}

impl<T: DenseData> TryFromError<T> {
    pub(crate) fn new(data: T, nrows: usize, ncols: usize) -> Self {
        Self { data, nrows, ncols }
    }

    /// Consume the error and return the base data.
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Return a `'static` equivalent of this error that no longer holds the data.
    pub fn as_static(&self) -> TryFromErrorLight {
        TryFromErrorLight {
            len: self.data.as_slice().len(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

/// Union of the matrix errors for callers that funnel everything through `?`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatrixError {
    #[error(transparent)]
    IndexOutOfBounds(#[from] IndexOutOfBounds),
    #[error(transparent)]
    ViewOutOfBounds(#[from] ViewOutOfBounds),
    #[error(transparent)]
    CapacityOverflow(#[from] CapacityOverflow),
    #[error(transparent)]
    TryFrom(#[from] TryFromErrorLight),
}

impl<T: DenseData> From<TryFromError<T>> for MatrixError {
    fn from(err: TryFromError<T>) -> Self {
        Self::TryFrom(err.as_static())
    }
}

///////////
// Tests //
///////////
