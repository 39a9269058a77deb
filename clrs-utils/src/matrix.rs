/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::{
    alloc::Layout,
    fmt,
    ops::{Index, IndexMut},
};

#[cfg(feature = "rayon")]
use rayon::prelude::{IndexedParallelIterator, ParallelSlice, ParallelSliceMut};

use crate::{
    error::{CapacityOverflow, IndexOutOfBounds, TryFromError, ViewOutOfBounds},
    views::{MatrixView, MatrixViewBase, MatrixViewMut},
};

/// A generator for initializing the entries in a matrix via `Matrix::new`.
pub trait Generator<T> {
    fn generate(&mut self) -> T;
}

impl<T> Generator<T> for T
where
    T: Clone,
{
    fn generate(&mut self) -> T {
        self.clone()
    }
}

/// A matrix initializer that invokes the provided lambda to initialize each element.
pub struct Init<F>(pub F);

impl<T, F> Generator<T> for Init<F>
where
    F: FnMut() -> T,
{
    fn generate(&mut self) -> T {
        (self.0)()
    }
}

/// Return the number of elements in a `nrows x ncols` matrix of `T`, provided both the
/// element count and the byte size of such an allocation are representable.
fn checked_len<T>(nrows: usize, ncols: usize) -> Result<usize, CapacityOverflow> {
    nrows
        .checked_mul(ncols)
        .filter(|&len| Layout::array::<T>(len).is_ok())
        .ok_or(CapacityOverflow { nrows, ncols })
}

////////////
// Matrix //
////////////

/// An owning, 2-dimensional matrix stored contiguously in row-major order.
///
/// Entry `(row, col)` lives at linear offset `row * ncols + col` of the buffer. The buffer
/// may hold more elements than `nrows * ncols`: its length is the *capacity* of the matrix,
/// which only ever grows (see [`Matrix::resize`]).
///
/// Read-only and mutable windows over a sub-rectangle are obtained with [`Matrix::view`]
/// and [`Matrix::view_mut`]. Views borrow the matrix, so it cannot be resized or dropped
/// while one is alive:
///
/// ```compile_fail
/// use clrs_utils::Matrix;
///
/// let mut m = Matrix::<i32>::zeros(3, 3).unwrap();
/// let v = m.view(0, 0, 2, 2).unwrap();
/// m.resize(4, 4).unwrap();
/// assert_eq!(v[(0, 0)], 0);
/// ```
#[derive(Clone)]
pub struct Matrix<T> {
    data: Box<[T]>,
    nrows: usize,
    ncols: usize,
}

impl<T> Matrix<T> {
    /// Construct a new matrix initialized with the contents of the generator.
    ///
    /// Elements are initialized in memory order. Any `Clone` value is a generator that
    /// fills every entry with a copy of itself:
    ///
    /// ```
    /// use clrs_utils::{Init, Matrix};
    ///
    /// let m = Matrix::new(7u32, 2, 3).unwrap();
    /// assert!(m.as_slice().iter().all(|&x| x == 7));
    ///
    /// let mut i = 0;
    /// let m = Matrix::new(Init(|| { i += 1; i }), 2, 2).unwrap();
    /// assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    /// ```
    ///
    /// Returns an error if `nrows * ncols` elements of `T` cannot be allocated.
    pub fn new<U>(mut generator: U, nrows: usize, ncols: usize) -> Result<Self, CapacityOverflow>
    where
        U: Generator<T>,
    {
        let len = checked_len::<T>(nrows, ncols)?;
        let data: Box<[T]> = (0..len).map(|_| generator.generate()).collect();
        debug_assert_eq!(data.len(), len);
        Ok(Self { data, nrows, ncols })
    }

    /// Construct a matrix with every entry set to `T::default()`.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, CapacityOverflow>
    where
        T: Default,
    {
        Self::new(Init(T::default), nrows, ncols)
    }

    /// Try to construct a `Matrix` over the provided buffer. If the length of the buffer
    /// is not equal to `nrows * ncols`, return a `TryFromError` containing the buffer.
    pub fn try_from(
        data: Box<[T]>,
        nrows: usize,
        ncols: usize,
    ) -> Result<Self, TryFromError<Box<[T]>>> {
        if nrows.checked_mul(ncols) == Some(data.len()) {
            Ok(Self { data, nrows, ncols })
        } else {
            Err(TryFromError::new(data, nrows, ncols))
        }
    }

    /// Callers must ensure `nrows * ncols <= data.len()`.
    pub(crate) fn from_raw_parts(data: Box<[T]>, nrows: usize, ncols: usize) -> Self {
        debug_assert!(nrows * ncols <= data.len());
        Self { data, nrows, ncols }
    }

    /// Return the number of rows in the matrix.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns in the matrix.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return `(nrows, ncols)`.
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Return the number of elements held by the underlying buffer.
    ///
    /// This is always at least `nrows * ncols`.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    fn len(&self) -> usize {
        self.nrows * self.ncols
    }

    /// Return the `nrows * ncols` logical entries as a slice in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len()]
    }

    /// Return the `nrows * ncols` logical entries as a mutable slice in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        &mut self.data[..len]
    }

    /// Return a reference to entry `(row, col)` if it is in-bounds. Otherwise, return
    /// `None`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.nrows && col < self.ncols {
            // SAFETY: We have checked that `row` and `col` are in-bounds.
            Some(unsafe { self.get_unchecked(row, col) })
        } else {
            None
        }
    }

    /// Return a mutable reference to entry `(row, col)` if it is in-bounds. Otherwise,
    /// return `None`.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.nrows && col < self.ncols {
            // SAFETY: We have checked that `row` and `col` are in-bounds.
            Some(unsafe { self.get_unchecked_mut(row, col) })
        } else {
            None
        }
    }

    /// Returns a reference to an element without boundschecking.
    ///
    /// # Safety
    ///
    /// The following conditions must hold to avoid undefined behavior:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.nrows);
        debug_assert!(col < self.ncols);
        // SAFETY: `row * ncols + col < nrows * ncols <= capacity`.
        unsafe { self.data.get_unchecked(row * self.ncols + col) }
    }

    /// Returns a mutable reference to an element without boundschecking.
    ///
    /// # Safety
    ///
    /// The following conditions must hold to avoid undefined behavior:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        let ncols = self.ncols;
        debug_assert!(row < self.nrows);
        debug_assert!(col < self.ncols);
        // SAFETY: `row * ncols + col < nrows * ncols <= capacity`.
        unsafe { self.data.get_unchecked_mut(row * ncols + col) }
    }

    /// Return a reference to entry `(row, col)`, or an error if it is out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(row, col)
            .ok_or_else(|| IndexOutOfBounds::new(row, col, self.nrows, self.ncols))
    }

    /// Return a mutable reference to entry `(row, col)`, or an error if it is out of
    /// bounds.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, IndexOutOfBounds> {
        let (nrows, ncols) = self.size();
        self.get_mut(row, col)
            .ok_or_else(|| IndexOutOfBounds::new(row, col, nrows, ncols))
    }

    /// Return row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.nrows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.nrows(),
            "tried to access row {row} of a matrix with {} rows",
            self.nrows()
        );

        let start = row * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Return row `row` if `row < self.nrows()`. Otherwise, return `None`.
    pub fn get_row(&self, row: usize) -> Option<&[T]> {
        if row < self.nrows() {
            Some(self.row(row))
        } else {
            None
        }
    }

    /// Return row `row` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.nrows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(
            row < self.nrows(),
            "tried to access row {row} of a matrix with {} rows",
            self.nrows()
        );

        let ncols = self.ncols;
        let start = row * ncols;
        &mut self.data[start..start + ncols]
    }

    /// Return a iterator over all rows in the matrix.
    ///
    /// Rows are yielded sequentially beginning with row 0.
    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &[T]> {
        self.as_view().into_rows()
    }

    /// Return a mutable iterator over all rows in the matrix.
    ///
    /// Rows are yielded sequentially beginning with row 0.
    pub fn row_iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [T]> {
        self.as_mut_view().into_rows_mut()
    }

    /// Return a parallel iterator over the rows of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `self.ncols() == 0`.
    #[cfg(feature = "rayon")]
    pub fn par_row_iter(&self) -> impl IndexedParallelIterator<Item = &[T]>
    where
        T: Sync,
    {
        assert!(self.ncols != 0, "par_row_iter requires at least one column");
        self.as_slice().par_chunks_exact(self.ncols)
    }

    /// Return a parallel iterator over the mutable rows of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `self.ncols() == 0`.
    #[cfg(feature = "rayon")]
    pub fn par_row_iter_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [T]>
    where
        T: Send,
    {
        let ncols = self.ncols;
        assert!(ncols != 0, "par_row_iter_mut requires at least one column");
        self.as_mut_slice().par_chunks_exact_mut(ncols)
    }

    /// Return a read-only view over the whole matrix.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixViewBase::from_parts(self.as_slice(), self.ncols, self.nrows, self.ncols, 0, 0)
    }

    /// Return a mutable view over the whole matrix.
    pub fn as_mut_view(&mut self) -> MatrixViewMut<'_, T> {
        let (nrows, ncols) = self.size();
        MatrixViewBase::from_parts(self.as_mut_slice(), ncols, nrows, ncols, 0, 0)
    }

    /// Return a read-only view of the `nrows x ncols` sub-rectangle whose top-left corner
    /// is `(row_start, col_start)`.
    ///
    /// Returns an error if the rectangle is not fully contained in the matrix.
    pub fn view(
        &self,
        row_start: usize,
        col_start: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<MatrixView<'_, T>, ViewOutOfBounds> {
        self.as_view().into_view(row_start, col_start, nrows, ncols)
    }

    /// Return a mutable view of the `nrows x ncols` sub-rectangle whose top-left corner
    /// is `(row_start, col_start)`.
    ///
    /// Returns an error if the rectangle is not fully contained in the matrix.
    pub fn view_mut(
        &mut self,
        row_start: usize,
        col_start: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<MatrixViewMut<'_, T>, ViewOutOfBounds> {
        self.as_mut_view()
            .into_view(row_start, col_start, nrows, ncols)
    }

    /// Return a new `ncols x nrows` matrix with `result[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        self.as_view().transpose()
    }

    /// Change the logical dimensions to `nrows x ncols`.
    ///
    /// If the new element count exceeds the capacity, the buffer grows to exactly the new
    /// count: every previously stored element keeps its linear offset and the new tail is
    /// filled with `T::default()`. Otherwise, only the dimensions change. The capacity
    /// never shrinks.
    ///
    /// # Stride
    ///
    /// Data is **not** re-laid-out. Entries keep their linear offset, so when `ncols`
    /// changes they show up at different `(row, col)` positions:
    ///
    /// ```
    /// use clrs_utils::{Init, Matrix};
    ///
    /// let mut i = 0;
    /// let mut m = Matrix::new(Init(|| { i += 1; i }), 2, 3).unwrap();
    /// m.resize(3, 2).unwrap();
    /// assert_eq!(m.row(1), &[3, 4]);
    /// ```
    ///
    /// Use [`Matrix::resize_preserving`] to keep entries at their `(row, col)` position.
    ///
    /// Returns an error (leaving the matrix unchanged) if `nrows * ncols` elements of `T`
    /// cannot be allocated.
    pub fn resize(&mut self, nrows: usize, ncols: usize) -> Result<(), CapacityOverflow>
    where
        T: Default,
    {
        let len = checked_len::<T>(nrows, ncols)?;
        if len > self.capacity() {
            // Build the tail before touching `self.data` so a panicking `T::default()`
            // leaves the matrix as it was.
            let tail: Vec<T> = (self.capacity()..len).map(|_| T::default()).collect();
            let mut data = std::mem::take(&mut self.data).into_vec();
            data.reserve_exact(tail.len());
            data.extend(tail);
            self.data = data.into_boxed_slice();
        }
        self.nrows = nrows;
        self.ncols = ncols;
        Ok(())
    }

    /// Change the logical dimensions to `nrows x ncols`, keeping every entry in the
    /// overlap of the old and new shapes at its `(row, col)` position.
    ///
    /// Entries outside the overlap are set to `T::default()`. The capacity is the larger
    /// of the old capacity and `nrows * ncols`.
    ///
    /// Returns an error (leaving the matrix unchanged) if `nrows * ncols` elements of `T`
    /// cannot be allocated.
    pub fn resize_preserving(&mut self, nrows: usize, ncols: usize) -> Result<(), CapacityOverflow>
    where
        T: Default,
    {
        let len = checked_len::<T>(nrows, ncols)?;
        let mut data: Box<[T]> = (0..self.capacity().max(len))
            .map(|_| T::default())
            .collect();

        let keep = self.ncols.min(ncols);
        for row in 0..self.nrows.min(nrows) {
            let src = &mut self.row_mut(row)[..keep];
            let start = row * ncols;
            data[start..start + keep].swap_with_slice(src);
        }

        self.data = data;
        self.nrows = nrows;
        self.ncols = ncols;
        Ok(())
    }
}

/// An empty `0 x 0` matrix with no capacity. This is also what `std::mem::take` leaves
/// behind.
impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: Box::default(),
            nrows: 0,
            ncols: 0,
        }
    }
}

impl<'a, T> From<&'a Matrix<T>> for MatrixView<'a, T> {
    fn from(matrix: &'a Matrix<T>) -> Self {
        matrix.as_view()
    }
}

impl<'a, T> From<&'a mut Matrix<T>> for MatrixViewMut<'a, T> {
    fn from(matrix: &'a mut Matrix<T>) -> Self {
        matrix.as_mut_view()
    }
}

/// Return a reference to the item at entry `(row, col)` in the matrix.
///
/// # Panics
///
/// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.nrows(),
            "row {row} is out of bounds (max: {})",
            self.nrows()
        );
        assert!(
            col < self.ncols(),
            "col {col} is out of bounds (max: {})",
            self.ncols()
        );

        // SAFETY: We have checked that `row` and `col` are in-bounds.
        unsafe { self.get_unchecked(row, col) }
    }
}

/// Return a mutable reference to the item at entry `(row, col)` in the matrix.
///
/// # Panics
///
/// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.nrows(),
            "row {row} is out of bounds (max: {})",
            self.nrows()
        );
        assert!(
            col < self.ncols(),
            "col {col} is out of bounds (max: {})",
            self.ncols()
        );

        // SAFETY: We have checked that `row` and `col` are in-bounds.
        unsafe { self.get_unchecked_mut(row, col) }
    }
}

// Entries beyond `nrows * ncols` are leftovers of earlier shapes and take no part in
// equality or formatting.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("nrows", &self.nrows)
            .field("ncols", &self.ncols)
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

///////////
// Tests //
///////////
