/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{
    error::{check_window, IndexOutOfBounds, TryFromError, ViewOutOfBounds},
    matrix::Matrix,
};

/// View types need both immutable and mutable variants.
///
/// This trait is implemented by wrappers for immutable and mutable slice references,
/// allowing a common code path for [`MatrixView`] and [`MatrixViewMut`].
///
/// # Safety
///
/// This trait is unsafe because it requires `as_slice` to be idempotent (and unsafe code
/// relies on this).
///
/// In other words: `as_slice` must **always** return the same slice with the same length.
pub unsafe trait DenseData {
    type Elem;

    /// Return the underlying data as a slice.
    fn as_slice(&self) -> &[Self::Elem];
}

/// A mutable companion to `DenseData`.
///
/// # Safety
///
/// Same idempotency requirement as [`DenseData`]. Additionally, the returned slice must
/// span the exact same memory as `as_slice`.
pub unsafe trait MutDenseData: DenseData {
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];
}

// SAFETY: This fulfills the idempotency requirement.
unsafe impl<T> DenseData for &[T] {
    type Elem = T;
    fn as_slice(&self) -> &[Self::Elem] {
        self
    }
}

// SAFETY: This fulfills the idempotency requirement.
unsafe impl<T> DenseData for &mut [T] {
    type Elem = T;
    fn as_slice(&self) -> &[Self::Elem] {
        self
    }
}

// SAFETY: This fulfills the idempotency requirement and returns a slice spanning the same
// range as `as_slice`.
unsafe impl<T> MutDenseData for &mut [T] {
    fn as_mut_slice(&mut self) -> &mut [Self::Elem] {
        self
    }
}

// SAFETY: This fulfills the idempotency requirement.
unsafe impl<T> DenseData for Box<[T]> {
    type Elem = T;
    fn as_slice(&self) -> &[Self::Elem] {
        self
    }
}

// SAFETY: This fulfills the idempotency requirement and returns a slice spanning the same
// memory as `as_slice`.
unsafe impl<T> MutDenseData for Box<[T]> {
    fn as_mut_slice(&mut self) -> &mut [Self::Elem] {
        self
    }
}

/////////////////
// Matrix View //
/////////////////

/// A rectangular window over the row-major storage of a root [`Matrix`].
///
/// ```text
///          |<--------- stride ---------->|
/// row 0 -> | a0 a1   a2 a3 a4   a5 a6 a7 |
///                 +----------+                ^
/// row 1 -> | b0 b1 | b2 b3 b4 | b5 b6 b7 |    |
/// row 2 -> | c0 c1 | c2 c3 c4 | c5 c6 c7 |  nrows
///                 +----------+                v
/// row 3 -> | d0 d1   d2 d3 d4   d5 d6 d7 |
/// ```
///
/// Above, the view has `row_offset = 1`, `col_offset = 2`, `nrows = 2` and `ncols = 3`
/// over a root matrix with 8 columns.
///
/// The data held by a view is always the *whole* dense region of the root matrix and the
/// offsets are relative to the root. Carving a sub-view out of a view therefore just adds
/// offsets, no matter how deeply views are nested.
///
/// The view borrows the root matrix: it cannot outlive it, and the root cannot be
/// resized (or otherwise mutated) while a view is alive.
///
/// Entry `(row, col)` of the view is located at linear offset
/// `(row_offset + row) * stride + col_offset + col` of the underlying data.
#[derive(Clone, Copy)]
pub struct MatrixViewBase<T>
where
    T: DenseData,
{
    data: T,
    // Column count of the root matrix.
    stride: usize,
    nrows: usize,
    ncols: usize,
    row_offset: usize,
    col_offset: usize,
}

/// A read-only window over a matrix. This type is `Copy`.
pub type MatrixView<'a, T> = MatrixViewBase<&'a [T]>;

/// A mutable window over a matrix.
///
/// Mutable views hand out mutable sub-views through [`MatrixViewBase::view_mut`], which
/// reborrows the view for the lifetime of the sub-view.
pub type MatrixViewMut<'a, T> = MatrixViewBase<&'a mut [T]>;

impl<T> MatrixViewBase<T>
where
    T: DenseData,
{
    /// Construct a view from its raw geometry.
    ///
    /// Callers must guarantee:
    /// * `col_offset + ncols <= stride`.
    /// * `(row_offset + nrows) * stride <= data.as_slice().len()` whenever `nrows != 0`.
    pub(crate) fn from_parts(
        data: T,
        stride: usize,
        nrows: usize,
        ncols: usize,
        row_offset: usize,
        col_offset: usize,
    ) -> Self {
        debug_assert!(col_offset + ncols <= stride || ncols == 0);
        debug_assert!(nrows == 0 || (row_offset + nrows) * stride <= data.as_slice().len());
        Self {
            data,
            stride,
            nrows,
            ncols,
            row_offset,
            col_offset,
        }
    }

    /// Try to construct a view spanning all of `data`, interpreting it as a dense
    /// row-major matrix.
    ///
    /// The length of `data` must be equal to `nrows * ncols`.
    pub fn try_from(data: T, nrows: usize, ncols: usize) -> Result<Self, TryFromError<T>> {
        let len = data.as_slice().len();
        if nrows.checked_mul(ncols) == Some(len) {
            Ok(Self::from_parts(data, ncols, nrows, ncols, 0, 0))
        } else {
            Err(TryFromError::new(data, nrows, ncols))
        }
    }

    /// Return the number of rows in the view.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns in the view.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return `(nrows, ncols)`.
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Return the row of the root matrix that holds row 0 of this view.
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Return the column of the root matrix that holds column 0 of this view.
    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    #[inline]
    fn linear_offset(&self, row: usize, col: usize) -> usize {
        (self.row_offset + row) * self.stride + self.col_offset + col
    }

    /// Return a reference to entry `(row, col)` if it is in-bounds. Otherwise, return
    /// `None`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T::Elem> {
        if row < self.nrows && col < self.ncols {
            // SAFETY: We have checked that `row` and `col` are in-bounds.
            Some(unsafe { self.get_unchecked(row, col) })
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
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T::Elem {
        debug_assert!(row < self.nrows);
        debug_assert!(col < self.ncols);
        let offset = self.linear_offset(row, col);
        // SAFETY: The construction invariants place every in-bounds `(row, col)` inside
        // the underlying slice.
        unsafe { self.data.as_slice().get_unchecked(offset) }
    }

    /// Return a reference to entry `(row, col)`, or an error if it is out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Result<&T::Elem, IndexOutOfBounds> {
        let (nrows, ncols) = self.size();
        self.get(row, col)
            .ok_or_else(|| IndexOutOfBounds::new(row, col, nrows, ncols))
    }

    /// Return row `row` of the view as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.nrows()`.
    pub fn row(&self, row: usize) -> &[T::Elem] {
        assert!(
            row < self.nrows(),
            "tried to access row {row} of a matrix with {} rows",
            self.nrows()
        );

        // SAFETY: `row` is in-bounds.
        unsafe { self.get_row_unchecked(row) }
    }

    /// Return row `row` if `row < self.nrows()`. Otherwise, return `None`.
    pub fn get_row(&self, row: usize) -> Option<&[T::Elem]> {
        if row < self.nrows() {
            // SAFETY: `row` is in-bounds.
            Some(unsafe { self.get_row_unchecked(row) })
        } else {
            None
        }
    }

    /// Returns the requested row without boundschecking.
    ///
    /// # Safety
    ///
    /// The following conditions must hold to avoid undefined behavior:
    /// * `row < self.nrows()`.
    pub unsafe fn get_row_unchecked(&self, row: usize) -> &[T::Elem] {
        debug_assert!(row < self.nrows);
        let start = self.linear_offset(row, 0);
        let ncols = self.ncols;

        debug_assert!(start + ncols <= self.data.as_slice().len());
        // SAFETY: The idempotency requirement of `as_slice` and our audited constructors
        // mean that the row lies entirely inside the slice.
        unsafe { self.data.as_slice().get_unchecked(start..start + ncols) }
    }

    /// Return an iterator over all rows in the view.
    ///
    /// Rows are yielded sequentially beginning with row 0.
    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &[T::Elem]> {
        self.as_view().into_rows()
    }

    /// Return a read-only view with the same geometry.
    pub fn as_view(&self) -> MatrixView<'_, T::Elem> {
        MatrixViewBase {
            data: self.data.as_slice(),
            stride: self.stride,
            nrows: self.nrows,
            ncols: self.ncols,
            row_offset: self.row_offset,
            col_offset: self.col_offset,
        }
    }

    /// Consume this view and return the sub-window with `nrows` rows and `ncols` columns
    /// beginning at `(row_start, col_start)` of this view.
    ///
    /// Bounds are checked against this view; the offsets of the returned view are
    /// relative to the root matrix.
    pub fn into_view(
        self,
        row_start: usize,
        col_start: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<Self, ViewOutOfBounds> {
        check_window(self.size(), row_start, col_start, nrows, ncols)?;
        Ok(Self {
            data: self.data,
            stride: self.stride,
            nrows,
            ncols,
            row_offset: self.row_offset + row_start,
            col_offset: self.col_offset + col_start,
        })
    }

    /// Return a read-only sub-view of this view.
    ///
    /// See [`MatrixViewBase::into_view`] for how bounds are checked.
    pub fn view(
        &self,
        row_start: usize,
        col_start: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<MatrixView<'_, T::Elem>, ViewOutOfBounds> {
        self.as_view().into_view(row_start, col_start, nrows, ncols)
    }

    /// Copy the contents of the view into a new, densely packed [`Matrix`].
    pub fn to_owned(&self) -> Matrix<T::Elem>
    where
        T::Elem: Clone,
    {
        let data: Box<[T::Elem]> = self.row_iter().flat_map(|row| row.iter().cloned()).collect();
        Matrix::from_raw_parts(data, self.nrows, self.ncols)
    }

    /// Return a new matrix with `result[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Matrix<T::Elem>
    where
        T::Elem: Clone,
    {
        let (nrows, ncols) = self.size();
        let data: Box<[T::Elem]> = (0..ncols)
            .flat_map(|col| {
                // SAFETY: `row < nrows` and `col < ncols`.
                (0..nrows).map(move |row| unsafe { self.get_unchecked(row, col) }.clone())
            })
            .collect();
        Matrix::from_raw_parts(data, ncols, nrows)
    }

    ////////////////////
    // Mutable access //
    ////////////////////

    /// Return a mutable reference to entry `(row, col)` if it is in-bounds. Otherwise,
    /// return `None`.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T::Elem>
    where
        T: MutDenseData,
    {
        if row < self.nrows && col < self.ncols {
            // SAFETY: We have checked that `row` and `col` are in-bounds.
            Some(unsafe { self.get_unchecked_mut(row, col) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to an element without boundschecking.
    ///
    /// # Safety
    ///
    /// The following conditions must hold to avoid undefined behavior:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T::Elem
    where
        T: MutDenseData,
    {
        debug_assert!(row < self.nrows);
        debug_assert!(col < self.ncols);
        let offset = self.linear_offset(row, col);
        // SAFETY: See `get_unchecked`.
        unsafe { self.data.as_mut_slice().get_unchecked_mut(offset) }
    }

    /// Return a mutable reference to entry `(row, col)`, or an error if it is out of
    /// bounds.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T::Elem, IndexOutOfBounds>
    where
        T: MutDenseData,
    {
        let (nrows, ncols) = self.size();
        self.get_mut(row, col)
            .ok_or_else(|| IndexOutOfBounds::new(row, col, nrows, ncols))
    }

    /// Return row `row` of the view as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.nrows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [T::Elem]
    where
        T: MutDenseData,
    {
        assert!(
            row < self.nrows(),
            "tried to access row {row} of a matrix with {} rows",
            self.nrows()
        );

        let start = self.linear_offset(row, 0);
        let ncols = self.ncols;
        &mut self.data.as_mut_slice()[start..start + ncols]
    }

    /// Return a mutable iterator over all rows in the view.
    ///
    /// Rows are yielded sequentially beginning with row 0.
    pub fn row_iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [T::Elem]>
    where
        T: MutDenseData,
    {
        self.as_mut_view().into_rows_mut()
    }

    /// Reborrow this view mutably with the same geometry.
    pub fn as_mut_view(&mut self) -> MatrixViewMut<'_, T::Elem>
    where
        T: MutDenseData,
    {
        MatrixViewBase {
            data: self.data.as_mut_slice(),
            stride: self.stride,
            nrows: self.nrows,
            ncols: self.ncols,
            row_offset: self.row_offset,
            col_offset: self.col_offset,
        }
    }

    /// Return a mutable sub-view of this view.
    ///
    /// See [`MatrixViewBase::into_view`] for how bounds are checked.
    pub fn view_mut(
        &mut self,
        row_start: usize,
        col_start: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<MatrixViewMut<'_, T::Elem>, ViewOutOfBounds>
    where
        T: MutDenseData,
    {
        self.as_mut_view()
            .into_view(row_start, col_start, nrows, ncols)
    }

    /// Assign `value` to every entry of the view, leaving the rest of the root matrix
    /// untouched.
    pub fn fill(&mut self, value: T::Elem)
    where
        T: MutDenseData,
        T::Elem: Clone,
    {
        self.row_iter_mut().for_each(|row| row.fill(value.clone()));
    }
}

impl<'a, T> MatrixView<'a, T> {
    /// Consume the view, returning an iterator over its rows that borrows from the root
    /// matrix rather than from the view.
    pub fn into_rows(self) -> impl ExactSizeIterator<Item = &'a [T]> {
        let data: &'a [T] = self.data;
        let ncols = self.ncols;
        let start = self.linear_offset(0, 0);
        let stride = self.stride;
        (0..self.nrows).map(move |row| {
            let offset = start + row * stride;
            &data[offset..offset + ncols]
        })
    }
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// Consume the view, returning an iterator over its mutable rows that borrows from the
    /// root matrix rather than from the view.
    pub fn into_rows_mut(self) -> impl ExactSizeIterator<Item = &'a mut [T]> {
        let ncols = self.ncols;
        // Distance from the end of one row to the start of the next.
        let gap = self.stride - ncols;
        let start = self.linear_offset(0, 0);
        let data: &'a mut [T] = self.data;
        let mut rest: &'a mut [T] = if self.nrows == 0 {
            &mut []
        } else {
            &mut data[start..]
        };

        (0..self.nrows).map(move |_| {
            let (row, tail) = std::mem::take(&mut rest).split_at_mut(ncols);
            rest = tail.get_mut(gap..).unwrap_or_default();
            row
        })
    }
}

/// Reborrow a mutable view as a read-only one.
impl<'a, T> From<MatrixViewMut<'a, T>> for MatrixView<'a, T> {
    fn from(view: MatrixViewMut<'a, T>) -> Self {
        MatrixViewBase {
            data: view.data,
            stride: view.stride,
            nrows: view.nrows,
            ncols: view.ncols,
            row_offset: view.row_offset,
            col_offset: view.col_offset,
        }
    }
}

/// Return a reference to the item at entry `(row, col)` in the view.
///
/// # Panics
///
/// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
impl<T> Index<(usize, usize)> for MatrixViewBase<T>
where
    T: DenseData,
{
    type Output = T::Elem;

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

/// Return a mutable reference to the item at entry `(row, col)` in the view.
///
/// # Panics
///
/// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
impl<T> IndexMut<(usize, usize)> for MatrixViewBase<T>
where
    T: MutDenseData,
{
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

/// Views compare equal when they have the same shape and the same entries, regardless of
/// where they sit in their root matrices.
impl<T, U> PartialEq<MatrixViewBase<U>> for MatrixViewBase<T>
where
    T: DenseData,
    U: DenseData,
    T::Elem: PartialEq<U::Elem>,
{
    fn eq(&self, other: &MatrixViewBase<U>) -> bool {
        self.size() == other.size() && self.row_iter().eq(other.row_iter())
    }
}

// Only show the entries inside the window, not the whole root matrix.
impl<T> fmt::Debug for MatrixViewBase<T>
where
    T: DenseData,
    T::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixView")
            .field("nrows", &self.nrows)
            .field("ncols", &self.ncols)
            .field("row_offset", &self.row_offset)
            .field("col_offset", &self.col_offset)
            .field("rows", &RowsDebug(self.as_view()))
            .finish()
    }
}

struct RowsDebug<'a, T>(MatrixView<'a, T>);

impl<T: fmt::Debug> fmt::Debug for RowsDebug<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.into_rows()).finish()
    }
}

///////////
// Tests //
///////////

#[cfg(test)]
mod tests {
    use super::*;

    /// This function is only callable with copyable types.
    fn is_copyable<T: Copy>(_x: T) -> bool {
        true
    }

    // Construct a matrix with 4 rows of length 5 where entry `(i, j)` is `10 * i + j`:
    //
    //  0,  1,  2,  3,  4,
    // 10, 11, 12, 13, 14,
    // 20, 21, 22, 23, 24,
    // 30, 31, 32, 33, 34,
    fn make_test_matrix() -> Matrix<usize> {
        let mut m = Matrix::zeros(4, 5).unwrap();
        for i in 0..m.nrows() {
            for j in 0..m.ncols() {
                m[(i, j)] = 10 * i + j;
            }
        }
        m
    }

    // Check every entry of `v` against the closed form of `make_test_matrix`.
    fn check_window_contents<T>(v: &MatrixViewBase<T>)
    where
        T: DenseData<Elem = usize>,
    {
        let (r0, c0) = (v.row_offset(), v.col_offset());
        for i in 0..v.nrows() {
            for j in 0..v.ncols() {
                let expected = 10 * (r0 + i) + c0 + j;
                assert_eq!(v[(i, j)], expected, "failed on (row, col) = ({i}, {j})");
                assert_eq!(v.get(i, j), Some(&expected));
                assert_eq!(v.at(i, j), Ok(&expected));
                // SAFETY: `i` and `j` are in-bounds.
                assert_eq!(unsafe { *v.get_unchecked(i, j) }, expected);
            }
            let row: Vec<usize> = (0..v.ncols()).map(|j| 10 * (r0 + i) + c0 + j).collect();
            assert_eq!(v.row(i), &*row, "failed on row {i}");
            assert_eq!(v.get_row(i), Some(&*row));
        }
        assert_eq!(v.row_iter().len(), v.nrows());
        assert!(v.row_iter().eq((0..v.nrows()).map(|i| v.row(i))));
    }

    #[test]
    fn view_maps_onto_root() {
        let m = make_test_matrix();
        for r0 in 0..=m.nrows() {
            for c0 in 0..=m.ncols() {
                for h in 0..=(m.nrows() - r0) {
                    for w in 0..=(m.ncols() - c0) {
                        let v = m.view(r0, c0, h, w).unwrap();
                        assert_eq!(v.size(), (h, w));
                        assert_eq!(v.row_offset(), r0);
                        assert_eq!(v.col_offset(), c0);
                        check_window_contents(&v);
                    }
                }
            }
        }
    }

    #[test]
    fn view_is_copy() {
        let m = make_test_matrix();
        let v = m.view(1, 1, 2, 2).unwrap();
        assert!(is_copyable(v));
        assert_eq!(v[(0, 0)], 11);
    }

    #[test]
    fn view_probe_and_checked_out_of_bounds() {
        let m = make_test_matrix();
        let v = m.view(1, 2, 2, 3).unwrap();

        assert_eq!(v.get(2, 0), None);
        assert_eq!(v.get(0, 3), None);
        assert_eq!(v.get_row(2), None);

        // The root has room for `(2, 0)`, but the view does not.
        let err = v.at(2, 0).unwrap_err();
        assert_eq!(err, IndexOutOfBounds::new(2, 0, 2, 3));
    }

    #[test]
    fn nested_views_compose_against_root() {
        let m = make_test_matrix();
        let outer = m.view(1, 1, 3, 4).unwrap();
        let middle = outer.view(1, 1, 2, 3).unwrap();
        let inner = middle.view(1, 2, 1, 1).unwrap();

        assert_eq!((middle.row_offset(), middle.col_offset()), (2, 2));
        assert_eq!((inner.row_offset(), inner.col_offset()), (3, 4));
        assert_eq!(inner[(0, 0)], 34);

        check_window_contents(&outer);
        check_window_contents(&middle);
        check_window_contents(&inner);
    }

    #[test]
    fn nested_view_bounds_are_relative_to_immediate_parent() {
        let m = make_test_matrix();
        let v = m.view(1, 1, 2, 2).unwrap();

        // Fits in the root, but not in `v`.
        let err = v.view(1, 1, 2, 2).unwrap_err();
        assert_eq!(err.parent_nrows, 2);
        assert_eq!(err.parent_ncols, 2);

        assert!(v.view(0, 2, 1, 1).is_err());
        assert!(v.view(2, 0, 1, 1).is_err());
        assert!(v.view(0, 0, 2, 2).is_ok());
        assert!(v.view(2, 2, 0, 0).is_ok());
    }

    #[test]
    fn mutable_view_writes_only_its_window() {
        let mut m = Matrix::new(0, 3, 3).unwrap();
        {
            let mut v = m.view_mut(1, 1, 2, 2).unwrap();
            v[(0, 0)] = 5;
            v[(1, 1)] = 6;
        }

        assert_eq!(m[(1, 1)], 5);
        assert_eq!(m[(2, 2)], 6);
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m.as_slice().iter().sum::<i32>(), 11);
    }

    #[test]
    fn mutable_view_single_cell_writes() {
        let base = make_test_matrix();
        for r0 in 0..base.nrows() {
            for c0 in 0..base.ncols() {
                let mut m = base.clone();
                let mut v = m.view_mut(r0, c0, base.nrows() - r0, base.ncols() - c0).unwrap();
                let (h, w) = v.size();
                let (i, j) = (h - 1, w - 1);
                *v.at_mut(i, j).unwrap() = 1000;
                assert!(v.at_mut(h, 0).is_err());
                assert!(v.get_mut(0, w).is_none());

                for row in 0..m.nrows() {
                    for col in 0..m.ncols() {
                        let expected = if (row, col) == (r0 + i, c0 + j) {
                            1000
                        } else {
                            base[(row, col)]
                        };
                        assert_eq!(m[(row, col)], expected);
                    }
                }
            }
        }
    }

    #[test]
    fn mutable_sub_views() {
        let mut m = Matrix::new(0usize, 4, 4).unwrap();
        {
            let mut outer = m.view_mut(1, 0, 3, 4).unwrap();
            {
                let mut inner = outer.view_mut(1, 1, 2, 2).unwrap();
                assert_eq!((inner.row_offset(), inner.col_offset()), (2, 1));
                inner.fill(7);
                // SAFETY: `(1, 1)` is in-bounds.
                unsafe { *inner.get_unchecked_mut(1, 1) = 8 };
            }
            // A read-only sub-view of a mutable view sees the writes.
            let peek = outer.view(1, 1, 2, 2).unwrap();
            assert_eq!(peek.row(0), &[7, 7]);
            assert_eq!(peek.row(1), &[7, 8]);
        }

        let expected: [[usize; 4]; 4] = [
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 7, 7, 0],
            [0, 7, 8, 0],
        ];
        for (row, expected) in m.row_iter().zip(expected.iter()) {
            assert_eq!(row, expected);
        }
    }

    #[test]
    fn row_iter_mut_visits_window_rows() {
        let mut m = make_test_matrix();
        let mut v = m.view_mut(1, 1, 3, 3).unwrap();
        assert_eq!(v.row_iter_mut().len(), 3);
        v.row_iter_mut().enumerate().for_each(|(i, row)| {
            assert_eq!(row.len(), 3);
            row.iter_mut().for_each(|x| *x += 100 * (i + 1));
        });

        assert_eq!(m.row(0), &[0, 1, 2, 3, 4]);
        assert_eq!(m.row(1), &[10, 111, 112, 113, 14]);
        assert_eq!(m.row(2), &[20, 221, 222, 223, 24]);
        assert_eq!(m.row(3), &[30, 331, 332, 333, 34]);
    }

    #[test]
    fn row_mut_writes_window_row() {
        let mut m = make_test_matrix();
        let mut v = m.view_mut(2, 3, 2, 2).unwrap();
        v.row_mut(1).copy_from_slice(&[usize::MAX, 0]);
        assert_eq!(m.row(3), &[30, 31, 32, usize::MAX, 0]);
    }

    #[test]
    fn zero_sized_views() {
        let mut m = make_test_matrix();

        let v = m.view(4, 5, 0, 0).unwrap();
        assert_eq!(v.size(), (0, 0));
        assert_eq!(v.row_iter().count(), 0);

        // Zero columns but several rows: rows are empty slices.
        let v = m.view(0, 5, 4, 0).unwrap();
        let empty: &[usize] = &[];
        assert_eq!(v.row_iter().count(), 4);
        assert!(v.row_iter().all(|row| row == empty));

        let mut v = m.view_mut(1, 2, 3, 0).unwrap();
        assert_eq!(v.row_iter_mut().count(), 3);
        v.fill(99);

        let mut v = m.view_mut(4, 2, 0, 3).unwrap();
        assert_eq!(v.row_iter_mut().count(), 0);

        assert_eq!(m, make_test_matrix());
    }

    #[test]
    fn view_from_dense_slice() {
        let data: Vec<i32> = (0..6).collect();
        let v = MatrixView::try_from(data.as_slice(), 2, 3).unwrap();
        assert_eq!(v.size(), (2, 3));
        assert_eq!(v[(1, 0)], 3);
        assert_eq!(v.row(1), &[3, 4, 5]);

        let err = MatrixView::try_from(data.as_slice(), 4, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "tried to construct a matrix with 4 rows and 2 columns over a slice of length 6"
        );
        assert_eq!(err.into_inner(), data.as_slice());

        // A product that overflows can never match the length.
        assert!(MatrixView::try_from(data.as_slice(), usize::MAX, 2).is_err());

        let mut data = vec![0; 4];
        {
            let mut v = MatrixViewMut::try_from(data.as_mut_slice(), 2, 2).unwrap();
            v[(1, 0)] = 4;
            let mut sub = v.view_mut(0, 1, 2, 1).unwrap();
            sub[(0, 0)] = 2;
        }
        assert_eq!(data, [0, 2, 4, 0]);
    }

    #[test]
    fn view_to_owned_and_transpose() {
        let m = make_test_matrix();
        let v = m.view(1, 2, 2, 3).unwrap();

        let owned = v.to_owned();
        assert_eq!(owned.size(), (2, 3));
        assert_eq!(owned.capacity(), 6);
        assert_eq!(owned.as_slice(), &[12, 13, 14, 22, 23, 24]);
        assert_eq!(owned.as_view(), v);

        let t = v.transpose();
        assert_eq!(t.size(), (3, 2));
        for i in 0..v.nrows() {
            for j in 0..v.ncols() {
                assert_eq!(t[(j, i)], v[(i, j)]);
            }
        }
    }

    #[test]
    fn view_equality_ignores_placement() {
        let mut m = Matrix::new(1u8, 4, 4).unwrap();
        m[(0, 0)] = 9;
        let a = m.view(1, 1, 2, 2).unwrap();
        let b = m.view(2, 2, 2, 2).unwrap();
        let c = m.view(0, 0, 2, 2).unwrap();
        let d = m.view(1, 1, 2, 3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn mutable_view_converts_to_read_only() {
        let mut m = make_test_matrix();
        let v: MatrixView<'_, usize> = m.view_mut(1, 1, 2, 2).unwrap().into();
        check_window_contents(&v);

        let mut w = m.view_mut(0, 0, 2, 2).unwrap();
        w[(0, 0)] = 42;
        assert_eq!(w.as_view()[(0, 0)], 42);
    }

    #[test]
    fn debug_shows_only_window() {
        let m = make_test_matrix();
        let v = m.view(1, 3, 2, 2).unwrap();
        let debug = format!("{:?}", v);
        assert_eq!(
            debug,
            "MatrixView { nrows: 2, ncols: 2, row_offset: 1, col_offset: 3, \
             rows: [[13, 14], [23, 24]] }"
        );
    }

    // Panics
    #[test]
    #[should_panic(expected = "tried to access row 2 of a matrix with 2 rows")]
    fn test_get_row_panics() {
        let m = make_test_matrix();
        let v = m.view(0, 0, 2, 2).unwrap();
        v.row(2);
    }

    #[test]
    #[should_panic(expected = "tried to access row 2 of a matrix with 2 rows")]
    fn test_get_row_mut_panics() {
        let mut m = make_test_matrix();
        let mut v = m.view_mut(0, 0, 2, 2).unwrap();
        v.row_mut(2);
    }

    #[test]
    #[should_panic(expected = "row 2 is out of bounds (max: 2)")]
    fn test_index_panics_row() {
        let m = make_test_matrix();
        let v = m.view(1, 1, 2, 3).unwrap();
        let _ = v[(2, 0)];
    }

    #[test]
    #[should_panic(expected = "col 3 is out of bounds (max: 3)")]
    fn test_index_panics_col() {
        let m = make_test_matrix();
        let v = m.view(1, 1, 2, 3).unwrap();
        let _ = v[(0, 3)];
    }

    #[test]
    #[should_panic(expected = "row 2 is out of bounds (max: 2)")]
    fn test_index_mut_panics_row() {
        let mut m = make_test_matrix();
        let mut v = m.view_mut(1, 1, 2, 3).unwrap();
        v[(2, 0)] = 1;
    }

    #[test]
    #[should_panic(expected = "col 3 is out of bounds (max: 3)")]
    fn test_index_mut_panics_col() {
        let mut m = make_test_matrix();
        let mut v = m.view_mut(1, 1, 2, 3).unwrap();
        v[(0, 3)] = 1;
    }
}
