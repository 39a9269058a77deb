/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::{fmt::Display, io::Write};

use clrs_utils::{Init, Matrix};
use tracing::info;

use crate::utils::ToolResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixDemoParams {
    pub rows: usize,
    pub cols: usize,
    pub view_rows: usize,
    pub view_cols: usize,
    pub row_offset: usize,
    pub col_offset: usize,
}

/// Write `title` followed by one line per row, entries separated by a single space.
fn write_rows<'a, W, T, I>(out: &mut W, title: &str, rows: I) -> ToolResult<()>
where
    W: Write,
    T: Display + 'a,
    I: Iterator<Item = &'a [T]>,
{
    writeln!(out, "{title}")?;
    for row in rows {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Build a `rows x cols` matrix holding `i * cols + j` at `(i, j)`, then write it, its
/// transpose and the requested view to `out`.
pub fn run_matrix_demo<W: Write>(out: &mut W, params: &MatrixDemoParams) -> ToolResult<()> {
    let mut next = 0usize;
    let matrix = Matrix::new(
        Init(|| {
            let value = next;
            next += 1;
            value
        }),
        params.rows,
        params.cols,
    )?;
    info!(rows = params.rows, cols = params.cols, "constructed matrix");
    write_rows(
        out,
        &format!("Matrix ({} x {}):", matrix.nrows(), matrix.ncols()),
        matrix.row_iter(),
    )?;

    let transpose = matrix.transpose();
    write_rows(
        out,
        &format!("Transpose ({} x {}):", transpose.nrows(), transpose.ncols()),
        transpose.row_iter(),
    )?;

    let view = matrix.view(
        params.row_offset,
        params.col_offset,
        params.view_rows,
        params.view_cols,
    )?;
    info!(
        row_offset = view.row_offset(),
        col_offset = view.col_offset(),
        nrows = view.nrows(),
        ncols = view.ncols(),
        "created view"
    );
    write_rows(
        out,
        &format!(
            "View ({} x {}) at ({}, {}):",
            view.nrows(),
            view.ncols(),
            view.row_offset(),
            view.col_offset()
        ),
        view.into_rows(),
    )?;

    Ok(())
}
