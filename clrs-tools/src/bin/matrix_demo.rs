/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use clap::Parser;
use clrs_tools::utils::{init_subscriber, run_matrix_demo, MatrixDemoParams, ToolResult};

/// Print a matrix, its transpose, and a rectangular view into it.
///
/// Example Command:
/// cargo run --bin matrix_demo -- --rows 4 --cols 5 --view-rows 2 --view-cols 3
/// --row-offset 1 --col-offset 1
#[derive(Debug, Parser)]
struct MatrixDemoArgs {
    /// Number of rows of the matrix
    #[arg(long = "rows", default_value = "3")]
    pub rows: usize,

    /// Number of columns of the matrix
    #[arg(long = "cols", default_value = "4")]
    pub cols: usize,

    /// Number of rows of the view
    #[arg(long = "view-rows", default_value = "2")]
    pub view_rows: usize,

    /// Number of columns of the view
    #[arg(long = "view-cols", default_value = "2")]
    pub view_cols: usize,

    /// First matrix row covered by the view
    #[arg(long = "row-offset", default_value = "0")]
    pub row_offset: usize,

    /// First matrix column covered by the view
    #[arg(long = "col-offset", default_value = "0")]
    pub col_offset: usize,
}

fn main() -> ToolResult<()> {
    init_subscriber();

    let args = MatrixDemoArgs::parse();
    let params = MatrixDemoParams {
        rows: args.rows,
        cols: args.cols,
        view_rows: args.view_rows,
        view_cols: args.view_cols,
        row_offset: args.row_offset,
        col_offset: args.col_offset,
    };

    let mut stdout = std::io::stdout().lock();
    run_matrix_demo(&mut stdout, &params)
}
