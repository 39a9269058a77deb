/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use clap::Parser;
use clrs_tools::utils::{init_subscriber, run_chapter2, Chapter2Params, SortAlgorithm, ToolResult};

/// Sort, sum and search an array of normally distributed random numbers.
///
/// Example Command:
/// cargo run --bin chapter2 -- --len 20 --algorithm merge --seed 7
#[derive(Debug, Parser)]
struct Chapter2Args {
    /// Number of random values to generate
    #[arg(long = "len", short = 'N', default_value = "10")]
    pub len: usize,

    /// Mean of the normal distribution
    #[arg(long = "mean", default_value = "0.0", allow_negative_numbers = true)]
    pub mean: f64,

    /// Standard deviation of the normal distribution, must be positive
    #[arg(long = "std-dev", default_value = "1.0")]
    pub std_dev: f64,

    /// Seed for a reproducible run
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Sorting algorithm to apply
    #[arg(long = "algorithm", value_enum, default_value_t = SortAlgorithm::Insertion)]
    pub algorithm: SortAlgorithm,
}

fn main() -> ToolResult<()> {
    init_subscriber();

    let args = Chapter2Args::parse();
    let params = Chapter2Params {
        len: args.len,
        mean: args.mean,
        std_dev: args.std_dev,
        seed: args.seed,
        algorithm: args.algorithm,
    };

    let mut stdout = std::io::stdout().lock();
    run_chapter2(&mut stdout, &params)?;
    Ok(())
}
