/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
pub mod tool_error;
pub use tool_error::*;

pub mod sort_algorithm;
pub use sort_algorithm::SortAlgorithm;

pub mod chapter2;
pub use chapter2::*;

pub mod matrix_demo;
pub use matrix_demo::*;

pub mod tracing;
pub use tracing::{init_subscriber, init_test_subscriber};
