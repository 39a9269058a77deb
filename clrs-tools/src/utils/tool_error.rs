/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use clrs_algorithms::RandomError;
use clrs_utils::{CapacityOverflow, MatrixError, ViewOutOfBounds};
use thiserror::Error;

/// The error reported by the command line tools.
///
/// Library errors are flattened into their message since the tools only ever print them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{details}")]
pub struct ToolError {
    pub details: String,
}

impl ToolError {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}

pub type ToolResult<T> = Result<T, ToolError>;

impl From<MatrixError> for ToolError {
    fn from(err: MatrixError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<CapacityOverflow> for ToolError {
    fn from(err: CapacityOverflow) -> Self {
        MatrixError::from(err).into()
    }
}

impl From<ViewOutOfBounds> for ToolError {
    fn from(err: ViewOutOfBounds) -> Self {
        MatrixError::from(err).into()
    }
}

impl From<RandomError> for ToolError {
    fn from(err: RandomError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {err}"))
    }
}
