// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for workload execution.

use thiserror::Error;

/// Errors raised while running a workload or assembling a report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An intermediate value no longer fits the workload's integer type.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// The computation that overflowed.
        operation: &'static str,
    },

    /// The same result key was recorded twice in one report.
    #[error("Duplicate result key: {0}")]
    DuplicateKey(String),
}

impl Error {
    /// Create an overflow error for the named operation.
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}

/// Result type for workload operations.
pub type Result<T> = std::result::Result<T, Error>;
