// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dense square matrix multiplication.

use crate::error::{Error, Result};

type Matrix = Vec<Vec<i64>>;

fn build(size: usize, cell: impl Fn(i64, i64) -> i64) -> Result<Matrix> {
    let n = i64::try_from(size).map_err(|_| Error::overflow("matrix_multiply"))?;
    Ok((0..n).map(|i| (0..n).map(|j| cell(i, j)).collect()).collect())
}

fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let size = a.len();
    let mut product = vec![vec![0i64; size]; size];
    for (i, row) in product.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let mut acc = 0i64;
            for k in 0..size {
                acc = a[i][k]
                    .checked_mul(b[k][j])
                    .and_then(|term| acc.checked_add(term))
                    .ok_or_else(|| Error::overflow("matrix_multiply"))?;
            }
            *cell = acc;
        }
    }
    Ok(product)
}

/// Sum of all elements of `A × B` where `A[i][j] = i + j` and `B[i][j] = i - j`.
pub fn matrix_multiply(size: usize) -> Result<i64> {
    let a = build(size, |i, j| i + j)?;
    let b = build(size, |i, j| i - j)?;
    let product = multiply(&a, &b)?;

    product
        .iter()
        .flatten()
        .try_fold(0i64, |acc, &v| acc.checked_add(v))
        .ok_or_else(|| Error::overflow("matrix_multiply"))
}
