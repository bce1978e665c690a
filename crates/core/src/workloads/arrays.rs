// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fill, sort, filter, map and reduce over a float array.

/// Sum of squares of the positive values of `sin(i) * cos(i)` for `i` in
/// `[0, size)`, taken after an ascending sort.
pub fn array_operations(size: usize) -> f64 {
    let mut values: Vec<f64> = (0..size)
        .map(|i| {
            let x = i as f64;
            x.sin() * x.cos()
        })
        .collect();

    values.sort_by(f64::total_cmp);

    values
        .into_iter()
        .filter(|&v| v > 0.0)
        .map(|v| v * v)
        .sum()
}
