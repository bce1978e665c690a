// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Keyed record construction followed by a keyed traversal.
//!
//! The workload measures map insertion, string-keyed lookup and nested
//! field access rather than arithmetic.

use super::fibonacci::fibonacci_iterative;
use super::primes::is_prime;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Fibonacci indices stored on records wrap at this modulus.
const FIBONACCI_MODULUS: u64 = 25;

/// Derived powers of a record's index.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedValues {
    /// `i * i`.
    pub square: u64,
    /// `i * i * i`.
    pub cube: u64,
    /// `√i`.
    pub sqrt: f64,
}

/// One record of the object workload, stored under `key{i}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRecord {
    /// The record index.
    pub value: u64,
    /// Powers of the index.
    pub nested: NestedValues,
    /// Whether the index is prime.
    pub is_prime: bool,
    /// `fib(i mod 25)`.
    pub fibonacci: u64,
}

impl ObjectRecord {
    /// Build the record for index `i`.
    pub fn new(i: u64) -> Result<Self> {
        let square = i
            .checked_mul(i)
            .ok_or_else(|| Error::overflow("object_operations"))?;
        let cube = square
            .checked_mul(i)
            .ok_or_else(|| Error::overflow("object_operations"))?;
        // i % 25 always fits in u32
        let fib_index = (i % FIBONACCI_MODULUS) as u32;

        Ok(Self {
            value: i,
            nested: NestedValues {
                square,
                cube,
                sqrt: (i as f64).sqrt(),
            },
            is_prime: is_prime(i),
            fibonacci: fibonacci_iterative(fib_index)?,
        })
    }

    /// The contribution of this record to the workload sum.
    pub fn weight(&self) -> u64 {
        if self.is_prime {
            self.nested.square
        } else {
            self.nested.cube
        }
    }
}

fn record_key(i: u64) -> String {
    format!("key{i}")
}

/// Build `iterations` records keyed `key{i}`, then sum `square` over prime
/// indices and `cube` over the rest.
pub fn object_operations(iterations: u64) -> Result<u64> {
    let capacity = usize::try_from(iterations).unwrap_or(0);
    let mut records: HashMap<String, ObjectRecord> = HashMap::with_capacity(capacity);
    for i in 0..iterations {
        records.insert(record_key(i), ObjectRecord::new(i)?);
    }

    let mut sum = 0u64;
    for i in 0..iterations {
        let record = &records[&record_key(i)];
        sum = sum
            .checked_add(record.weight())
            .ok_or_else(|| Error::overflow("object_operations"))?;
    }
    Ok(sum)
}
