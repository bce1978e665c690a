// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Trial-division primality and prime generation.

/// Deterministic trial division by 2, 3, then `6k ± 1` up to `√num`.
pub fn is_prime(num: u64) -> bool {
    if num <= 1 {
        return false;
    }
    if num <= 3 {
        return true;
    }
    if num % 2 == 0 || num % 3 == 0 {
        return false;
    }

    // `i <= num / i` is `i * i <= num` without the overflow.
    let mut i = 5u64;
    while i <= num / i {
        if num % i == 0 || num % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// All primes in `[2, limit]`, ascending.
pub fn generate_primes(limit: u64) -> Vec<u64> {
    (2..=limit).filter(|&n| is_prime(n)).collect()
}
