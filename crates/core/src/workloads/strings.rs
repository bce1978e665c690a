// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! String building, pattern counting and replacement.

const FIZZ: &str = "Fizz";
const BUZZ: &str = "Buzz";
const BUZZ_UPPER: &str = "BUZZ";

/// Measurements taken from the built text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringStats {
    /// Byte length of the text after `Buzz` was replaced with `BUZZ`.
    pub replaced_len: usize,
    /// Number of `Fizz` occurrences in the text.
    pub fizz_count: usize,
}

impl StringStats {
    /// The workload result: replaced length plus match count.
    pub fn score(&self) -> usize {
        self.replaced_len + self.fizz_count
    }
}

fn build_text(iterations: u64) -> String {
    let mut text = String::new();
    for i in 0..iterations {
        text.push_str("Iteration ");
        text.push_str(&i.to_string());
        text.push_str(": ");

        let fizz = i % 3 == 0;
        let buzz = i % 5 == 0;
        if fizz {
            text.push_str(FIZZ);
        }
        if buzz {
            text.push_str(BUZZ);
        }
        if !fizz && !buzz {
            text.push_str(&i.to_string());
        }

        text.push('\n');
    }
    text
}

/// Build the FizzBuzz-style text for `iterations` lines and measure it.
pub fn string_stats(iterations: u64) -> StringStats {
    let text = build_text(iterations);
    let fizz_count = text.matches(FIZZ).count();
    let replaced = text.replace(BUZZ, BUZZ_UPPER);

    StringStats {
        replaced_len: replaced.len(),
        fizz_count,
    }
}

/// `length(text with Buzz -> BUZZ) + count("Fizz")` for `iterations` lines.
pub fn string_operations(iterations: u64) -> usize {
    string_stats(iterations).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_text_lines() {
        let text = build_text(6);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Iteration 0: FizzBuzz",
                "Iteration 1: 1",
                "Iteration 2: 2",
                "Iteration 3: Fizz",
                "Iteration 4: 4",
                "Iteration 5: Buzz",
            ]
        );
    }

    #[test]
    fn test_golden_fifteen() {
        let stats = string_stats(15);
        assert_eq!(stats.replaced_len, 258);
        assert_eq!(stats.fizz_count, 5);
        assert_eq!(string_operations(15), 263);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(string_operations(300), string_operations(300));
        assert_eq!(string_operations(300), 5852);
    }

    #[test]
    fn test_empty() {
        assert_eq!(string_operations(0), 0);
    }
}
