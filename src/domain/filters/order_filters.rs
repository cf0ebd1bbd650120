//! sort, uniq and reverse filter implementations.

use std::collections::HashSet;

use super::TextFilter;
use crate::domain::error::FilterError;

/// Lexicographic line sort, descending with `-r`.
pub struct SortFilter;

impl TextFilter for SortFilter {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn usage(&self) -> &'static str {
        "sort [-r]"
    }

    fn description(&self) -> &'static str {
        "sort lines ascending (-r to reverse)"
    }

    fn apply(&self, input: &str, args: &[String]) -> Result<String, FilterError> {
        let mut lines: Vec<&str> = input.lines().collect();
        lines.sort_unstable();
        if args.iter().any(|arg| arg == "-r") {
            lines.reverse();
        }
        Ok(lines.join("\n"))
    }
}

/// Drop exact-duplicate lines, preserving first-seen order.
pub struct UniqFilter;

impl TextFilter for UniqFilter {
    fn name(&self) -> &'static str {
        "uniq"
    }

    fn usage(&self) -> &'static str {
        "uniq"
    }

    fn description(&self) -> &'static str {
        "drop duplicate lines, keeping first occurrence"
    }

    fn apply(&self, input: &str, _args: &[String]) -> Result<String, FilterError> {
        let mut seen = HashSet::new();
        let lines: Vec<&str> = input
            .lines()
            .filter(|line| seen.insert(*line))
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Reverse line order.
pub struct ReverseFilter;

impl TextFilter for ReverseFilter {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn usage(&self) -> &'static str {
        "reverse"
    }

    fn description(&self) -> &'static str {
        "reverse the order of lines"
    }

    fn apply(&self, input: &str, _args: &[String]) -> Result<String, FilterError> {
        let lines: Vec<&str> = input.lines().rev().collect();
        Ok(lines.join("\n"))
    }
}
