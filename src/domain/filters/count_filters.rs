//! count and number filter implementations.

use super::TextFilter;
use crate::domain::error::FilterError;

/// Number of non-blank lines, rendered as `"<n> lines"`.
pub struct CountFilter;

impl TextFilter for CountFilter {
    fn name(&self) -> &'static str {
        "count"
    }

    fn usage(&self) -> &'static str {
        "count"
    }

    fn description(&self) -> &'static str {
        "count non-blank lines"
    }

    fn apply(&self, input: &str, _args: &[String]) -> Result<String, FilterError> {
        let n = input.lines().filter(|line| !line.trim().is_empty()).count();
        Ok(format!("{n} lines"))
    }
}

/// Prefix each line with its 1-based index and a colon.
pub struct NumberFilter;

impl TextFilter for NumberFilter {
    fn name(&self) -> &'static str {
        "number"
    }

    fn usage(&self) -> &'static str {
        "number"
    }

    fn description(&self) -> &'static str {
        "prefix lines with their line number"
    }

    fn apply(&self, input: &str, _args: &[String]) -> Result<String, FilterError> {
        let lines: Vec<String> = input
            .lines()
            .enumerate()
            .map(|(i, line)| format!("{}: {}", i + 1, line))
            .collect();
        Ok(lines.join("\n"))
    }
}
