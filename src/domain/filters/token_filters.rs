//! first and last filter implementations.

use super::TextFilter;
use crate::domain::error::FilterError;

/// First whitespace-delimited token of each line.
pub struct FirstFilter;

impl TextFilter for FirstFilter {
    fn name(&self) -> &'static str {
        "first"
    }

    fn usage(&self) -> &'static str {
        "first"
    }

    fn description(&self) -> &'static str {
        "first word of each line"
    }

    fn apply(&self, input: &str, _args: &[String]) -> Result<String, FilterError> {
        let lines: Vec<&str> = input
            .lines()
            .map(|line| line.split_whitespace().next().unwrap_or(""))
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Last whitespace-delimited token of each line.
pub struct LastFilter;

impl TextFilter for LastFilter {
    fn name(&self) -> &'static str {
        "last"
    }

    fn usage(&self) -> &'static str {
        "last"
    }

    fn description(&self) -> &'static str {
        "last word of each line"
    }

    fn apply(&self, input: &str, _args: &[String]) -> Result<String, FilterError> {
        let lines: Vec<&str> = input
            .lines()
            .map(|line| line.split_whitespace().last().unwrap_or(""))
            .collect();
        Ok(lines.join("\n"))
    }
}
