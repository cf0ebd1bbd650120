//! upper, lower and trim filter implementations.

use super::TextFilter;
use crate::domain::error::FilterError;

/// Uppercase the entire text.
pub struct UpperFilter;

impl TextFilter for UpperFilter {
    fn name(&self) -> &'static str {
        "upper"
    }

    fn usage(&self) -> &'static str {
        "upper"
    }

    fn description(&self) -> &'static str {
        "uppercase all text"
    }

    fn apply(&self, input: &str, _args: &[String]) -> Result<String, FilterError> {
        Ok(input.to_uppercase())
    }
}

/// Lowercase the entire text.
pub struct LowerFilter;

impl TextFilter for LowerFilter {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn usage(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "lowercase all text"
    }

    fn apply(&self, input: &str, _args: &[String]) -> Result<String, FilterError> {
        Ok(input.to_lowercase())
    }
}

/// Trim surrounding whitespace from each line.
pub struct TrimFilter;

impl TextFilter for TrimFilter {
    fn name(&self) -> &'static str {
        "trim"
    }

    fn usage(&self) -> &'static str {
        "trim"
    }

    fn description(&self) -> &'static str {
        "trim whitespace around each line"
    }

    fn apply(&self, input: &str, _args: &[String]) -> Result<String, FilterError> {
        let lines: Vec<&str> = input.lines().map(str::trim).collect();
        Ok(lines.join("\n"))
    }
}
