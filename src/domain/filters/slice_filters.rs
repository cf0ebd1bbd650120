//! head and tail filter implementations.

use super::TextFilter;
use crate::domain::error::FilterError;

const DEFAULT_COUNT: usize = 10;

/// Parse the optional line-count argument; anything non-numeric silently
/// falls back to the default.
fn line_count(args: &[String]) -> usize {
    args.first()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_COUNT)
}

/// First n lines of the input.
pub struct HeadFilter;

impl TextFilter for HeadFilter {
    fn name(&self) -> &'static str {
        "head"
    }

    fn usage(&self) -> &'static str {
        "head [n]"
    }

    fn description(&self) -> &'static str {
        "first n lines (default 10)"
    }

    fn apply(&self, input: &str, args: &[String]) -> Result<String, FilterError> {
        let n = line_count(args);
        let lines: Vec<&str> = input.lines().take(n).collect();
        Ok(lines.join("\n"))
    }
}

/// Last n lines of the input.
pub struct TailFilter;

impl TextFilter for TailFilter {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn usage(&self) -> &'static str {
        "tail [n]"
    }

    fn description(&self) -> &'static str {
        "last n lines (default 10)"
    }

    fn apply(&self, input: &str, args: &[String]) -> Result<String, FilterError> {
        let n = line_count(args);
        let lines: Vec<&str> = input.lines().collect();
        let start = lines.len().saturating_sub(n);
        Ok(lines[start..].join("\n"))
    }
}
