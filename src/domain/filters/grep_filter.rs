//! grep filter implementation.

use regex::RegexBuilder;

use super::TextFilter;
use crate::domain::error::FilterError;

/// Keep lines matching a case-insensitive pattern.
///
/// The pattern is user-supplied and compiled as a regex, so plain substrings
/// match as expected and regex syntax is available. Construction failures
/// are reported as filter errors, never propagated.
pub struct GrepFilter;

impl TextFilter for GrepFilter {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn usage(&self) -> &'static str {
        "grep <pattern>"
    }

    fn description(&self) -> &'static str {
        "keep lines matching a case-insensitive pattern"
    }

    fn apply(&self, input: &str, args: &[String]) -> Result<String, FilterError> {
        if args.is_empty() {
            return Err(FilterError::new("grep requires a search pattern"));
        }
        // Rejoin so quoted multi-word patterns survive the argument split.
        let pattern = args.join(" ");

        let re = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()?;

        let matching: Vec<&str> = input.lines().filter(|line| re.is_match(line)).collect();
        Ok(matching.join("\n"))
    }
}
