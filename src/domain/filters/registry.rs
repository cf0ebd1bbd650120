//! Filter registry and pipeline application.

use std::collections::BTreeMap;

use tracing::debug;

use super::case_filters::{LowerFilter, TrimFilter, UpperFilter};
use super::count_filters::{CountFilter, NumberFilter};
use super::grep_filter::GrepFilter;
use super::order_filters::{ReverseFilter, SortFilter, UniqFilter};
use super::slice_filters::{HeadFilter, TailFilter};
use super::token_filters::{FirstFilter, LastFilter};
use super::TextFilter;
use crate::domain::error::FilterError;

/// The closed table of named text filters.
///
/// Built once at startup and held by the interpreter; lookups never
/// reconstruct it. Names are matched case-insensitively so console input
/// like `STATUS | GREP cash` behaves.
pub struct FilterRegistry {
    filters: BTreeMap<&'static str, Box<dyn TextFilter>>,
}

impl FilterRegistry {
    /// Build the registry with every built-in filter.
    pub fn new() -> Self {
        let mut registry = Self {
            filters: BTreeMap::new(),
        };

        registry.register(Box::new(GrepFilter));
        registry.register(Box::new(HeadFilter));
        registry.register(Box::new(TailFilter));
        registry.register(Box::new(SortFilter));
        registry.register(Box::new(UniqFilter));
        registry.register(Box::new(ReverseFilter));
        registry.register(Box::new(CountFilter));
        registry.register(Box::new(NumberFilter));
        registry.register(Box::new(UpperFilter));
        registry.register(Box::new(LowerFilter));
        registry.register(Box::new(TrimFilter));
        registry.register(Box::new(FirstFilter));
        registry.register(Box::new(LastFilter));

        registry
    }

    fn register(&mut self, filter: Box<dyn TextFilter>) {
        self.filters.insert(filter.name(), filter);
    }

    /// Apply one filter invocation string (`"grep cash"`) to `input`.
    pub fn apply(&self, input: &str, invocation: &str) -> Result<String, FilterError> {
        let mut parts = invocation.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(FilterError::new("Missing filter name"));
        };
        let args: Vec<String> = parts.map(str::to_string).collect();

        let Some(filter) = self.filters.get(name.to_lowercase().as_str()) else {
            return Err(FilterError::new(format!("Unknown filter: {name}")));
        };

        debug!(filter = name, args = ?args, "applying filter");
        filter.apply(input, &args)
    }

    /// Apply a whole pipeline strictly left-to-right.
    ///
    /// The first failing filter aborts the rest; its error becomes the
    /// pipeline's result.
    pub fn apply_pipeline(
        &self,
        input: &str,
        invocations: &[String],
    ) -> Result<String, FilterError> {
        let mut current = input.to_string();
        for invocation in invocations {
            current = self.apply(&current, invocation)?;
        }
        Ok(current)
    }

    /// Formatted help block enumerating every filter's usage and description.
    pub fn help_text(&self) -> String {
        let mut lines = vec!["Available filters:".to_string()];
        for filter in self.filters.values() {
            lines.push(format!(
                "  {:<16} {}",
                filter.usage(),
                filter.description()
            ));
        }
        lines.join("\n")
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_filter_name() {
        let registry = FilterRegistry::new();
        let err = registry.apply("text", "bogus").unwrap_err();
        assert_eq!(err.to_string(), "Unknown filter: bogus");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = FilterRegistry::new();
        assert_eq!(registry.apply("a\nb\nc", "HEAD 1").unwrap(), "a");
    }

    #[test]
    fn test_pipeline_left_to_right() {
        let registry = FilterRegistry::new();
        let out = registry
            .apply_pipeline(
                "bravo\nalpha\ncharlie",
                &["sort".to_string(), "head 2".to_string()],
            )
            .unwrap();
        assert_eq!(out, "alpha\nbravo");
    }

    #[test]
    fn test_pipeline_aborts_on_first_failure() {
        let registry = FilterRegistry::new();
        let err = registry
            .apply_pipeline(
                "a\nb",
                &["bogus".to_string(), "head 1".to_string()],
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown filter: bogus");
    }

    #[test]
    fn test_help_text_lists_filters() {
        let registry = FilterRegistry::new();
        let help = registry.help_text();
        assert!(help.contains("grep <pattern>"));
        assert!(help.contains("uniq"));
        assert!(help.starts_with("Available filters:"));
    }
}
