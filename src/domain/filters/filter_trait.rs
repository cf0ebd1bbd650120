//! Filter trait definition.

use crate::domain::error::FilterError;

/// A pure, line-oriented text transform.
///
/// Filters treat their input as newline-delimited lines and return the
/// transformed text, or a [`FilterError`] that aborts the remaining filters
/// of the current link's pipeline. Filters never see or touch interpreter
/// state.
pub trait TextFilter: Send + Sync {
    /// Registry name, e.g. `"grep"`.
    fn name(&self) -> &'static str;

    /// Invocation synopsis for the help listing, e.g. `"grep <pattern>"`.
    fn usage(&self) -> &'static str;

    /// One-line description for the help listing.
    fn description(&self) -> &'static str;

    /// Transform `input`, given the whitespace-split arguments of the
    /// filter invocation.
    fn apply(&self, input: &str, args: &[String]) -> Result<String, FilterError>;
}
