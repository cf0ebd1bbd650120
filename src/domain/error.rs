//! Error types for cmdchain.

use thiserror::Error;

/// Errors raised while turning a console line into an executable chain.
///
/// These never escape the interpreter: the executor converts them into a
/// failed [`crate::domain::CmdOutcome`] so the caller always gets a result
/// object back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// Nothing but whitespace on the line
    #[error("Empty command")]
    EmptyCommand,

    /// `|` appeared before any command text
    #[error("Pipe has no command to read from")]
    PipeWithoutCommand,

    /// `|` with no filter expression after it
    #[error("Pipe is missing a filter expression")]
    MissingFilter,

    /// `&&`, `||` or `;` with no command before it
    #[error("Operator '{0}' has no command before it")]
    MissingCommand(String),

    /// `if` line without a `then` branch
    #[error("Conditional is missing 'then'")]
    MissingThen,
}

/// Failure produced by a single text filter.
///
/// Aborts the remaining filters of one link's pipeline; earlier links are
/// unaffected.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct FilterError(pub String);

impl FilterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<regex::Error> for FilterError {
    fn from(err: regex::Error) -> Self {
        Self(format!("Invalid pattern: {err}"))
    }
}
