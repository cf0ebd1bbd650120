//! Core domain types for the chain interpreter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One lexical token of a console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word, or a whole filter invocation when it follows a pipe
    Word(String),
    /// `|`
    Pipe,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `;`
    Sequence,
}

/// Operator relating a link to the result of the previous link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOp {
    /// `&&` — run only if the previous link succeeded
    And,
    /// `||` — run only if the previous link failed
    Or,
    /// `;` — run unconditionally
    Sequence,
}

/// One element of a parsed chain: an atomic command, its filter pipeline,
/// and the operator connecting it to the previous link's result.
///
/// `op` is `None` only for the first link of a chain. The parser guarantees
/// `command` is non-empty for every link it emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub command: String,
    pub pipes: Vec<String>,
    pub op: Option<ChainOp>,
}

/// Canonical result shape used everywhere inside the interpreter.
///
/// External runners may report success through differently-named fields;
/// that is normalized once at the runner boundary (see
/// [`crate::service::RawOutcome`]) so chain logic never branches on shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdOutcome {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CmdOutcome {
    /// A successful outcome carrying `output`.
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
        }
    }

    /// A failed outcome carrying `error` and no output.
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error.into()),
        }
    }
}

/// Read-only numeric console state consulted by condition clauses
/// (e.g. `heat`, `cash`, `level`, `energy`).
///
/// A fresh snapshot is supplied per interpreter invocation; the core never
/// mutates it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateSnapshot(BTreeMap<String, i64>);

impl StateSnapshot {
    pub fn new(fields: BTreeMap<String, i64>) -> Self {
        Self(fields)
    }

    /// Look up a field by its lower-cased name.
    pub fn get(&self, field: &str) -> Option<i64> {
        self.0.get(field).copied()
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &i64)> {
        self.0.iter()
    }
}

impl<const N: usize> From<[(&str, i64); N]> for StateSnapshot {
    fn from(fields: [(&str, i64); N]) -> Self {
        Self(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}
