//! Atomic command runner seam.
//!
//! The interpreter never executes commands itself: the host application
//! injects an implementation of [`CommandRunner`] and the executor awaits
//! it once per link. Runners in the wild disagree on how they report
//! success (`output` vs `message`), so their raw shape is normalized into
//! the canonical [`CmdOutcome`] exactly once, here at the boundary —
//! chain logic never branches on shape.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{CmdOutcome, StateSnapshot};

/// Raw result shape as produced by external command runners.
///
/// Success text may arrive in either `output` or `message`; `output` wins
/// when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOutcome {
    pub success: bool,

    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl RawOutcome {
    /// A successful raw outcome with text in the `output` field.
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            success: true,
            output: Some(text.into()),
            ..Self::default()
        }
    }

    /// A successful raw outcome with text in the `message` field.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(text.into()),
            ..Self::default()
        }
    }

    /// A failed raw outcome.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(text.into()),
            ..Self::default()
        }
    }

    /// Collapse the raw shape into the canonical result type.
    pub fn normalize(self) -> CmdOutcome {
        let text = self.output.or(self.message).unwrap_or_default();
        if self.success {
            CmdOutcome::ok(text)
        } else {
            CmdOutcome {
                success: false,
                output: text,
                error: Some(self.error.unwrap_or_else(|| "Command failed".to_string())),
            }
        }
    }
}

/// Executes one atomic command on behalf of the interpreter.
///
/// Implementations resolve the command string however the host application
/// likes; the interpreter only awaits the call and never issues two calls
/// concurrently, so side effects happen in strict chain order. Timeout
/// policy belongs to the runner, not the interpreter.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str) -> RawOutcome;
}

/// Reference runner used by the bundled console binary and tests.
///
/// Implements a handful of sample commands against the configured state
/// snapshot. Real embeddings supply their own runner; nothing in the
/// interpreter depends on this one.
pub struct DemoRunner {
    state: StateSnapshot,
}

impl DemoRunner {
    pub fn new(state: StateSnapshot) -> Self {
        Self { state }
    }
}

#[async_trait]
impl CommandRunner for DemoRunner {
    async fn run(&self, command: &str) -> RawOutcome {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        match name {
            "echo" => RawOutcome::output(rest.join(" ")),
            // Deliberately reports through `message`, exercising the
            // shape normalization the way real runners do.
            "status" => {
                let lines: Vec<String> = self
                    .state
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect();
                RawOutcome::message(lines.join("\n"))
            }
            "fail" => {
                let reason = if rest.is_empty() {
                    "forced failure".to_string()
                } else {
                    rest.join(" ")
                };
                RawOutcome::error(reason)
            }
            _ => RawOutcome::error(format!("Unknown command: {name}")),
        }
    }
}
