//! cmdchain: embeddable command-chain interpreter
//!
//! A small interpreter that lets an interactive text console compose
//! previously-registered atomic commands with pipes (`|`), sequencing (`;`),
//! short-circuit operators (`&&`, `||`), and a single-clause conditional
//! (`if … then … else …`). Command implementations live in the host
//! application and are injected through the [`CommandRunner`] trait; the
//! interpreter owns tokenization, chain parsing, the text-filter pipeline,
//! and condition evaluation.

pub mod config;
pub mod domain;
pub mod service;

pub use domain::filters::FilterRegistry;
pub use domain::{ChainError, CmdOutcome, StateSnapshot};
pub use service::{CommandRunner, DemoRunner, Interpreter, RawOutcome};
