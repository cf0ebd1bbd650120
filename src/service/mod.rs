//! Service layer containing the executor and the runner seam.

mod interpreter;
mod runner;

pub use interpreter::Interpreter;
pub use runner::{CommandRunner, DemoRunner, RawOutcome};
