//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-chain console for composing atomic commands with pipes and
/// short-circuit operators
#[derive(Parser)]
#[command(
    name = "cmdchain",
    version,
    about = "Command-chain console with pipes, short-circuit operators and conditionals",
    long_about = "An interactive text console whose lines compose atomic commands with \
                  | ; && || and single-clause if/then/else conditionals, routing command \
                  output through a pipeline of text filters."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive console (alias: console)
    #[command(alias = "console")]
    Repl,
    /// Interpret a single line and print the JSON result
    Exec {
        /// The console line to interpret
        line: String,
    },
    /// List the available text filters
    Filters,
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}
