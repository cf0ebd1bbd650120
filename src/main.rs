//! cmdchain: command-chain console
//!
//! A console binary around the cmdchain interpreter: reads chain lines,
//! runs them against the bundled demo runner and the configured state
//! snapshot, and prints results. Real applications embed the library and
//! inject their own runner.

mod cli;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use cmdchain::config::{self, Config, ConfigService};
use cmdchain::domain::logger;
use cmdchain::{DemoRunner, Interpreter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigService::load(cli.config.as_deref())?;

    if cli.debug || config.debug {
        logger::init(&config)?;
    }

    match cli.command {
        Commands::Repl => {
            run_repl(&config).await?;
        }
        Commands::Exec { line } => {
            let interpreter = demo_interpreter(&config);
            let result = interpreter.interpret(&line, &config.snapshot()).await;
            println!("{}", serde_json::to_string(&result)?);
            if !result.success {
                process::exit(1);
            }
        }
        Commands::Filters => {
            println!("{}", Interpreter::new().registry().help_text());
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("cmdchain {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn demo_interpreter(config: &Config) -> Interpreter {
    Interpreter::with_runner(Box::new(DemoRunner::new(config.snapshot())))
}

/// Interactive line loop. A fresh state snapshot is taken per line, per the
/// interpreter's one-snapshot-per-invocation contract. Stdin is read
/// synchronously; the console is single-user and one line is in flight at
/// a time anyway.
async fn run_repl(config: &Config) -> Result<()> {
    let interpreter = demo_interpreter(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        if line == "filters" {
            writeln!(stdout, "{}", interpreter.registry().help_text())?;
            continue;
        }

        let result = interpreter.interpret(line, &config.snapshot()).await;
        if !result.output.is_empty() {
            writeln!(stdout, "{}", result.output)?;
        }
    }

    Ok(())
}
