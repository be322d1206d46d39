//! Command-line interface for leakscan
//!
//! Argument parsing with clap and dispatch to the command modules.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
pub mod output;

pub use output::Output;

/// Leakscan - secret scanning and redaction for git history cleanup
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan files or directories for secrets
    Scan(commands::scan::ScanArgs),
    /// Classify file paths by secret-storage risk
    Risk(commands::risk::RiskArgs),
    /// Redact text into a display-safe, hash-correlatable form
    Redact(commands::redact::RedactArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Scan(args)) => commands::scan::execute(args, &output),
            Some(Commands::Risk(args)) => commands::risk::execute(args, &output),
            Some(Commands::Redact(args)) => commands::redact::execute(args),
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
