//! CLI argument definitions for precond.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use precond::hypothesis::Action;

#[derive(Parser)]
#[command(name = "precond")]
#[command(version)]
#[command(about = "Greet names that pass a precondition", long_about = None)]
#[command(
    after_help = "With no command, greets the configured default name:\n    precond                    Hi 'Marko'!\n    precond hi Ada             Hi 'Ada'!\n    precond check ada Ada      Check names without greeting"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of .precond/config.md
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the pattern names must match
    #[arg(long, global = true, value_name = "REGEX")]
    pub pattern: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Greet a name with "Hi"
    Hi {
        /// Name to greet (must match the name pattern)
        name: String,
    },
    /// Greet a name with "Oi"
    Oi {
        /// Name to greet (must match the name pattern)
        name: String,
    },
    /// Check names against the pattern without greeting
    Check {
        /// Names to check
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print (or run) an icontract-hypothesis command for a Python file
    Hypothesis {
        /// What to do: test, inspect or ghostwrite
        #[arg(value_name = "ACTION")]
        action: Action,
        /// Python file to work on
        path: String,
        /// Only test or inspect the function at this 1-based line
        #[arg(long, value_name = "N")]
        line: Option<u32>,
        /// Write ghostwritten tests to this file
        #[arg(long, value_name = "FILE")]
        output: Option<String>,
        /// Python interpreter (overrides hypothesis.python from the config)
        #[arg(long, value_name = "COMMAND")]
        python: Option<String>,
        /// Run the command instead of printing it
        #[arg(long)]
        run: bool,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
