//! CLI entry point for precond.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use precond::greet::Greeting;
use precond::hypothesis::Invocation;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("PRECOND_QUIET", "1");
    }

    match cli.command {
        Some(Commands::Version { verbose }) => return cmd::util::cmd_version(verbose),
        Some(Commands::Completion { shell }) => return cmd::util::cmd_completion(shell),
        _ => {}
    }

    let config = cmd::load_config(cli.config.as_deref())?;
    let pattern = cli.pattern.as_deref();

    match cli.command {
        None => {
            let greeter = cmd::build_greeter(&config, Greeting::Hi, pattern);
            cmd::greet::cmd_greet(&greeter, &config.greeting.default_name)
        }
        Some(Commands::Hi { name }) => {
            let greeter = cmd::build_greeter(&config, Greeting::Hi, pattern);
            cmd::greet::cmd_greet(&greeter, &name)
        }
        Some(Commands::Oi { name }) => {
            let greeter = cmd::build_greeter(&config, Greeting::Oi, pattern);
            cmd::greet::cmd_greet(&greeter, &name)
        }
        Some(Commands::Check { names }) => {
            let greeter = cmd::build_greeter(&config, Greeting::Hi, pattern);
            cmd::check::cmd_check(&greeter, &names)
        }
        Some(Commands::Hypothesis {
            action,
            path,
            line,
            output,
            python,
            run,
        }) => {
            let python = python.unwrap_or(config.hypothesis.python);
            let invocation = Invocation {
                python,
                action,
                path,
                line,
                output,
            };
            cmd::hypothesis::cmd_hypothesis(&invocation, run)
        }
        Some(Commands::Version { .. }) | Some(Commands::Completion { .. }) => Ok(()),
    }
}
