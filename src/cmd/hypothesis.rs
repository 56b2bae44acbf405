//! icontract-hypothesis command.

use anyhow::{Context, Result};
use std::process::Command;

use precond::hypothesis::Invocation;
use precond::ui::{self, colors};

/// Print the icontract-hypothesis command for `invocation`, or run it.
pub fn cmd_hypothesis(invocation: &Invocation, run: bool) -> Result<()> {
    let command = invocation.command_line().with_context(|| {
        format!(
            "Cannot build an icontract-hypothesis command for '{}'",
            invocation.path
        )
    })?;

    if !run {
        println!("{}", command);
        return Ok(());
    }

    if !ui::is_quiet() {
        eprintln!("{} {}", colors::secondary("Running"), colors::identifier(&command));
    }

    let argv = invocation.argv()?;
    let (program, args) = argv
        .split_first()
        .context("icontract-hypothesis command is empty")?;

    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run {}", program))?;

    if !status.success() {
        anyhow::bail!("icontract-hypothesis failed ({})", status);
    }
    Ok(())
}
