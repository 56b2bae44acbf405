//! Greeting commands.

use anyhow::{Context, Result};

use precond::greet::Greeter;

/// Greet `name`, refusing names the greeter's precondition rejects.
pub fn cmd_greet(greeter: &Greeter, name: &str) -> Result<()> {
    let line = greeter
        .greet(name)
        .with_context(|| format!("Refusing to greet '{}'", name))?;

    println!("{}", line);
    Ok(())
}
