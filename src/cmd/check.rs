//! Check names against the greeting precondition without greeting them.

use anyhow::Result;

use precond::greet::Greeter;
use precond::ui::{self, colors, CheckOutcome};

/// Check every name, print one line per name, fail if any was rejected.
pub fn cmd_check(greeter: &Greeter, names: &[String]) -> Result<()> {
    let mut rejected = 0;

    for name in names {
        let result = greeter.check(name);
        let icon = ui::outcome_icon(CheckOutcome::of(&result));

        match result {
            Ok(()) => println!("{} {}", icon, colors::identifier(name)),
            Err(violation) => {
                rejected += 1;
                println!("{} {}", icon, colors::error(name));
                if !ui::is_quiet() {
                    for line in ui::violation_report(&violation).lines() {
                        println!("    {}", colors::secondary(line));
                    }
                }
            }
        }
    }

    if rejected > 0 {
        anyhow::bail!("{} of {} names rejected", rejected, names.len());
    }

    if !ui::is_quiet() {
        println!("{}", colors::success("All names passed"));
    }
    Ok(())
}
