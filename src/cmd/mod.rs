//! Command module structure for precond CLI

use anyhow::Result;
use std::path::Path;

use precond::config::Config;
use precond::greet::{Greeter, Greeting};
use precond::pattern::Pattern;
use precond::ui;

pub mod check;
pub mod greet;
pub mod hypothesis;
pub mod util;

/// Load configuration from an explicit file, or merge the global and project files.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load_merged(),
    }
}

/// Build the greeter for `greeting`, with `pattern_override` taking precedence
/// over the configured pattern.
pub fn build_greeter(
    config: &Config,
    greeting: Greeting,
    pattern_override: Option<&str>,
) -> Greeter {
    let pattern = match pattern_override {
        Some(source) => Pattern::new(source),
        None => config.name_pattern(),
    };

    if let Err(e) = pattern.matches("") {
        ui::warn(&format!(
            "Pattern '{}' does not compile, every name will be rejected\n{}",
            pattern, e
        ));
    }

    Greeter::new(greeting, pattern)
}
