//! icontract-hypothesis command lines.
//!
//! Builds the shell command that runs `python -m icontract_hypothesis` on a
//! Python file: test it, inspect the strategies it would test with, or
//! ghostwrite an explicit test module for it. The invocation is checked by a
//! stack of guards before anything is rendered.
//!
//! ```
//! use precond::hypothesis::{Action, Invocation};
//!
//! let command = Invocation::new("python3", Action::Test, "my module.py")
//!     .at_line(12)
//!     .command_line()
//!     .unwrap();
//! assert_eq!(
//!     command,
//!     r#"python3 -m icontract_hypothesis test --path "my module.py" --include 12"#
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use crate::guard::Guard;
use crate::predicate::{field, named};
use crate::violation::Violation;

/// Python module run by every command.
pub const MODULE: &str = "icontract_hypothesis";

/// What icontract-hypothesis should do with the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Test the functions of the file.
    Test,
    /// Show the inferred strategies instead of testing.
    Inspect,
    /// Write an explicit test module for the file.
    Ghostwrite,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Test => "test",
            Action::Inspect => "inspect",
            Action::Ghostwrite => "ghostwrite",
        }
    }

    /// Whether the action can be narrowed to a single line.
    pub fn takes_line(self) -> bool {
        matches!(self, Action::Test | Action::Inspect)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Action::Test),
            "inspect" => Ok(Action::Inspect),
            "ghostwrite" => Ok(Action::Ghostwrite),
            other => Err(format!(
                "unknown action '{}' (expected test, inspect or ghostwrite)",
                other
            )),
        }
    }
}

/// One icontract-hypothesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Interpreter command, possibly several words (`conda run -n env python`).
    pub python: String,
    pub action: Action,
    /// Python file to work on.
    pub path: String,
    /// 1-based line to restrict `test` and `inspect` to.
    pub line: Option<u32>,
    /// File the ghostwritten tests are written to.
    pub output: Option<String>,
}

fn path_of(invocation: &Invocation) -> &str {
    &invocation.path
}

impl Invocation {
    pub fn new(python: impl Into<String>, action: Action, path: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            action,
            path: path.into(),
            line: None,
            output: None,
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn output_to(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// The command as a single shell line.
    ///
    /// Paths containing a space are wrapped in double quotes. Paths containing
    /// a double quote are rejected since they cannot be quoted this way.
    pub fn command_line(&self) -> Result<String, Violation> {
        self.guarded(render_command_line)
    }

    /// The command as a program followed by its arguments, unquoted.
    pub fn argv(&self) -> Result<Vec<String>, Violation> {
        self.guarded(render_argv)
    }

    fn guarded<R>(&self, target: fn(Invocation) -> R) -> Result<R, Violation> {
        let guard = Guard::new(
            named("python is not empty", |i: &Invocation| {
                !i.python.trim().is_empty()
            }),
            target,
        )
        .and(field("path", path_of, named("not empty", |p: &str| !p.is_empty())))
        .and(field(
            "path",
            path_of,
            named("contains no double quote", |p: &str| !p.contains('"')),
        ))
        .and(named("line is at least 1", |i: &Invocation| {
            i.line.map_or(true, |line| line >= 1)
        }))
        .and(named("line is only given to test or inspect", |i: &Invocation| {
            i.line.is_none() || i.action.takes_line()
        }))
        .and(named("output is only given to ghostwrite", |i: &Invocation| {
            i.output.is_none() || i.action == Action::Ghostwrite
        }))
        .and(named("output contains no double quote", |i: &Invocation| {
            i.output.as_deref().map_or(true, |o| !o.contains('"'))
        }));

        guard.call(self.clone())
    }

    /// Arguments after `-m icontract_hypothesis`, with paths passed through `quote`.
    fn module_arguments(&self, quote: fn(&str) -> String) -> Vec<String> {
        let mut args: Vec<String> = match self.action {
            Action::Test => vec!["test".into()],
            Action::Inspect => vec!["test".into(), "--inspect".into()],
            Action::Ghostwrite => vec!["ghostwrite".into(), "--explicit".into()],
        };

        args.push("--path".into());
        args.push(quote(&self.path));

        if let Some(line) = self.line {
            args.push("--include".into());
            args.push(line.to_string());
        }
        if let Some(output) = &self.output {
            args.push("--output".into());
            args.push(quote(output));
        }

        args
    }
}

/// Wrap `path` in double quotes when it contains a space.
pub fn escape_path(path: &str) -> String {
    if path.contains(' ') {
        format!("\"{}\"", path)
    } else {
        path.to_string()
    }
}

fn render_command_line(invocation: Invocation) -> String {
    let mut parts = vec![invocation.python.trim().to_string(), "-m".into(), MODULE.into()];
    parts.extend(invocation.module_arguments(escape_path));
    parts.join(" ")
}

fn render_argv(invocation: Invocation) -> Vec<String> {
    let mut argv: Vec<String> = invocation
        .python
        .split_whitespace()
        .map(str::to_string)
        .collect();
    argv.push("-m".into());
    argv.push(MODULE.into());
    argv.extend(invocation.module_arguments(str::to_string));
    argv
}
