//! Guarded greetings.
//!
//! Both greetings only accept a capitalized name. The process-wide greeters
//! behind [`print_hi`] and [`print_oi`] are built once on first use and live
//! for the rest of the program.

use std::fmt;
use std::sync::LazyLock;

use crate::guard::{Guard, Unguarded};
use crate::pattern::{Pattern, CAPITALIZED_NAME};
use crate::predicate::{field, Field};
use crate::violation::Violation;

/// Arguments of a greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameArgs {
    pub name: String,
}

impl NameArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn name_of(args: &NameArgs) -> &str {
    &args.name
}

/// Which greeting to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Hi,
    Oi,
}

impl Greeting {
    pub fn word(self) -> &'static str {
        match self {
            Greeting::Hi => "Hi",
            Greeting::Oi => "Oi",
        }
    }

    fn render(self) -> fn(NameArgs) -> String {
        match self {
            Greeting::Hi => render_hi,
            Greeting::Oi => render_oi,
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

fn render_hi(args: NameArgs) -> String {
    format!("{} {}!", Greeting::Hi.word(), quoted(&args.name))
}

fn render_oi(args: NameArgs) -> String {
    format!("{} {}!", Greeting::Oi.word(), quoted(&args.name))
}

/// Quote a name for display.
///
/// Single quotes by default; double quotes when the name contains a single
/// quote but no double quote. Backslashes, the chosen quote and control
/// characters are escaped.
pub fn quoted(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for ch in name.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Predicate applied to the `name` argument of a greeting.
pub type NamePredicate = Field<NameArgs, str, Pattern>;

/// A greeting guarded by a name pattern.
#[derive(Debug, Clone)]
pub struct Greeter {
    greeting: Greeting,
    guard: Guard<NamePredicate, Unguarded<fn(NameArgs) -> String>>,
}

impl Greeter {
    pub fn new(greeting: Greeting, pattern: Pattern) -> Self {
        Self {
            greeting,
            guard: Guard::new(field("name", name_of, pattern), greeting.render()),
        }
    }

    /// Greeter accepting only capitalized names.
    pub fn capitalized(greeting: Greeting) -> Self {
        Self::new(greeting, Pattern::new(CAPITALIZED_NAME))
    }

    pub fn greeting(&self) -> Greeting {
        self.greeting
    }

    /// Render the greeting for `name`, or reject it.
    pub fn greet(&self, name: &str) -> Result<String, Violation> {
        self.guard.call(NameArgs::new(name))
    }

    /// Run only the name check; nothing is rendered.
    pub fn check(&self, name: &str) -> Result<(), Violation> {
        self.guard.check(&NameArgs::new(name))
    }
}

static HI: LazyLock<Greeter> = LazyLock::new(|| Greeter::capitalized(Greeting::Hi));
static OI: LazyLock<Greeter> = LazyLock::new(|| Greeter::capitalized(Greeting::Oi));

/// Print `Hi '<name>'!` to stdout if `name` is capitalized.
pub fn print_hi(name: &str) -> Result<(), Violation> {
    let line = HI.greet(name)?;
    println!("{}", line);
    Ok(())
}

/// Print `Oi '<name>'!` to stdout if `name` is capitalized.
pub fn print_oi(name: &str) -> Result<(), Violation> {
    let line = OI.greet(name)?;
    println!("{}", line);
    Ok(())
}
