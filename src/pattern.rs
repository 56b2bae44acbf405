//! Regular-expression oracle used by name predicates.
//!
//! A [`Pattern`] answers one question: does this text match? Compilation is
//! deferred to the first evaluation so patterns read from configuration can be
//! attached to a guard up front; a pattern that fails to compile rejects every
//! call with an evaluation error instead of panicking.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::predicate::Predicate;
use crate::violation::BoxError;

/// A capitalized name: one uppercase ASCII letter followed by lowercase letters.
pub const CAPITALIZED_NAME: &str = r"^[A-Z][a-z]+$";

/// Regular expression treated as a boolean oracle.
pub struct Pattern {
    source: String,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl Pattern {
    /// Create a pattern without compiling it.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            compiled: OnceLock::new(),
        }
    }

    /// Create a pattern, failing immediately on invalid syntax.
    pub fn compile(source: impl Into<String>) -> Result<Self> {
        let pattern = Self::new(source);
        pattern
            .regex()
            .with_context(|| format!("Invalid pattern '{}'", pattern.source))?;
        Ok(pattern)
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `text` matches. Errors only if the pattern does not compile.
    pub fn matches(&self, text: &str) -> Result<bool, regex::Error> {
        Ok(self.regex()?.is_match(text))
    }

    fn regex(&self) -> Result<&Regex, regex::Error> {
        self.compiled
            .get_or_init(|| Regex::new(&self.source))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl Clone for Pattern {
    fn clone(&self) -> Self {
        let compiled = OnceLock::new();
        if let Some(result) = self.compiled.get() {
            let _ = compiled.set(result.clone());
        }
        Self {
            source: self.source.clone(),
            compiled,
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl<A: AsRef<str> + ?Sized> Predicate<A> for Pattern {
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.source)
    }

    fn evaluate(&self, args: &A) -> Result<bool, BoxError> {
        Ok(self.matches(args.as_ref())?)
    }
}
