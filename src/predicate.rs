//! Named predicates over typed argument sets.
//!
//! A predicate is evaluated against a borrowed view of the arguments a guarded
//! operation is about to receive. Predicates are plain values: build them with
//! [`named`], [`fallible`] or [`field`], or implement [`Predicate`] directly.

use std::borrow::Cow;

use crate::violation::BoxError;

/// A boolean check over an argument set `A`.
///
/// Implementations must be pure: the same arguments always produce the same
/// outcome, and evaluation never mutates them.
pub trait Predicate<A: ?Sized> {
    /// Human readable description, reported in violations.
    fn description(&self) -> Cow<'_, str>;

    /// Evaluate the predicate.
    ///
    /// `Err` means the predicate could not reach a decision. Guards treat it
    /// as a rejection and attach the error as the cause.
    fn evaluate(&self, args: &A) -> Result<bool, BoxError>;
}

impl<A: ?Sized, P: Predicate<A> + ?Sized> Predicate<A> for &P {
    fn description(&self) -> Cow<'_, str> {
        (**self).description()
    }

    fn evaluate(&self, args: &A) -> Result<bool, BoxError> {
        (**self).evaluate(args)
    }
}

/// Infallible predicate built by [`named`].
#[derive(Debug, Clone)]
pub struct Named<F> {
    description: Cow<'static, str>,
    check: F,
}

/// Build a predicate from a description and a boolean function.
pub fn named<F>(description: impl Into<Cow<'static, str>>, check: F) -> Named<F> {
    Named {
        description: description.into(),
        check,
    }
}

impl<F> Named<F> {
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<A: ?Sized, F> Predicate<A> for Named<F>
where
    F: Fn(&A) -> bool,
{
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.description)
    }

    fn evaluate(&self, args: &A) -> Result<bool, BoxError> {
        Ok((self.check)(args))
    }
}

/// Predicate whose evaluation may fail, built by [`fallible`].
#[derive(Debug, Clone)]
pub struct Fallible<F> {
    description: Cow<'static, str>,
    check: F,
}

/// Build a predicate from a description and a function that may fail to decide.
pub fn fallible<F>(description: impl Into<Cow<'static, str>>, check: F) -> Fallible<F> {
    Fallible {
        description: description.into(),
        check,
    }
}

impl<F> Fallible<F> {
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<A: ?Sized, F, E> Predicate<A> for Fallible<F>
where
    F: Fn(&A) -> Result<bool, E>,
    E: Into<BoxError>,
{
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.description)
    }

    fn evaluate(&self, args: &A) -> Result<bool, BoxError> {
        (self.check)(args).map_err(Into::into)
    }
}

/// Predicate over one named argument of a larger argument set.
///
/// Built by [`field`]. The projection is a function pointer so the argument
/// binding stays a static, checkable part of the predicate.
pub struct Field<A: ?Sized, B: ?Sized, P> {
    name: &'static str,
    project: fn(&A) -> &B,
    predicate: P,
}

/// Apply `predicate` to the argument called `name`, reached through `project`.
///
/// ```
/// use precond::pattern::Pattern;
/// use precond::predicate::{field, Predicate};
///
/// #[derive(Debug)]
/// struct Args {
///     name: String,
/// }
///
/// fn name_of(args: &Args) -> &str {
///     &args.name
/// }
///
/// let check = field("name", name_of, Pattern::new("^[A-Z][a-z]+$"));
/// assert_eq!(check.description(), "name: ^[A-Z][a-z]+$");
/// assert!(check.evaluate(&Args { name: "Ada".into() }).unwrap());
/// ```
pub fn field<A: ?Sized, B: ?Sized, P>(
    name: &'static str,
    project: fn(&A) -> &B,
    predicate: P,
) -> Field<A, B, P> {
    Field {
        name,
        project,
        predicate,
    }
}

impl<A: ?Sized, B: ?Sized, P> Field<A, B, P> {
    /// Name of the argument this predicate reads.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<A: ?Sized, B: ?Sized, P: Predicate<B>> Predicate<A> for Field<A, B, P> {
    fn description(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{}: {}", self.name, self.predicate.description()))
    }

    fn evaluate(&self, args: &A) -> Result<bool, BoxError> {
        self.predicate.evaluate((self.project)(args))
    }
}

impl<A: ?Sized, B: ?Sized, P: Clone> Clone for Field<A, B, P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            project: self.project,
            predicate: self.predicate.clone(),
        }
    }
}

impl<A: ?Sized, B: ?Sized, P: std::fmt::Debug> std::fmt::Debug for Field<A, B, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("predicate", &self.predicate)
            .finish()
    }
}
