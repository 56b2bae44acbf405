//! # precond - Precondition guards
//!
//! Wrap an operation so it only runs when its arguments satisfy a predicate.
//!
//! ## Core Concepts
//!
//! - **Guards**: a predicate paired with a target operation. Calling the
//!   guard checks the predicate first and only then runs the target.
//! - **Predicates**: named, pure boolean functions over a typed argument set.
//! - **Violations**: the error a rejected call returns. The target never runs.
//!
//! ## Modules
//!
//! - [`guard`] - Guards, stacking, and the [`guard::Operation`] trait
//! - [`predicate`] - Predicate trait and builders
//! - [`violation`] - Error taxonomy for rejected calls
//! - [`pattern`] - Regular-expression oracle
//! - [`greet`] - Guarded greetings
//! - [`hypothesis`] - icontract-hypothesis command lines
//! - [`config`] - Configuration for the precond CLI
//! - [`ui`] - Terminal output helpers
//!
//! ## Example
//!
//! ```
//! use precond::guard::Guard;
//! use precond::pattern::{Pattern, CAPITALIZED_NAME};
//! use precond::violation::Violation;
//!
//! let shout = Guard::new(Pattern::new(CAPITALIZED_NAME), |name: String| name.to_uppercase());
//!
//! assert_eq!(shout.call("Marko".to_string()).unwrap(), "MARKO");
//! assert!(matches!(
//!     shout.call("marko".to_string()),
//!     Err(Violation::Precondition { .. })
//! ));
//! ```

pub mod config;
pub mod greet;
pub mod guard;
pub mod hypothesis;
pub mod pattern;
pub mod predicate;
pub mod ui;
pub mod violation;

pub use guard::Guard;
pub use violation::Violation;
