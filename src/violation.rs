//! Errors raised when a guarded call is rejected.
//!
//! A rejected call never reaches its target. The violation carries the
//! description of the predicate that rejected it and the arguments it was
//! given, rendered with `Debug`.

use thiserror::Error;

/// Boxed error produced by a predicate that could not be evaluated.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A rejected guarded call.
#[derive(Debug, Error)]
pub enum Violation {
    /// The predicate evaluated to false.
    #[error("Precondition violated: {predicate} (arguments: {arguments})")]
    Precondition {
        /// Description of the failing predicate
        predicate: String,
        /// Offending arguments
        arguments: String,
    },

    /// The predicate itself failed while evaluating.
    #[error("Precondition could not be evaluated: {predicate} (arguments: {arguments})")]
    PredicateEvaluation {
        /// Description of the failing predicate
        predicate: String,
        /// Offending arguments
        arguments: String,
        /// What went wrong inside the predicate
        #[source]
        source: BoxError,
    },
}

impl Violation {
    /// Description of the predicate that rejected the call.
    pub fn predicate(&self) -> &str {
        match self {
            Violation::Precondition { predicate, .. }
            | Violation::PredicateEvaluation { predicate, .. } => predicate,
        }
    }

    /// The rejected arguments, as rendered when the call was made.
    pub fn arguments(&self) -> &str {
        match self {
            Violation::Precondition { arguments, .. }
            | Violation::PredicateEvaluation { arguments, .. } => arguments,
        }
    }

    /// Whether the predicate failed to evaluate rather than returning false.
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, Violation::PredicateEvaluation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_precondition_display() {
        let violation = Violation::Precondition {
            predicate: "name: ^[A-Z][a-z]+$".to_string(),
            arguments: "NameArgs { name: \"marko\" }".to_string(),
        };

        assert_eq!(
            violation.to_string(),
            "Precondition violated: name: ^[A-Z][a-z]+$ (arguments: NameArgs { name: \"marko\" })"
        );
        assert_eq!(violation.predicate(), "name: ^[A-Z][a-z]+$");
        assert!(!violation.is_evaluation_error());
        assert!(violation.source().is_none());
    }

    #[test]
    fn test_evaluation_error_keeps_source() {
        let cause: BoxError = "pattern exploded".into();
        let violation = Violation::PredicateEvaluation {
            predicate: "exploding".to_string(),
            arguments: "()".to_string(),
            source: cause,
        };

        assert!(violation.is_evaluation_error());
        assert_eq!(violation.arguments(), "()");
        let source = violation.source().expect("source should be attached");
        assert_eq!(source.to_string(), "pattern exploded");
    }
}
