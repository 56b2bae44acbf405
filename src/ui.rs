//! Terminal output helpers
//!
//! Colors, icons and the warning/violation formats used by the precond CLI.

use colored::{ColoredString, Colorize};
use std::error::Error;

use crate::violation::Violation;

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("PRECOND_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Outcome of checking one set of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Rejected,
    Unevaluated,
}

impl CheckOutcome {
    pub fn of(result: &Result<(), Violation>) -> Self {
        match result {
            Ok(()) => CheckOutcome::Passed,
            Err(Violation::Precondition { .. }) => CheckOutcome::Rejected,
            Err(Violation::PredicateEvaluation { .. }) => CheckOutcome::Unevaluated,
        }
    }
}

/// Returns a colored icon for a check outcome.
///
/// Icons:
/// - Passed: ● (green)
/// - Rejected: ✗ (red)
/// - Unevaluated: ⚠ (yellow)
pub fn outcome_icon(outcome: CheckOutcome) -> ColoredString {
    match outcome {
        CheckOutcome::Passed => "●".green(),
        CheckOutcome::Rejected => "✗".red(),
        CheckOutcome::Unevaluated => "⚠".yellow(),
    }
}

/// Print a warning to stderr unless quiet mode is on.
pub fn warn(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "Warning:".yellow(), message);
    }
}

/// Multi-line report for a rejected call, cause chain included.
pub fn violation_report(violation: &Violation) -> String {
    let mut report = format!(
        "{}\n  predicate: {}\n  arguments: {}",
        violation,
        violation.predicate(),
        violation.arguments()
    );

    let mut source = violation.source();
    while let Some(cause) = source {
        report.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }

    report
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (names, patterns)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_outcome_icon_all_outcomes() {
        outcome_icon(CheckOutcome::Passed);
        outcome_icon(CheckOutcome::Rejected);
        outcome_icon(CheckOutcome::Unevaluated);
    }

    #[test]
    fn test_outcome_of() {
        assert_eq!(CheckOutcome::of(&Ok(())), CheckOutcome::Passed);

        let rejected = Err(Violation::Precondition {
            predicate: "p".to_string(),
            arguments: "a".to_string(),
        });
        assert_eq!(CheckOutcome::of(&rejected), CheckOutcome::Rejected);

        let unevaluated = Err(Violation::PredicateEvaluation {
            predicate: "p".to_string(),
            arguments: "a".to_string(),
            source: "boom".into(),
        });
        assert_eq!(CheckOutcome::of(&unevaluated), CheckOutcome::Unevaluated);
    }

    #[test]
    fn test_violation_report_includes_cause() {
        let violation = Violation::PredicateEvaluation {
            predicate: "name: [a-".to_string(),
            arguments: "NameArgs { name: \"Ada\" }".to_string(),
            source: "unclosed character class".into(),
        };

        let report = violation_report(&violation);
        assert!(report.contains("predicate: name: [a-"));
        assert!(report.contains("arguments: NameArgs { name: \"Ada\" }"));
        assert!(report.contains("caused by: unclosed character class"));
    }

    #[test]
    #[serial]
    fn test_is_quiet() {
        std::env::set_var("PRECOND_QUIET", "true");
        assert!(is_quiet());
        std::env::set_var("PRECOND_QUIET", "0");
        assert!(!is_quiet());
        std::env::remove_var("PRECOND_QUIET");
        assert!(!is_quiet());
    }
}
