// File: src/error.rs
// Purpose: Validation-time error taxonomy

use thiserror::Error;

/// Errors raised while evaluating a field's configured rules.
///
/// Neither variant aborts a whole-form validation pass: the offending field is
/// marked invalid with a diagnostic message and the remaining fields still
/// validate. The error is returned to the caller as well, so a misconfigured
/// rule name never passes silently.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A configured rule name has no registered rule.
    #[error("no validation rule named \"{rule}\" is registered")]
    UnknownRule { rule: String },

    /// A rule predicate panicked while evaluating a value. Predicates are
    /// expected to be total over any string input.
    #[error("validation rule \"{rule}\" failed to evaluate")]
    RuleEvaluation { rule: String },
}
