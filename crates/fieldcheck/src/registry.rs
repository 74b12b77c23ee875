// File: src/registry.rs
// Purpose: Named rule registry with the built-in rule set

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use crate::error::ValidationError;
use crate::rule::Rule;

/// Mapping from rule name to [`Rule`].
///
/// Each [`FormValidator`](crate::FormValidator) owns its registry instance, so
/// registering a custom rule never leaks into other forms. Registration is
/// last-write-wins: a second `register` under the same name silently replaces
/// the first. There is no deletion.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// An empty registry with no rules at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the built-in rules: `required`, `email`, `url`,
    /// `password` and `phone`.
    ///
    /// `url` and `phone` pass on empty input while `required` and `email`
    /// fail on it; combine `required` with `url`/`phone` when emptiness
    /// should also fail.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            "required",
            Rule::new(fieldcheck_rules::is_non_empty, "This field is required."),
        );
        registry.register(
            "email",
            Rule::new(
                fieldcheck_rules::is_valid_email,
                "Please enter a valid e-mail address.",
            ),
        );
        registry.register(
            "url",
            Rule::new(fieldcheck_rules::is_valid_url, "Please enter a valid URL."),
        );
        registry.register(
            "password",
            Rule::new(
                fieldcheck_rules::is_valid_password,
                "Your password must be at least 8 characters long.",
            ),
        );
        registry.register(
            "phone",
            Rule::new(
                fieldcheck_rules::is_valid_phone,
                "Please enter a valid phone number.",
            ),
        );
        registry
    }

    /// Insert or replace the rule registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) {
        self.rules.insert(name.into(), rule);
    }

    /// Return the rule registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&Rule, ValidationError> {
        self.rules.get(name).ok_or_else(|| ValidationError::UnknownRule {
            rule: name.to_string(),
        })
    }

    /// Look up and run the named rule against a value.
    ///
    /// Returns `Ok(None)` when the rule passes and `Ok(Some(message))` with
    /// the rule's error message when it fails. A panicking predicate is
    /// caught and surfaced as [`ValidationError::RuleEvaluation`] instead of
    /// unwinding through the validation pass.
    pub fn evaluate(&self, name: &str, value: &str) -> Result<Option<&str>, ValidationError> {
        let rule = self.lookup(name)?;
        let passed = panic::catch_unwind(AssertUnwindSafe(|| rule.check(value))).map_err(|_| {
            ValidationError::RuleEvaluation {
                rule: name.to_string(),
            }
        })?;
        Ok(if passed { None } else { Some(rule.message()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_after_register_round_trips() {
        let mut registry = RuleRegistry::new();
        registry.register("even-length", Rule::new(|v: &str| v.len() % 2 == 0, "Odd."));

        let rule = registry.lookup("even-length").unwrap();
        assert!(rule.check("ab"));
        assert!(!rule.check("abc"));
        assert_eq!(rule.message(), "Odd.");
    }

    #[test]
    fn test_register_replaces_existing_rule() {
        let mut registry = RuleRegistry::new();
        registry.register("rule", Rule::new(|_: &str| true, "First."));
        registry.register("rule", Rule::new(|_: &str| false, "Second."));

        let rule = registry.lookup("rule").unwrap();
        assert!(!rule.check("anything"));
        assert_eq!(rule.message(), "Second.");
    }

    #[test]
    fn test_lookup_unknown_rule_errors() {
        let registry = RuleRegistry::new();
        let err = registry.lookup("missing").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownRule { rule } if rule == "missing"));
    }

    #[test]
    fn test_builtins_are_seeded() {
        let registry = RuleRegistry::with_builtins();
        for name in ["required", "email", "url", "password", "phone"] {
            assert!(registry.lookup(name).is_ok(), "builtin {name} missing");
        }
    }

    #[test]
    fn test_evaluate_reports_pass_and_failure() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.evaluate("required", "x").unwrap(), None);
        assert_eq!(
            registry.evaluate("required", "").unwrap(),
            Some("This field is required.")
        );
    }

    #[test]
    fn test_evaluate_catches_panicking_predicate() {
        let mut registry = RuleRegistry::new();
        registry.register("broken", Rule::new(|_: &str| panic!("boom"), "Broken."));

        let err = registry.evaluate("broken", "value").unwrap_err();
        assert!(matches!(err, ValidationError::RuleEvaluation { rule } if rule == "broken"));
    }
}
