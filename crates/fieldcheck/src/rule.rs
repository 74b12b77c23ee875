// File: src/rule.rs
// Purpose: Named validation rule value type

/// A validation rule: a predicate over a field's current value paired with a
/// fixed error message shown when the predicate fails.
///
/// Rules are immutable once registered. The predicate must be total over any
/// string input, including the empty string.
pub struct Rule {
    check: Box<dyn Fn(&str) -> bool>,
    message: String,
}

impl Rule {
    pub fn new(check: impl Fn(&str) -> bool + 'static, message: impl Into<String>) -> Self {
        Self {
            check: Box::new(check),
            message: message.into(),
        }
    }

    /// Run the predicate against a value.
    pub fn check(&self, value: &str) -> bool {
        (self.check)(value)
    }

    /// The error message shown when the predicate fails.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_check_and_message() {
        let rule = Rule::new(|v: &str| v.len() > 2, "Too short.");
        assert!(rule.check("abc"));
        assert!(!rule.check("ab"));
        assert_eq!(rule.message(), "Too short.");
    }
}
