// File: src/email.rs
// Purpose: Email address predicate

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([-+.]\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$").unwrap()
});

/// Validate email format
///
/// An empty value fails: an email field with nothing in it is not a valid
/// address. Dots, hyphens and plus signs are accepted as separators inside
/// the local part and domain labels.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fails() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_valid_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(is_valid_email("first-last@mail-server.org"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("test@nodot"));
        assert!(!is_valid_email("two@@example.com"));
    }
}
