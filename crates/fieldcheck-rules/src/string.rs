// File: src/string.rs
// Purpose: Presence and URL predicates

use once_cell::sync::Lazy;
use regex::Regex;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(.+\.)+.{2,4}(/.*)?$").unwrap()
});

/// Validate that a value is present
pub fn is_non_empty(value: &str) -> bool {
    !value.is_empty()
}

/// Validate URL format
///
/// An empty value passes; combine with `required` when the field is mandatory.
/// Non-empty values need an http/https scheme, a host with at least one
/// dot-separated segment and a 2-4 character final label, optionally followed
/// by a path.
pub fn is_valid_url(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    URL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(!is_non_empty(""));
        assert!(is_non_empty("a"));
        assert!(is_non_empty(" ")); // whitespace still counts as present
    }

    #[test]
    fn test_empty_url_passes() {
        assert!(is_valid_url(""));
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("http://a.b.co/x"));
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://sub.example.org/path/to/page"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("http://nodots"));
        assert!(!is_valid_url("example.com"));
    }
}
