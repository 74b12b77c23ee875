// File: src/phone.rs
// Purpose: Mobile phone number predicate

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3458]\d{9}$").unwrap());

/// Validate mobile phone number format
///
/// An empty value passes; combine with `required` when the field is mandatory.
/// Non-empty values must be exactly 11 digits: a leading `1`, a second digit
/// in {3, 4, 5, 8}, then nine more digits.
pub fn is_valid_phone(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    PHONE_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_passes() {
        assert!(is_valid_phone(""));
    }

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid_phone("13800000000"));
        assert!(is_valid_phone("14712345678"));
        assert!(is_valid_phone("15912345678"));
        assert!(is_valid_phone("18012345678"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("23800000000")); // wrong leading digit
        assert!(!is_valid_phone("16800000000")); // second digit not in {3,4,5,8}
        assert!(!is_valid_phone("138000000001")); // 12 digits
        assert!(!is_valid_phone("1380000000a"));
    }
}
