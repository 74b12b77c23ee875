// File: src/password.rs
// Purpose: Password strength predicate

/// Validate password strength
///
/// Accepts 8 to 20 ASCII letters/digits containing at least one letter and at
/// least one digit. The regex crate doesn't support lookaheads, so the
/// character-class requirements are checked manually.
pub fn is_valid_password(value: &str) -> bool {
    if value.len() < 8 || value.len() > 20 {
        return false;
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    value.chars().any(|c| c.is_ascii_alphabetic()) && value.chars().any(|c| c.is_ascii_digit())
}
