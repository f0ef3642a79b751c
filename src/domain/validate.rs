//! Field validators mirroring the checks the dashboard runs before it
//! submits a form. Each returns an error message, or `""` when the field
//! is valid, so callers can surface the string next to the field as-is.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

pub fn validate_email(email: &str) -> String {
    if EMAIL_RE.is_match(email.trim()) {
        String::new()
    } else {
        "Please enter a valid email address".to_string()
    }
}

pub fn validate_phone(phone: &str) -> String {
    if PHONE_RE.is_match(phone.trim()) {
        String::new()
    } else {
        "Phone number must be exactly 10 digits".to_string()
    }
}

/// At least 8 characters with an uppercase letter, a lowercase letter,
/// a digit and a special character. The regex crate has no lookahead, so
/// the character classes are checked directly.
pub fn validate_password(password: &str) -> String {
    let long_enough = password.chars().count() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if long_enough && has_upper && has_lower && has_digit && has_special {
        String::new()
    } else {
        "Password must be at least 8 characters and include uppercase, lowercase, a number and a special character"
            .to_string()
    }
}
