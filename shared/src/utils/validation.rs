//! Email validation and masking helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest address accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

// Pragmatic address check: one '@', a non-empty local part without
// whitespace, and a dotted domain with a 2+ letter TLD.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Normalize an email address for use as a lookup key
///
/// Trims surrounding whitespace and lowercases the whole address, so that
/// `" User@Example.com "` and `"user@example.com"` share one OTP entry.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check if an email address is syntactically plausible
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty()
        && email.len() <= MAX_EMAIL_LENGTH
        && !email.contains("..")
        && EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logs (e.g., u***@example.com)
pub fn mask_email(email: &str) -> String {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
