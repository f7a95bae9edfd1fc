//! Unit tests for the OTP entry entity

use chrono::{Duration, Utc};

use crate::domain::entities::otp_entry::{OtpEntry, DEFAULT_MAX_ATTEMPTS, DEFAULT_TTL_SECONDS};

fn entry(code: &str) -> OtpEntry {
    OtpEntry::new("user@example.com", code, Duration::seconds(DEFAULT_TTL_SECONDS))
}

#[test]
fn test_new_entry() {
    let entry = entry("483920");

    assert_eq!(entry.identity, "user@example.com");
    assert_eq!(entry.attempts, 0);
    assert_eq!(entry.expires_at - entry.issued_at, Duration::seconds(DEFAULT_TTL_SECONDS));
    assert!(!entry.is_expired());
    assert!(!entry.is_exhausted(DEFAULT_MAX_ATTEMPTS));
}

#[test]
fn test_expiry_boundary() {
    let issued = Utc::now() - Duration::minutes(20);
    let entry = OtpEntry::issued_at("user@example.com", "483920", issued, Duration::minutes(10));

    assert!(entry.is_expired());
    assert!(entry.is_expired_at(entry.expires_at));
    assert!(!entry.is_expired_at(entry.expires_at - Duration::seconds(1)));
}

#[test]
fn test_matches() {
    let entry = entry("483920");

    assert!(entry.matches("483920"));
    assert!(!entry.matches("000000"));
    assert!(!entry.matches("48392"));
    assert!(!entry.matches("4839200"));
    assert!(!entry.matches(""));
}

#[test]
fn test_attempt_budget() {
    let mut entry = entry("483920");
    entry.attempts = 3;
    assert_eq!(entry.remaining_attempts(5), 2);
    assert!(!entry.is_exhausted(5));

    entry.attempts = 5;
    assert_eq!(entry.remaining_attempts(5), 0);
    assert!(entry.is_exhausted(5));

    entry.attempts = 7;
    assert_eq!(entry.remaining_attempts(5), 0);
}

#[test]
fn test_debug_redacts_code() {
    let rendered = format!("{:?}", entry("483920"));
    assert!(!rendered.contains("483920"));
    assert!(rendered.contains("REDACTED"));
}
