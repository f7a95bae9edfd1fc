//! Pending one-time passcode for email verification.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;

/// Number of digits in a one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a code (10 minutes)
pub const DEFAULT_TTL_SECONDS: i64 = 600;

/// Default number of verification attempts before lockout
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// A pending code issued to one email identity
///
/// At most one entry exists per identity; issuing again replaces it.
/// `Debug` never prints the code.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpEntry {
    /// Normalized email address the code was issued to
    pub identity: String,

    /// The 6-digit code
    pub code: String,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,

    /// Verification attempts made against this entry
    pub attempts: u32,
}

impl OtpEntry {
    /// Creates an entry issued now that lives for `ttl`
    pub fn new(identity: impl Into<String>, code: impl Into<String>, ttl: Duration) -> Self {
        Self::issued_at(identity, code, Utc::now(), ttl)
    }

    /// Creates an entry with an explicit issuance time
    pub fn issued_at(
        identity: impl Into<String>,
        code: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            identity: identity.into(),
            code: code.into(),
            issued_at,
            expires_at: issued_at + ttl,
            attempts: 0,
        }
    }

    /// Checks expiry against the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Checks expiry against the current time
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whether the attempt budget is used up
    pub fn is_exhausted(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }

    /// Attempts left before lockout (0 if exhausted)
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }

    /// Compares a submitted code without short-circuiting on the first
    /// differing byte
    pub fn matches(&self, submitted: &str) -> bool {
        if self.code.len() != submitted.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }
}

impl fmt::Debug for OtpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpEntry")
            .field("identity", &self.identity)
            .field("code", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .field("attempts", &self.attempts)
            .finish()
    }
}
