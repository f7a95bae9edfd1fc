//! One-time passcode configuration

use serde::{Deserialize, Serialize};

use super::env_parse;

/// Longest lifetime a code may be configured with (one day)
pub const MAX_TTL_SECONDS: i64 = 86_400;

/// OTP lifecycle configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds a freshly issued code stays valid
    pub ttl_seconds: i64,

    /// Verification attempts allowed before the entry is locked out
    pub max_attempts: u32,

    /// Seconds between background sweeps of expired entries
    pub sweep_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 600, // 10 minutes
            max_attempts: 5,
            sweep_interval_seconds: 60,
        }
    }
}

impl OtpConfig {
    /// Load from `OTP_TTL_SECONDS`, `OTP_MAX_ATTEMPTS` and
    /// `OTP_SWEEP_INTERVAL_SECONDS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_seconds: env_parse("OTP_TTL_SECONDS", defaults.ttl_seconds)
                .clamp(1, MAX_TTL_SECONDS),
            max_attempts: env_parse("OTP_MAX_ATTEMPTS", defaults.max_attempts).max(1),
            sweep_interval_seconds: env_parse(
                "OTP_SWEEP_INTERVAL_SECONDS",
                defaults.sweep_interval_seconds,
            )
            .max(1),
        }
    }

    /// TTL rounded up to whole minutes, for human-readable notices
    pub fn ttl_minutes(&self) -> i64 {
        (self.ttl_seconds.clamp(0, MAX_TTL_SECONDS) + 59) / 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OtpConfig::default();
        assert_eq!(config.ttl_seconds, 600);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.ttl_minutes(), 10);
    }

    #[test]
    fn test_ttl_minutes_rounds_up() {
        let config = OtpConfig {
            ttl_seconds: 301,
            ..Default::default()
        };
        assert_eq!(config.ttl_minutes(), 6);
    }

    #[test]
    fn test_ttl_minutes_caps_oversized_ttl() {
        let config = OtpConfig {
            ttl_seconds: i64::MAX,
            ..Default::default()
        };
        assert_eq!(config.ttl_minutes(), MAX_TTL_SECONDS / 60);
    }
}
