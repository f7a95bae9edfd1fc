//! Configuration for the OTP service

use chrono::Duration;
use pl_shared::config::{OtpConfig, MAX_TTL_SECONDS};

use crate::domain::entities::otp_entry::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TTL_SECONDS};

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds before an issued code expires
    pub ttl_seconds: i64,
    /// Verification attempts allowed per issued code
    pub max_attempts: u32,
}

impl OtpServiceConfig {
    /// Code lifetime, bounded to `0..=MAX_TTL_SECONDS`
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_seconds.clamp(0, MAX_TTL_SECONDS))
    }
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            ttl_seconds: config.ttl_seconds.clamp(0, MAX_TTL_SECONDS),
            max_attempts: config.max_attempts,
        }
    }
}
