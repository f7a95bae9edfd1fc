//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `email` - Email providers, sender identity and delivery timeout
//! - `environment` - Environment detection and logging configuration
//! - `otp` - One-time passcode lifetime and attempt limits
//! - `server` - HTTP server and CORS configuration

pub mod email;
pub mod environment;
pub mod otp;
pub mod server;

use std::env;
use std::str::FromStr;

// Re-export commonly used types
pub use email::{EmailConfig, SendGridConfig, SmtpConfig};
pub use environment::{Environment, LoggingConfig};
pub use otp::{OtpConfig, MAX_TTL_SECONDS};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// OTP lifecycle configuration
    pub otp: OtpConfig,

    /// Email delivery configuration
    pub email: EmailConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            otp: OtpConfig::default(),
            email: EmailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            otp: OtpConfig::from_env(),
            email: EmailConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or malformed.
pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Read an environment variable, treating empty values as unset.
pub(crate) fn env_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
