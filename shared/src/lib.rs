//! Shared utilities and common types for the Platter server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Utility functions (email validation, masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, EmailConfig, Environment, LoggingConfig, OtpConfig, ServerConfig,
    SendGridConfig, SmtpConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, MessageResponse};
pub use utils::validation;
