//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Platter backend,
//! following Clean Architecture principles. It provides the concrete
//! implementations behind the traits declared in `pl_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Email**: SendGrid (HTTP API) and SMTP providers, a console mock, and
//!   the [`email::EmailDeliveryGateway`] that tries them in order
//! - **Cache**: the in-memory OTP store with lazy expiry and a sweeper hook

// Re-export core types for convenience
pub use pl_core::errors::*;

/// Email module - delivery providers and the OTP email gateway
pub mod email;

/// Cache module - OTP entry storage
pub mod cache;

pub use cache::{spawn_expiry_sweeper, InMemoryOtpStore};
pub use email::{create_email_gateway, EmailDeliveryGateway};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider rejected or could not build the message
    #[error("Email service error: {0}")]
    Email(String),
}
