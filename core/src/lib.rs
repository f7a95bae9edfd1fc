//! # Platter Core
//!
//! Core business logic and domain layer for the Platter backend.
//! This crate contains the one-time passcode (OTP) email verification
//! subsystem: domain entities, value objects, the error taxonomy, the
//! verification service, and the store/gateway traits it depends on.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
