//! One-time passcode service for email verification
//!
//! This module provides the issue → deliver → verify → expire workflow:
//! - Code generation from the OS random source
//! - Storage of one pending entry per email identity
//! - Delivery through an [`EmailGateway`] with structured results
//! - Verification with attempt limits and single-use codes

mod config;
mod generator;
mod identity_lock;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use generator::{generate_code, CodeGenerator, SecureCodeGenerator};
pub use identity_lock::{IdentityGuard, IdentityLocks};
pub use service::OtpService;
pub use traits::{EmailGateway, OtpStore};
