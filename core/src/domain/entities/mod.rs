//! Domain entities representing core business objects.

pub mod otp_entry;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use otp_entry::{OtpEntry, CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_TTL_SECONDS};
