//! Cache module for OTP entry storage
//!
//! Provides the in-memory store that backs the verification service and
//! the background task that sweeps expired entries out of it. Entries live
//! only as long as the process.

pub mod otp_store;
pub mod sweeper;

pub use otp_store::InMemoryOtpStore;
pub use sweeper::spawn_expiry_sweeper;
