//! Authentication route handlers
//!
//! Email verification by one-time passcode:
//! - Requesting a code (`request-otp`)
//! - Verifying a code (`verify-otp`)

pub mod request_otp;
pub mod verify_otp;

pub use request_otp::request_otp;
pub use verify_otp::verify_otp;
