//! Value objects representing immutable domain concepts.

pub mod delivery;
pub mod verification;

// Re-export commonly used types
pub use delivery::{DeliveryResult, NO_PROVIDER};
pub use verification::{Verified, VerificationOutcome};
