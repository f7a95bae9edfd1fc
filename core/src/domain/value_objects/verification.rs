//! Successful verification of an email identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::OtpResult;

/// Proof that the caller possessed the code sent to `identity`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verified {
    /// Normalized email address that was verified
    pub identity: String,
    /// When the code was accepted
    pub verified_at: DateTime<Utc>,
}

/// Terminal outcome of a verification attempt
pub type VerificationOutcome = OtpResult<Verified>;
