//! Error taxonomy of the OTP subsystem.
//!
//! Every variant is an expected operational condition and is returned to
//! the caller as a value. Store and generator failures are not represented
//! here: they are invariant violations, not outcomes.

use pl_shared::errors::error_codes;
use thiserror::Error;

/// Failure of an OTP request or verification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// Malformed or empty recipient address; nothing was stored
    #[error("Invalid recipient email address")]
    InvalidRecipient,

    /// Every configured transport rejected the message; the issued code
    /// stays valid
    #[error("Email delivery failed via {provider}: {detail}")]
    ProviderFailure { provider: String, detail: String },

    /// Never requested, already used, or expired
    #[error("No active verification code")]
    NoActiveOtp,

    /// Wrong code; retryable until the attempt budget is spent
    #[error("Invalid verification code ({remaining_attempts} attempts remaining)")]
    CodeMismatch { remaining_attempts: u32 },

    /// Attempt budget spent; a new code must be requested
    #[error("Too many verification attempts")]
    TooManyAttempts,
}

impl OtpError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            OtpError::InvalidRecipient => error_codes::INVALID_RECIPIENT,
            OtpError::ProviderFailure { .. } => error_codes::EMAIL_DELIVERY_FAILED,
            OtpError::NoActiveOtp => error_codes::NO_ACTIVE_OTP,
            OtpError::CodeMismatch { .. } => error_codes::CODE_MISMATCH,
            OtpError::TooManyAttempts => error_codes::TOO_MANY_ATTEMPTS,
        }
    }

    /// Whether retrying the same operation can succeed without a new code
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            OtpError::ProviderFailure { .. } | OtpError::CodeMismatch { .. }
        )
    }
}

pub type OtpResult<T> = Result<T, OtpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            OtpError::InvalidRecipient,
            OtpError::ProviderFailure {
                provider: "smtp".to_string(),
                detail: "timeout".to_string(),
            },
            OtpError::NoActiveOtp,
            OtpError::CodeMismatch { remaining_attempts: 2 },
            OtpError::TooManyAttempts,
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_retryable() {
        assert!(OtpError::CodeMismatch { remaining_attempts: 1 }.is_retryable());
        assert!(!OtpError::TooManyAttempts.is_retryable());
        assert!(!OtpError::NoActiveOtp.is_retryable());
    }

    #[test]
    fn test_display() {
        let err = OtpError::CodeMismatch { remaining_attempts: 4 };
        assert_eq!(err.to_string(), "Invalid verification code (4 attempts remaining)");
    }
}
