//! Main OTP service implementation

use std::sync::Arc;

use chrono::Utc;
use pl_shared::utils::validation::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::OtpEntry;
use crate::domain::value_objects::{DeliveryResult, Verified, VerificationOutcome};
use crate::errors::{OtpError, OtpResult};

use super::config::OtpServiceConfig;
use super::generator::{CodeGenerator, SecureCodeGenerator};
use super::identity_lock::IdentityLocks;
use super::traits::{EmailGateway, OtpStore};

/// Email verification service gating authentication on possession of a
/// short-lived code
pub struct OtpService<S: OtpStore, G: EmailGateway> {
    /// Pending codes keyed by normalized email
    store: Arc<S>,
    /// Email delivery
    gateway: Arc<G>,
    /// Code source
    generator: Arc<dyn CodeGenerator>,
    /// Service configuration
    config: OtpServiceConfig,
    /// Serializes store mutations per identity
    locks: IdentityLocks,
}

impl<S: OtpStore, G: EmailGateway> OtpService<S, G> {
    /// Create a new OTP service using the OS random source for codes
    ///
    /// # Arguments
    ///
    /// * `store` - OTP store implementation
    /// * `gateway` - Email delivery implementation
    /// * `config` - Service configuration
    pub fn new(store: Arc<S>, gateway: Arc<G>, config: OtpServiceConfig) -> Self {
        Self {
            store,
            gateway,
            generator: Arc::new(SecureCodeGenerator),
            config,
            locks: IdentityLocks::new(),
        }
    }

    /// Replace the code generator
    pub fn with_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a new code for `email` and deliver it
    ///
    /// This method:
    /// 1. Validates the address (nothing is stored if it is malformed)
    /// 2. Generates a new code
    /// 3. Replaces any pending entry for the address
    /// 4. Hands the code to the email gateway
    ///
    /// The entry stays valid whatever the delivery outcome.
    ///
    /// # Returns
    ///
    /// * `Ok(DeliveryResult::Delivered)` - A provider accepted the message
    /// * `Err(OtpError::InvalidRecipient)` - The address is not plausible
    /// * `Err(OtpError::ProviderFailure)` - Every provider rejected the message
    pub async fn request_otp(&self, name: &str, email: &str) -> OtpResult<DeliveryResult> {
        if !is_valid_email(email) {
            tracing::warn!(
                email = %mask_email(email),
                event = "otp_invalid_recipient",
                "Rejected OTP request for malformed email address"
            );
            return Err(OtpError::InvalidRecipient);
        }

        let identity = normalize_email(email);
        let code = self.generator.generate();
        let entry = OtpEntry::new(identity.as_str(), code.as_str(), self.config.ttl());
        let expires_at = entry.expires_at;

        {
            let _guard = self.locks.lock(&identity).await;
            self.store.put(&identity, entry).await;
        }

        tracing::info!(
            email = %mask_email(&identity),
            expires_at = %expires_at,
            event = "otp_issued",
            "Issued new verification code"
        );

        // No identity lock is held while the provider call is in flight
        let result = self.gateway.send(name, email.trim(), &code).await;

        match result {
            DeliveryResult::Failed { provider, error } => {
                tracing::error!(
                    email = %mask_email(&identity),
                    provider = %provider,
                    error = %error,
                    event = "otp_delivery_failed",
                    "Verification code could not be delivered"
                );
                Err(OtpError::ProviderFailure {
                    provider,
                    detail: error,
                })
            }
            delivered => {
                tracing::info!(
                    email = %mask_email(&identity),
                    provider = %delivered.provider(),
                    event = "otp_delivered",
                    "Verification code accepted for delivery"
                );
                Ok(delivered)
            }
        }
    }

    /// Verify a submitted code for `email`
    ///
    /// The lookup, attempt accounting and consumption happen under the
    /// identity's lock. A matching code is consumed; a wrong code uses one
    /// attempt; once the budget is spent the next call removes the entry
    /// and reports [`OtpError::TooManyAttempts`].
    pub async fn verify_otp(&self, email: &str, submitted_code: &str) -> VerificationOutcome {
        let identity = normalize_email(email);
        let _guard = self.locks.lock(&identity).await;

        let mut entry = match self.store.get(&identity).await {
            Some(entry) => entry,
            None => {
                tracing::warn!(
                    email = %mask_email(&identity),
                    event = "otp_not_found",
                    "Verification attempted without an active code"
                );
                return Err(OtpError::NoActiveOtp);
            }
        };

        if entry.is_exhausted(self.config.max_attempts) {
            self.store.remove(&identity).await;
            tracing::warn!(
                email = %mask_email(&identity),
                attempts = entry.attempts,
                event = "otp_locked_out",
                "Maximum verification attempts exceeded"
            );
            return Err(OtpError::TooManyAttempts);
        }

        entry.attempts = self
            .store
            .increment_attempts(&identity)
            .await
            .ok_or(OtpError::NoActiveOtp)?;

        if !entry.matches(submitted_code.trim()) {
            let remaining_attempts = entry.remaining_attempts(self.config.max_attempts);
            tracing::warn!(
                email = %mask_email(&identity),
                attempts = entry.attempts,
                remaining_attempts = remaining_attempts,
                event = "otp_mismatch",
                "Verification code did not match"
            );
            return Err(OtpError::CodeMismatch { remaining_attempts });
        }

        self.store.remove(&identity).await;
        tracing::info!(
            email = %mask_email(&identity),
            event = "otp_verified",
            "Verification code accepted"
        );

        Ok(Verified {
            identity,
            verified_at: Utc::now(),
        })
    }

    /// Send a throwaway code straight through the gateway
    ///
    /// Used to check provider configuration; no entry is stored, so the
    /// code cannot be verified.
    pub async fn send_test_code(&self, name: &str, email: &str) -> DeliveryResult {
        let code = self.generator.generate();
        tracing::info!(
            email = %mask_email(email),
            event = "otp_test_send",
            "Sending diagnostic email"
        );
        self.gateway.send(name, email.trim(), &code).await
    }
}
