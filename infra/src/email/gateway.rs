//! Ordered-fallback email gateway
//!
//! Tries each configured provider once, in order, and stops at the first
//! one that accepts the message. Every provider call is bounded by a
//! timeout so a hung transport cannot stall a request. Failures never
//! escape as errors: they are folded into a [`DeliveryResult::Failed`]
//! naming the last provider tried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, warn};

use pl_core::domain::value_objects::DeliveryResult;
use pl_core::services::otp::EmailGateway;
use pl_shared::utils::validation::mask_email;

use super::email_provider::EmailProvider;
use super::message::EmailMessage;

/// Minutes announced in the email when none are configured
const DEFAULT_EXPIRY_MINUTES: u64 = 10;

/// Email gateway over an ordered list of providers
pub struct EmailDeliveryGateway {
    /// Providers in the order they are tried
    providers: Vec<Arc<dyn EmailProvider>>,
    /// Upper bound for a single provider call
    timeout: Duration,
    /// Lifetime announced in the message body
    expiry_minutes: u64,
}

impl EmailDeliveryGateway {
    /// Create a new gateway
    ///
    /// # Arguments
    ///
    /// * `providers` - Providers in fallback order (may be empty)
    /// * `timeout` - How long a single provider may take before it counts
    ///   as failed
    pub fn new(providers: Vec<Arc<dyn EmailProvider>>, timeout: Duration) -> Self {
        if !providers.is_empty() {
            info!(
                "Initializing email gateway with providers [{}]",
                providers
                    .iter()
                    .map(|p| p.provider_name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Self {
            providers,
            timeout,
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
        }
    }

    /// Set the code lifetime announced in the email
    pub fn with_expiry_minutes(mut self, minutes: u64) -> Self {
        self.expiry_minutes = minutes;
        self
    }

    pub fn has_providers(&self) -> bool {
        !self.providers.is_empty()
    }

    /// Deliver a pre-rendered message
    pub async fn deliver(&self, message: &EmailMessage) -> DeliveryResult {
        let masked = mask_email(&message.to_email);
        let mut last_failure = None;

        for provider in &self.providers {
            let name = provider.provider_name();

            let outcome = tokio::time::timeout(self.timeout, provider.send_email(message)).await;
            let failure = match outcome {
                Ok(Ok(message_id)) => {
                    info!(
                        provider = name,
                        email = %masked,
                        event = "email_accepted",
                        "Email accepted for delivery"
                    );
                    return DeliveryResult::delivered(name, message_id);
                }
                Ok(Err(e)) => e.to_string(),
                Err(_) => format!("timed out after {:?}", self.timeout),
            };

            warn!(
                provider = name,
                email = %masked,
                error = %failure,
                event = "email_provider_failed",
                "Email provider failed, trying next"
            );
            last_failure = Some(DeliveryResult::failed(name, failure));
        }

        match last_failure {
            Some(failed) => {
                error!(
                    email = %masked,
                    event = "email_delivery_failed",
                    "All email providers failed"
                );
                failed
            }
            None => {
                error!(
                    email = %masked,
                    event = "email_no_provider",
                    "No email provider is configured"
                );
                DeliveryResult::no_provider()
            }
        }
    }
}

#[async_trait]
impl EmailGateway for EmailDeliveryGateway {
    async fn send(&self, recipient_name: &str, recipient_email: &str, code: &str) -> DeliveryResult {
        let message = EmailMessage::verification_code(
            recipient_name,
            recipient_email,
            code,
            self.expiry_minutes,
        );
        self.deliver(&message).await
    }

    fn provider_names(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|p| p.provider_name().to_string())
            .collect()
    }
}
