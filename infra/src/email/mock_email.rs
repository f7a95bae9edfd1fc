//! Mock Email Provider Implementation
//!
//! A mock implementation of the email provider for development and testing.
//! Instead of sending mail it prints the message to the console, which lets a
//! developer complete the verification flow without provider credentials.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use pl_shared::config::email::PROVIDER_MOCK;
use pl_shared::utils::validation::mask_email;

use super::email_provider::EmailProvider;
use super::message::EmailMessage;
use crate::InfrastructureError;

/// Mock email provider for development and testing
///
/// This implementation:
/// - Prints messages to the console (not to the log)
/// - Generates mock message IDs
/// - Tracks message count for testing
/// - Can simulate rejections and slow transports
#[derive(Clone)]
pub struct MockEmailProvider {
    /// Counter for tracking number of messages accepted
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures
    simulate_failure: Arc<AtomicBool>,
    /// Whether to print messages to the console
    console_output: bool,
    /// Artificial latency before answering
    delay: Duration,
}

impl MockEmailProvider {
    /// Create a new mock provider printing to the console
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock provider with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
            delay: Duration::ZERO,
        }
    }

    /// Delay every send by `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Get the total number of messages accepted
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

impl Default for MockEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send_email(&self, message: &EmailMessage) -> Result<Option<String>, InfrastructureError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let masked = mask_email(&message.to_email);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!("Mock email provider simulating failure for {}", masked);
            return Err(InfrastructureError::Email(
                "Simulated email sending failure".to_string(),
            ));
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock-email-{}", count);

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL PROVIDER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} <{}>", message.to_name, message.to_email);
            println!("Subject: {}", message.subject);
            println!("Message ID: {}", message_id);
            println!("\n{}", message.body_text);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = PROVIDER_MOCK,
            email = %masked,
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        Ok(Some(message_id))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_MOCK
    }
}
