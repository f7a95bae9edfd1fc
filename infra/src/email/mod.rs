//! Email Service Module
//!
//! This module provides the email providers used to deliver one-time
//! passcodes and the gateway that drives them.
//!
//! ## Features
//!
//! - **Email Provider Trait**: Common interface for all transports
//! - **SendGrid Support**: HTTP v3 mail API via `reqwest`
//! - **SMTP Support**: STARTTLS relay via `lettre`
//! - **Mock Implementation**: Console output for development
//! - **Ordered Fallback**: Providers tried once each, in configured order
//! - **Security**: Recipient masking in logs, credentials never logged

use std::sync::Arc;
use std::time::Duration;

use pl_shared::config::email::{
    EmailConfig, PROVIDER_MOCK, PROVIDER_SENDGRID, PROVIDER_SMTP,
};

pub mod email_provider;
pub mod gateway;
pub mod message;
pub mod mock_email;
pub mod sendgrid;
pub mod smtp;

// Re-export commonly used types
pub use email_provider::EmailProvider;
pub use gateway::EmailDeliveryGateway;
pub use message::EmailMessage;
pub use mock_email::MockEmailProvider;
pub use sendgrid::SendGridProvider;
pub use smtp::SmtpProvider;

#[cfg(test)]
mod tests;

/// Create the email gateway described by the configuration
///
/// Providers are instantiated in `provider_order`. A provider whose
/// credentials are absent, whose name is unknown, or whose transport cannot
/// be built is skipped with a warning; the gateway then runs with whatever
/// remains (possibly nothing, in which case every send reports
/// [`pl_core::DeliveryResult::no_provider`]).
pub fn create_email_gateway(config: &EmailConfig) -> EmailDeliveryGateway {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let mut providers: Vec<Arc<dyn EmailProvider>> = Vec::new();

    for name in &config.provider_order {
        match name.as_str() {
            PROVIDER_SENDGRID => match &config.sendgrid {
                Some(sendgrid) => match SendGridProvider::new(sendgrid, config, timeout) {
                    Ok(provider) => providers.push(Arc::new(provider)),
                    Err(e) => tracing::error!("Failed to initialize SendGrid provider: {}", e),
                },
                None => tracing::warn!("SendGrid listed in EMAIL_PROVIDERS but SENDGRID_API_KEY is not set, skipping"),
            },
            PROVIDER_SMTP => match &config.smtp {
                Some(smtp) => match SmtpProvider::new(smtp, config, timeout) {
                    Ok(provider) => providers.push(Arc::new(provider)),
                    Err(e) => tracing::error!("Failed to initialize SMTP provider: {}", e),
                },
                None => tracing::warn!("SMTP listed in EMAIL_PROVIDERS but SMTP_HOST/SMTP_USER/SMTP_PASS are not all set, skipping"),
            },
            PROVIDER_MOCK => providers.push(Arc::new(MockEmailProvider::new())),
            other => tracing::warn!("Unknown email provider '{}', skipping", other),
        }
    }

    if providers.is_empty() {
        tracing::error!("No email provider is configured; verification emails cannot be sent");
    }

    EmailDeliveryGateway::new(providers, timeout)
}
