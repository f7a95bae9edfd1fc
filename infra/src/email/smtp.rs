//! SMTP Email Provider
//!
//! Sends mail through an authenticated STARTTLS relay using `lettre`.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    address::AddressError,
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use secrecy::ExposeSecret;
use tracing::{error, info};

use pl_shared::config::email::{EmailConfig, SmtpConfig, PROVIDER_SMTP};
use pl_shared::utils::validation::mask_email;

use super::email_provider::EmailProvider;
use super::message::EmailMessage;
use crate::InfrastructureError;

/// SMTP relay provider
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpProvider {
    /// Create a new SMTP provider
    ///
    /// Building the transport does not open a connection; an unreachable
    /// relay is reported by the first send.
    pub fn new(
        smtp: &SmtpConfig,
        email: &EmailConfig,
        timeout: Duration,
    ) -> Result<Self, InfrastructureError> {
        let from = mailbox(&email.from_name, &email.from_email)
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;

        let credentials = Credentials::new(
            smtp.user.clone(),
            smtp.password.expose_secret().to_string(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
            .map_err(|e| InfrastructureError::Config(format!("Failed to create SMTP relay: {}", e)))?
            .port(smtp.port)
            .credentials(credentials)
            .timeout(Some(timeout))
            .build();

        info!("SMTP email provider initialized ({}:{})", smtp.host, smtp.port);

        Ok(Self { transport, from })
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message, InfrastructureError> {
        let to = mailbox(&message.to_name, &message.to_email)
            .map_err(|e| InfrastructureError::Email(format!("Invalid recipient: {}", e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.as_str())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(message.body_text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(message.body_html.clone()),
                    ),
            )
            .map_err(|e| InfrastructureError::Email(format!("Failed to build message: {}", e)))
    }
}

/// Builds a mailbox from its parts; lettre quotes the display name as needed
fn mailbox(name: &str, email: &str) -> Result<Mailbox, AddressError> {
    let address = email.parse::<Address>()?;
    let name = name.trim();
    Ok(Mailbox::new((!name.is_empty()).then(|| name.to_string()), address))
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send_email(&self, message: &EmailMessage) -> Result<Option<String>, InfrastructureError> {
        let email = self.build_message(message)?;

        match self.transport.send(email).await {
            Ok(response) => {
                let message_id = response.message().next().map(|s| s.to_string());
                info!(
                    provider = PROVIDER_SMTP,
                    email = %mask_email(&message.to_email),
                    "Email accepted by SMTP relay"
                );
                Ok(message_id)
            }
            Err(e) => {
                error!(
                    provider = PROVIDER_SMTP,
                    email = %mask_email(&message.to_email),
                    "SMTP relay rejected the message: {}",
                    e
                );
                Err(InfrastructureError::Email(format!("SMTP send failed: {}", e)))
            }
        }
    }

    fn provider_name(&self) -> &str {
        PROVIDER_SMTP
    }
}
