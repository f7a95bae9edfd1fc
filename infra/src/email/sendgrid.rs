//! SendGrid Email Provider
//!
//! Sends mail through the SendGrid v3 `mail/send` endpoint. The API key is
//! sent as a bearer token and never logged. SendGrid answers `202 Accepted`
//! with an `X-Message-Id` header when it queues a message.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, error, info};

use pl_shared::config::email::{EmailConfig, SendGridConfig, PROVIDER_SENDGRID};
use pl_shared::utils::validation::mask_email;

use super::email_provider::EmailProvider;
use super::message::EmailMessage;
use crate::InfrastructureError;

/// Longest slice of a SendGrid error body kept in the failure detail
const MAX_ERROR_BODY: usize = 300;

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

/// SendGrid HTTP API provider
pub struct SendGridProvider {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    from_email: String,
    from_name: String,
}

impl SendGridProvider {
    /// Create a new SendGrid provider
    ///
    /// `timeout` bounds each HTTP request.
    pub fn new(
        sendgrid: &SendGridConfig,
        email: &EmailConfig,
        timeout: Duration,
    ) -> Result<Self, InfrastructureError> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}/v3/mail/send", sendgrid.api_url.trim_end_matches('/'));

        info!("SendGrid email provider initialized (endpoint: {})", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_key: sendgrid.api_key.clone(),
            from_email: email.from_email.clone(),
            from_name: email.from_name.clone(),
        })
    }
}

#[async_trait]
impl EmailProvider for SendGridProvider {
    async fn send_email(&self, message: &EmailMessage) -> Result<Option<String>, InfrastructureError> {
        let request = MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![Address {
                    email: &message.to_email,
                    name: &message.to_name,
                }],
            }],
            from: Address {
                email: &self.from_email,
                name: &self.from_name,
            },
            subject: &message.subject,
            content: vec![
                Content {
                    content_type: "text/plain",
                    value: &message.body_text,
                },
                Content {
                    content_type: "text/html",
                    value: &message.body_html,
                },
            ],
        };

        debug!("Posting message for {} to SendGrid", mask_email(&message.to_email));

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let message_id = response
                .headers()
                .get("x-message-id")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            info!(
                provider = PROVIDER_SENDGRID,
                email = %mask_email(&message.to_email),
                status = status.as_u16(),
                "Email accepted by SendGrid"
            );
            return Ok(message_id);
        }

        let body = response.text().await.unwrap_or_default();
        let body: String = body.chars().take(MAX_ERROR_BODY).collect();
        error!(
            provider = PROVIDER_SENDGRID,
            email = %mask_email(&message.to_email),
            status = status.as_u16(),
            "SendGrid rejected the message"
        );
        Err(InfrastructureError::Email(format!(
            "SendGrid responded with {}: {}",
            status, body
        )))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_SENDGRID
    }
}
