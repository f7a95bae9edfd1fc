//! End-to-end OTP flow over the in-memory store and the email gateway

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use pl_core::errors::OtpError;
use pl_core::services::otp::{OtpService, OtpServiceConfig};
use pl_infra::email::{EmailDeliveryGateway, EmailMessage, EmailProvider, MockEmailProvider};
use pl_infra::{InMemoryOtpStore, InfrastructureError};

// Provider that keeps every message so the test can read the code back
#[derive(Default)]
struct Mailbox {
    messages: std::sync::Mutex<Vec<EmailMessage>>,
}

impl Mailbox {
    fn last_code(&self) -> String {
        let messages = self.messages.lock().unwrap();
        let body = &messages.last().expect("a message was sent").body_text;
        body.split_whitespace()
            .find(|word| word.len() == 6 && word.chars().all(|c| c.is_ascii_digit()))
            .expect("body contains a 6-digit code")
            .to_string()
    }
}

#[async_trait]
impl EmailProvider for Mailbox {
    async fn send_email(&self, message: &EmailMessage) -> Result<Option<String>, InfrastructureError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(None)
    }

    fn provider_name(&self) -> &str {
        "mailbox"
    }
}

fn service_with(
    providers: Vec<Arc<dyn EmailProvider>>,
) -> (OtpService<InMemoryOtpStore, EmailDeliveryGateway>, Arc<InMemoryOtpStore>) {
    let store = Arc::new(InMemoryOtpStore::new());
    let gateway = Arc::new(EmailDeliveryGateway::new(providers, Duration::from_secs(1)));
    let service = OtpService::new(store.clone(), gateway, OtpServiceConfig::default());
    (service, store)
}

#[tokio::test]
async fn test_code_from_email_verifies() {
    let mailbox = Arc::new(Mailbox::default());
    let providers: Vec<Arc<dyn EmailProvider>> = vec![mailbox.clone()];
    let (service, store) = service_with(providers);

    let delivery = service.request_otp("Jane", "Jane@Example.com").await.unwrap();
    assert_eq!(delivery.provider(), "mailbox");
    assert_eq!(store.len().await, 1);

    let code = mailbox.last_code();
    let verified = service.verify_otp("jane@example.com", &code).await.unwrap();
    assert_eq!(verified.identity, "jane@example.com");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_failed_delivery_keeps_code_for_reissue() {
    let failing = Arc::new(MockEmailProvider::with_options(false, true));
    let providers: Vec<Arc<dyn EmailProvider>> = vec![failing.clone()];
    let (service, store) = service_with(providers);

    let err = service.request_otp("Jane", "jane@example.com").await.unwrap_err();
    assert!(matches!(err, OtpError::ProviderFailure { ref provider, .. } if provider == "mock"));
    assert_eq!(store.len().await, 1);

    failing.set_simulate_failure(false);
    assert!(service.request_otp("Jane", "jane@example.com").await.is_ok());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_no_provider_is_provider_failure() {
    let (service, _) = service_with(Vec::new());

    match service.request_otp("Jane", "jane@example.com").await {
        Err(OtpError::ProviderFailure { provider, .. }) => assert_eq!(provider, "none"),
        other => panic!("Expected provider failure, got {:?}", other),
    }
}
