//! Mock implementations for testing the OTP service

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::OtpEntry;
use crate::domain::value_objects::DeliveryResult;
use crate::services::otp::generator::{generate_code, CodeGenerator};
use crate::services::otp::traits::{EmailGateway, OtpStore};

// Mock store with the same lazy-expiry contract as the real one
#[derive(Default)]
pub struct MockOtpStore {
    pub entries: Mutex<HashMap<String, OtpEntry>>,
}

impl MockOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek(&self, identity: &str) -> Option<OtpEntry> {
        self.entries.lock().unwrap().get(identity).cloned()
    }
}

#[async_trait]
impl OtpStore for MockOtpStore {
    async fn put(&self, identity: &str, entry: OtpEntry) {
        self.entries.lock().unwrap().insert(identity.to_string(), entry);
    }

    async fn get(&self, identity: &str) -> Option<OtpEntry> {
        let mut entries = self.entries.lock().unwrap();
        let expired = entries.get(identity)?.is_expired_at(Utc::now());
        if expired {
            entries.remove(identity);
            return None;
        }
        entries.get(identity).cloned()
    }

    async fn remove(&self, identity: &str) {
        self.entries.lock().unwrap().remove(identity);
    }

    async fn increment_attempts(&self, identity: &str) -> Option<u32> {
        let mut entries = self.entries.lock().unwrap();
        entries.get_mut(identity).map(|entry| {
            entry.attempts += 1;
            entry.attempts
        })
    }
}

// Mock gateway recording the last code sent per recipient
pub struct MockEmailGateway {
    pub sent_codes: Mutex<HashMap<String, String>>,
    pub send_count: AtomicU64,
    pub should_fail: bool,
}

impl MockEmailGateway {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_codes: Mutex::new(HashMap::new()),
            send_count: AtomicU64::new(0),
            should_fail,
        }
    }

    pub fn get_sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }

    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailGateway for MockEmailGateway {
    async fn send(&self, _recipient_name: &str, recipient_email: &str, code: &str) -> DeliveryResult {
        self.send_count.fetch_add(1, Ordering::SeqCst);
        // Record even on failure: the code was minted and stored
        self.sent_codes
            .lock()
            .unwrap()
            .insert(recipient_email.to_string(), code.to_string());
        if self.should_fail {
            return DeliveryResult::failed("mock", "simulated provider rejection");
        }
        DeliveryResult::delivered("mock", Some(format!("mock-{}", self.send_count())))
    }

    fn provider_names(&self) -> Vec<String> {
        vec!["mock".to_string()]
    }
}

// Generator handing out predetermined codes, then random ones
#[derive(Default)]
pub struct FixedCodeGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl FixedCodeGenerator {
    pub fn new(codes: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        })
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(generate_code)
    }
}
