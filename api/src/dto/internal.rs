//! Bodies of the diagnostic endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /internal/test-email`; the address may instead come from
/// the query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestEmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestEmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestEmailResponse {
    pub message: String,
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestEmailFailure {
    pub message: String,
    pub error: String,
}

/// Instance and configuration summary; never includes codes or credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub ok: bool,
    pub time: DateTime<Utc>,
    pub origin_received: Option<String>,
    pub allow_all: bool,
    pub allowed_origins: Vec<String>,
    pub environment: String,
    pub email_providers: Vec<String>,
    pub otp_ttl_seconds: i64,
    pub otp_max_attempts: u32,
}
