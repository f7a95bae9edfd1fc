use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestOtpRequest {
    /// Display name used to greet the recipient
    #[serde(default)]
    #[validate(length(max = 100))]
    pub name: String,

    /// Address the code is sent to; syntax is checked by the OTP service
    #[validate(length(max = 254))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestOtpResponse {
    pub message: String,
    pub provider: String,
    pub expires_in: i64, // seconds until the code expires
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,

    /// 6-digit verification code
    #[validate(length(min = 1, max = 16))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub verified: bool,
    pub email: String,
    pub verified_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_otp_validation() {
        let valid = RequestOtpRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        // Empty addresses are left to the OTP service's recipient check
        let missing_email = RequestOtpRequest {
            name: "Jane".to_string(),
            email: String::new(),
        };
        assert!(missing_email.validate().is_ok());

        let long_email = RequestOtpRequest {
            name: "Jane".to_string(),
            email: format!("{}@example.com", "a".repeat(250)),
        };
        assert!(long_email.validate().is_err());

        let long_name = RequestOtpRequest {
            name: "x".repeat(101),
            email: "jane@example.com".to_string(),
        };
        assert!(long_name.validate().is_err());
    }

    #[test]
    fn test_name_defaults_to_empty() {
        let request: RequestOtpRequest =
            serde_json::from_str(r#"{"email":"jane@example.com"}"#).unwrap();
        assert_eq!(request.name, "");
    }

    #[test]
    fn test_verify_otp_validation() {
        let empty_code = VerifyOtpRequest {
            email: "jane@example.com".to_string(),
            code: String::new(),
        };
        assert!(empty_code.validate().is_err());
    }
}
