//! Email delivery configuration
//!
//! Provider credentials are held as [`SecretString`] so that `Debug`
//! output of the configuration (and of anything embedding it) never
//! reveals them.

use secrecy::SecretString;

use super::{env_non_empty, env_parse};

/// SendGrid v3 API endpoint
pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";

/// Known provider identifiers, in the order they are tried by default
pub const PROVIDER_SENDGRID: &str = "sendgrid";
pub const PROVIDER_SMTP: &str = "smtp";
pub const PROVIDER_MOCK: &str = "mock";

/// SendGrid HTTP API configuration
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    /// API key sent as a bearer token
    pub api_key: SecretString,
    /// Base URL of the API (overridable for testing)
    pub api_url: String,
}

/// SMTP relay configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay host name
    pub host: String,
    /// Relay port (STARTTLS)
    pub port: u16,
    /// Login user name
    pub user: String,
    /// Login password
    pub password: SecretString,
}

/// Email delivery configuration
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Sender address
    pub from_email: String,
    /// Sender display name
    pub from_name: String,
    /// Upper bound for a single provider call, in seconds
    pub timeout_seconds: u64,
    /// Provider identifiers in the order they should be tried
    pub provider_order: Vec<String>,
    /// SendGrid credentials, if configured
    pub sendgrid: Option<SendGridConfig>,
    /// SMTP credentials, if configured
    pub smtp: Option<SmtpConfig>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from_email: String::from("no-reply@platter.app"),
            from_name: String::from("Platter"),
            timeout_seconds: 8,
            provider_order: vec![PROVIDER_SENDGRID.to_string(), PROVIDER_SMTP.to_string()],
            sendgrid: None,
            smtp: None,
        }
    }
}

impl EmailConfig {
    /// Load email settings from the environment
    ///
    /// SendGrid is enabled when `SENDGRID_API_KEY` is set; SMTP when
    /// `SMTP_HOST`, `SMTP_USER` and `SMTP_PASS` are all set.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let sendgrid = env_non_empty("SENDGRID_API_KEY").map(|key| SendGridConfig {
            api_key: SecretString::new(key),
            api_url: env_non_empty("SENDGRID_API_URL")
                .unwrap_or_else(|| DEFAULT_SENDGRID_API_URL.to_string()),
        });

        let smtp = match (
            env_non_empty("SMTP_HOST"),
            env_non_empty("SMTP_USER"),
            env_non_empty("SMTP_PASS"),
        ) {
            (Some(host), Some(user), Some(password)) => Some(SmtpConfig {
                host,
                port: env_parse("SMTP_PORT", 587),
                user,
                password: SecretString::new(password),
            }),
            _ => None,
        };

        let provider_order = env_non_empty("EMAIL_PROVIDERS")
            .map(|raw| parse_provider_order(&raw))
            .unwrap_or(defaults.provider_order);

        Self {
            from_email: env_non_empty("EMAIL_FROM")
                .or_else(|| smtp.as_ref().map(|s| s.user.clone()))
                .unwrap_or(defaults.from_email),
            from_name: env_non_empty("EMAIL_FROM_NAME").unwrap_or(defaults.from_name),
            timeout_seconds: env_parse("EMAIL_TIMEOUT_SECONDS", defaults.timeout_seconds).max(1),
            provider_order,
            sendgrid,
            smtp,
        }
    }
}

fn parse_provider_order(raw: &str) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    for name in raw.split(',').map(|s| s.trim().to_lowercase()) {
        if !name.is_empty() && !order.contains(&name) {
            order.push(name);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_order_dedups_and_normalizes() {
        assert_eq!(
            parse_provider_order(" SMTP, sendgrid ,smtp,,mock"),
            vec!["smtp", "sendgrid", "mock"]
        );
    }

    #[test]
    fn test_debug_output_redacts_credentials() {
        let config = EmailConfig {
            sendgrid: Some(SendGridConfig {
                api_key: SecretString::new("SG.super-secret".to_string()),
                api_url: DEFAULT_SENDGRID_API_URL.to_string(),
            }),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("SG.super-secret"));
    }
}
