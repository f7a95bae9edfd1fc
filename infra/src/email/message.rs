//! Verification email content

/// A rendered email ready for any provider
#[derive(Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient display name (may be empty)
    pub to_name: String,
    /// Recipient address
    pub to_email: String,
    pub subject: String,
    pub body_text: String,
    pub body_html: String,
}

impl EmailMessage {
    /// Build the verification email carrying `code`
    ///
    /// The body states how long the code stays valid.
    pub fn verification_code(name: &str, email: &str, code: &str, expires_in_minutes: u64) -> Self {
        let name = name.trim();
        let greeting = if name.is_empty() {
            String::from("Hi,")
        } else {
            format!("Hi {},", name)
        };
        let expiry = expiry_notice(expires_in_minutes);

        let body_text = format!(
            "{}\n\nYour Platter verification code is: {}\n\n{}\n\nIf you did not request this code, you can safely ignore this email.\n",
            greeting, code, expiry
        );

        let body_html = format!(
            "<p>{}</p>\
             <p>Your Platter verification code is:</p>\
             <p style=\"font-size:24px;font-weight:bold;letter-spacing:4px\">{}</p>\
             <p>{}</p>\
             <p style=\"color:#888\">If you did not request this code, you can safely ignore this email.</p>",
            escape_html(&greeting),
            code,
            expiry
        );

        Self {
            to_name: name.to_string(),
            to_email: email.trim().to_string(),
            subject: String::from("Your Platter verification code"),
            body_text,
            body_html,
        }
    }
}

// Debug omits both bodies: they carry the code
impl std::fmt::Debug for EmailMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailMessage")
            .field("to_name", &self.to_name)
            .field("to_email", &self.to_email)
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

fn expiry_notice(minutes: u64) -> String {
    match minutes {
        1 => String::from("This code expires in 1 minute."),
        n => format!("This code expires in {} minutes.", n),
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
