// src/forms.rs
use std::collections::HashMap;

pub const CONTACT_REQUIRED: [&str; 4] = ["firstName", "email", "subject", "message"];

pub const MSG_CONTACT_OK: &str = "आपका संदेश सफलतापूर्वक भेज दिया गया है! हम जल्दी ही आपसे संपर्क करेंगे।";
pub const MSG_NEWSLETTER_OK: &str = "न्यूज़लेटर की सदस्यता सफल हो गई! धन्यवाद।";
pub const MSG_EMAIL_REQUIRED: &str = "ईमेल पता आवश्यक है।";
pub const MSG_EMAIL_INVALID: &str = "कृपया वैध ईमेल पता दर्ज करें।";
pub const MSG_SERVER_ERROR: &str = "सर्वर में कोई समस्या हुई है। कृपया बाद में पुनः प्रयास करें।";

pub fn missing_fields_message(missing: &[&str]) -> String {
    format!("आवश्यक फील्ड गुम हैं: {}", missing.join(", "))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub company: Option<String>,
    pub phone: Option<String>,
}

impl ContactForm {
    /// Validates required fields; on failure returns the missing field names.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, Vec<&'static str>> {
        let get = |k: &str| {
            fields
                .get(k)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let missing: Vec<&'static str> = CONTACT_REQUIRED
            .into_iter()
            .filter(|k| get(*k).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            first_name: get("firstName").unwrap_or_default(),
            last_name: get("lastName"),
            email: get("email").unwrap_or_default(),
            subject: get("subject").unwrap_or_default(),
            message: get("message").unwrap_or_default(),
            company: get("company"),
            phone: get("phone"),
        })
    }
}

/// Trimmed newsletter address, or the localized reason it was rejected.
pub fn newsletter_email(fields: &HashMap<String, String>) -> Result<String, &'static str> {
    let email = fields.get("email").map(|v| v.trim()).unwrap_or_default();
    if email.is_empty() {
        return Err(MSG_EMAIL_REQUIRED);
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(MSG_EMAIL_INVALID);
    }
    Ok(email.to_lowercase())
}
