// src/domain/contact.rs

use url::form_urlencoded::byte_serialize;

/// National number length; longer inputs are assumed to carry the country code.
const NATIONAL_DIGITS: usize = 10;

fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// `country_code` + national number, or `None` if the input has no digits.
fn international(raw: &str, country_code: &str) -> Option<String> {
    let d = digits(raw);
    let d = d.trim_start_matches('0');
    if d.is_empty() {
        return None;
    }
    if d.len() > NATIONAL_DIGITS && d.starts_with(country_code) {
        return Some(d.to_string());
    }
    Some(format!("{country_code}{d}"))
}

pub fn tel_link(phone: &str, country_code: &str) -> Option<String> {
    international(phone, country_code).map(|n| format!("tel:+{n}"))
}

pub fn whatsapp_link(number: &str, country_code: &str) -> Option<String> {
    international(number, country_code).map(|n| format!("https://wa.me/{n}"))
}

pub fn mailto_link(email: &str) -> Option<String> {
    let e = email.trim();
    if e.is_empty() || !e.contains('@') {
        return None;
    }
    Some(format!("mailto:{e}"))
}

/// Only http(s) targets are linked; a bare host gets `https://`.
pub fn website_link(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    let parsed = url::Url::parse(&candidate).ok()?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Some(parsed.into()),
        _ => None,
    }
}

/// WhatsApp share intent carrying `message`.
pub fn share_link(message: &str) -> String {
    let encoded: String = byte_serialize(message.as_bytes()).collect();
    format!("https://wa.me/?text={encoded}")
}

/// Links shown on a card or profile, computed from one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactLinks {
    pub tel: Option<String>,
    pub whatsapp: Option<String>,
    pub mailto: Option<String>,
    pub website: Option<String>,
}

impl ContactLinks {
    pub fn for_business(b: &crate::domain::business::Business, country_code: &str) -> Self {
        // Sheet rows only carry one number; it doubles as the WhatsApp contact.
        let whatsapp_src = b.whatsapp.as_deref().or(b.phone.as_deref());
        Self {
            tel: b.phone.as_deref().and_then(|p| tel_link(p, country_code)),
            whatsapp: whatsapp_src.and_then(|w| whatsapp_link(w, country_code)),
            mailto: b.email.as_deref().and_then(mailto_link),
            website: b.website.as_deref().and_then(website_link),
        }
    }
}
