// src/modules/inquiry/application/domain/contact_inquiry.rs

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{8,15}$").unwrap());

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const MESSAGE_MAX_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InquiryValidationError {
    #[error("Name must be between 2 and 100 characters")]
    InvalidName,

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Message is {0} characters, limit is 2000")]
    MessageTooLong(usize),
}

impl InquiryValidationError {
    /// Catalog key of the message shown for the offending field.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidName => "ContactSection.errors.name",
            Self::InvalidPhone(_) => "ContactSection.errors.phone",
            Self::UnknownService(_) => "ContactSection.errors.service",
            Self::MessageTooLong(_) => "ContactSection.errors.message",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// PhoneNumber
// ──────────────────────────────────────────────────────────
//

/// 8 to 15 digits, optional leading `+`. Spaces and dashes are dropped on parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, InquiryValidationError> {
        let compact: String = raw
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        if !PHONE_REGEX.is_match(&compact) {
            return Err(InquiryValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(compact))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// ContactInquiry
// ──────────────────────────────────────────────────────────
//

/// A quote request from the contact form, trimmed and checked.
///
/// `service` is only checked for shape here. Whether it names an offered service
/// needs the content store and is decided by the submitting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub phone: PhoneNumber,
    pub service: Option<String>,
    pub message: Option<String>,
}

impl ContactInquiry {
    pub fn parse(
        name: &str,
        phone: &str,
        service: Option<&str>,
        message: Option<&str>,
    ) -> Result<Self, InquiryValidationError> {
        let name = name.trim();
        let name_len = name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len)
            || name.chars().any(char::is_control)
        {
            return Err(InquiryValidationError::InvalidName);
        }

        let phone = PhoneNumber::parse(phone)?;

        let message = non_blank(message);
        if let Some(m) = &message {
            let len = m.chars().count();
            if len > MESSAGE_MAX_CHARS {
                return Err(InquiryValidationError::MessageTooLong(len));
            }
        }

        Ok(Self {
            name: name.to_string(),
            phone,
            service: non_blank(service),
            message,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str, phone: &str) -> Result<ContactInquiry, InquiryValidationError> {
        ContactInquiry::parse(name, phone, None, None)
    }

    #[test]
    fn accepts_local_and_international_numbers() {
        assert_eq!(PhoneNumber::parse("0501234567").unwrap().as_str(), "0501234567");
        assert_eq!(
            PhoneNumber::parse(" +966 50-123-4567 ").unwrap().as_str(),
            "+966501234567"
        );
    }

    #[test]
    fn rejects_short_long_and_malformed_numbers() {
        for raw in ["1234567", "1234567890123456", "05x1234567", "++966501234567", "", "+"] {
            assert!(
                matches!(PhoneNumber::parse(raw), Err(InquiryValidationError::InvalidPhone(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(parse("أب", "0501234567").is_ok());
        assert_eq!(parse("أ", "0501234567"), Err(InquiryValidationError::InvalidName));
        assert!(parse(&"ن".repeat(100), "0501234567").is_ok());
        assert_eq!(
            parse(&"ن".repeat(101), "0501234567"),
            Err(InquiryValidationError::InvalidName)
        );
    }

    #[test]
    fn name_is_trimmed_and_rejects_control_characters() {
        assert_eq!(parse("  Sara  ", "0501234567").unwrap().name, "Sara");
        assert_eq!(parse("   ", "0501234567"), Err(InquiryValidationError::InvalidName));
        assert_eq!(
            parse("Sara\r\nBcc: x@example.com", "0501234567"),
            Err(InquiryValidationError::InvalidName)
        );
    }

    #[test]
    fn message_limit_is_two_thousand_characters() {
        let ok = "م".repeat(2000);
        assert!(ContactInquiry::parse("Sara", "0501234567", None, Some(&ok)).is_ok());

        let long = "م".repeat(2001);
        assert_eq!(
            ContactInquiry::parse("Sara", "0501234567", None, Some(&long)),
            Err(InquiryValidationError::MessageTooLong(2001))
        );
    }

    #[test]
    fn blank_service_and_message_are_absent() {
        let inquiry = ContactInquiry::parse("Sara", "0501234567", Some("  "), Some("")).unwrap();
        assert_eq!(inquiry.service, None);
        assert_eq!(inquiry.message, None);

        let inquiry =
            ContactInquiry::parse("Sara", "0501234567", Some(" pergolas "), None).unwrap();
        assert_eq!(inquiry.service.as_deref(), Some("pergolas"));
    }

    #[test]
    fn every_error_points_at_a_contact_form_message() {
        assert_eq!(
            InquiryValidationError::InvalidPhone("x".into()).message_key(),
            "ContactSection.errors.phone"
        );
        assert_eq!(
            InquiryValidationError::UnknownService("x".into()).message_key(),
            "ContactSection.errors.service"
        );
    }
}
