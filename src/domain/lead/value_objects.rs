// src/domain/lead/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use validator::ValidateEmail;

const MAX_TEXT_LEN: usize = 255;
const MAX_PHONE_LEN: usize = 20;

static WHATSAPP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+62|62|0)[0-9]{9,12}$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeadId(pub i64);

impl LeadId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("lead id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<LeadId> for i64 {
    fn from(value: LeadId) -> Self {
        value.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn required_text(value: String, label: &str) -> DomainResult<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{label} is required")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::Validation(format!(
            "{label} may not be longer than {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadName(String);

impl LeadName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text(value.into(), "name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<LeadName> for String {
    fn from(value: LeadName) -> Self {
        value.0
    }
}

impl fmt::Display for LeadName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionName(String);

impl InstitutionName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text(value.into(), "institution name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<InstitutionName> for String {
    fn from(value: InstitutionName) -> Self {
        value.0
    }
}

impl fmt::Display for InstitutionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Indonesian WhatsApp number: `+62`, `62` or `0` followed by 9 to 12 digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsappNumber(String);

impl WhatsappNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("whatsapp number is required".into()));
        }
        if value.len() > MAX_PHONE_LEN {
            return Err(DomainError::Validation(format!(
                "whatsapp number may not be longer than {MAX_PHONE_LEN} characters"
            )));
        }
        if !WHATSAPP_PATTERN.is_match(&value) {
            return Err(DomainError::Validation(
                "whatsapp number format is invalid (example: 081234567890)".into(),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<WhatsappNumber> for String {
    fn from(value: WhatsappNumber) -> Self {
        value.0
    }
}

impl fmt::Display for WhatsappNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact email, stored lowercase so uniqueness is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeadEmail(String);

impl LeadEmail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation("email is required".into()));
        }
        if value.chars().count() > MAX_TEXT_LEN {
            return Err(DomainError::Validation(format!(
                "email may not be longer than {MAX_TEXT_LEN} characters"
            )));
        }
        if !value.validate_email() {
            return Err(DomainError::Validation("email format is invalid".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<LeadEmail> for String {
    fn from(value: LeadEmail) -> Self {
        value.0
    }
}

impl fmt::Display for LeadEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
