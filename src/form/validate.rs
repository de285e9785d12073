#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

pub const PHONE_FIELD_ID: &str = "phone";
pub const MESSAGE_FIELD_ID: &str = "message";
pub const MESSAGE_MIN_CHARS: usize = 10;

// Moroccan mobile numbers: 06 or 07 followed by eight digits.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(06|07)[0-9]{8}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// What a control declares about itself in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub id: String,
    /// The `type` attribute of an `<input>`, or `"textarea"`.
    pub input_type: String,
    pub required: bool,
}

/// Check `raw` against the rules of its field. The first failing rule wins,
/// in this order: required, phone format, email format, message length.
pub fn validate_value(rules: &FieldRules, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();

    if rules.required && value.is_empty() {
        return Err(ValidationError::Required);
    }

    if rules.id == PHONE_FIELD_ID && !PHONE_RE.is_match(value) {
        return Err(ValidationError::Phone);
    }

    if rules.input_type == "email" && !value.is_empty() && !EMAIL_RE.is_match(value) {
        return Err(ValidationError::Email);
    }

    if rules.id == MESSAGE_FIELD_ID && value.chars().count() < MESSAGE_MIN_CHARS {
        return Err(ValidationError::MessageTooShort);
    }

    Ok(())
}
