//! Field validation rules for the contact form

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

use crate::lead::{Field, Lead};

/// local@domain.tld shape: no whitespace or extra `@` in any segment.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Optional leading `+`, then at least ten digits, spaces, hyphens or
/// parentheses. The `+` itself does not count toward the ten.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s()-]{10,}$").unwrap());

/// Why a field failed validation.
///
/// The display string is exactly the message shown inline next to the
/// offending field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    MissingRequiredField,

    #[error("Email or mobile number is required")]
    MissingContactMethod,

    #[error("Please enter a valid email address")]
    InvalidEmailFormat,

    #[error("Please enter a valid phone number")]
    InvalidPhoneFormat,
}

/// Per-field validation state. A field absent from the map is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: HashMap<Field, FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Forget the error for one field, leaving the others untouched.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }
}

pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn phone_is_valid(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Recompute the full error map for a lead.
///
/// Rules run in a fixed order and later rules overwrite earlier entries
/// for the same field, so a whitespace-only email reports the format error
/// rather than the missing-contact error. The contact-method rule checks
/// trimmed values while the format rules check the raw text.
pub fn validate(lead: &Lead) -> FormErrors {
    let mut errors = FormErrors::default();

    if lead.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::MissingRequiredField);
    }

    if lead.email.trim().is_empty() && lead.mobile.trim().is_empty() {
        errors.insert(Field::Email, FieldError::MissingContactMethod);
        errors.insert(Field::Mobile, FieldError::MissingContactMethod);
    }

    if !lead.email.is_empty() && !email_is_valid(&lead.email) {
        errors.insert(Field::Email, FieldError::InvalidEmailFormat);
    }

    if !lead.mobile.is_empty() && !phone_is_valid(&lead.mobile) {
        errors.insert(Field::Mobile, FieldError::InvalidPhoneFormat);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, email: &str, mobile: &str) -> Lead {
        Lead {
            name: name.to_string(),
            email: email.to_string(),
            mobile: mobile.to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(email_is_valid("jane@x.com"));
        assert!(email_is_valid("first.last+tag@sub.domain.co"));
        assert!(!email_is_valid("janex.com"));
        assert!(!email_is_valid("jane@xcom"));
        assert!(!email_is_valid("jane doe@x.com"));
        assert!(!email_is_valid("jane@@x.com"));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(phone_is_valid("0123456789"));
        assert!(phone_is_valid("+1 (555) 123-4567"));
        assert!(!phone_is_valid("123456789"));
        assert!(!phone_is_valid("555-CALL-NOW"));
        // The plus sign does not count toward the minimum length.
        assert!(!phone_is_valid("+123456789"));
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let errors = validate(&lead("   ", "jane@x.com", ""));
        assert_eq!(errors.get(Field::Name), Some(FieldError::MissingRequiredField));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_both_contacts_empty_errors_both_fields() {
        let errors = validate(&lead("Jane Doe", "", ""));
        assert_eq!(errors.get(Field::Email), Some(FieldError::MissingContactMethod));
        assert_eq!(errors.get(Field::Mobile), Some(FieldError::MissingContactMethod));
    }

    #[test]
    fn test_whitespace_email_reports_format_error() {
        // Trimmed it counts as absent, untrimmed it fails the pattern; the
        // format rule runs later and wins.
        let errors = validate(&lead("Jane Doe", " ", ""));
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmailFormat));
        assert_eq!(errors.get(Field::Mobile), Some(FieldError::MissingContactMethod));
    }

    #[test]
    fn test_one_contact_method_is_enough() {
        assert!(validate(&lead("Jane Doe", "jane@x.com", "")).is_empty());
        assert!(validate(&lead("Jane Doe", "", "+1 (555) 123-4567")).is_empty());
    }

    #[test]
    fn test_message_is_never_validated() {
        let mut sample = lead("Jane Doe", "jane@x.com", "");
        sample.message = "@@@ not an email, not a phone @@@".to_string();
        assert!(validate(&sample).is_empty());
    }

    #[test]
    fn test_error_messages_match_form_copy() {
        assert_eq!(FieldError::MissingRequiredField.to_string(), "Name is required");
        assert_eq!(
            FieldError::MissingContactMethod.to_string(),
            "Email or mobile number is required"
        );
        assert_eq!(
            FieldError::InvalidEmailFormat.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::InvalidPhoneFormat.to_string(),
            "Please enter a valid phone number"
        );
    }
}
