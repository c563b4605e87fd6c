//! The lead record collected by the contact form

use serde::{Deserialize, Serialize};

/// A prospective customer's contact details.
///
/// This is also the wire format: the form relay receives this struct
/// serialized to JSON with exactly these keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
}

impl Lead {
    /// True when no field holds any text, i.e. a freshly reset form.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.mobile.is_empty()
            && self.message.is_empty()
    }
}

/// The fields subject to validation.
///
/// The free-text message is always optional and never validated, so it has
/// no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Mobile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lead_is_empty() {
        assert!(Lead::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_lead_non_empty() {
        let lead = Lead {
            message: "hello".to_string(),
            ..Lead::default()
        };
        assert!(!lead.is_empty());
    }
}
