//! Form-relay configuration and submission outcomes

use std::time::Duration;
use thiserror::Error;

use crate::{CoreError, CoreResult};

/// The one user-visible message covering every failed delivery. Rejection
/// and transport failure are deliberately indistinguishable to the visitor.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Why a submission attempt did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The relay answered with a non-2xx status.
    #[error("form relay rejected the submission with status {status}")]
    Rejected { status: u16 },

    /// The request never completed (DNS failure, dropped connection, ...).
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed(SubmitError),
}

impl SubmitOutcome {
    /// Classify an HTTP status: any 2xx counts as delivered. The response
    /// body is never inspected.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            SubmitOutcome::Delivered
        } else {
            SubmitOutcome::Failed(SubmitError::Rejected { status })
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered)
    }
}

/// Destination for lead submissions.
///
/// Constructed once at startup so a missing or malformed endpoint fails
/// there, never on the first submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    endpoint: String,
    timeout: Option<Duration>,
}

impl RelayConfig {
    pub fn new(endpoint: impl Into<String>) -> CoreResult<Self> {
        let endpoint = endpoint.into();
        let trimmed = endpoint.trim();

        if trimmed.is_empty() {
            return Err(CoreError::Config("relay endpoint is not set".to_string()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(CoreError::Config(format!(
                "relay endpoint is not an http(s) URL: {}",
                trimmed
            )));
        }

        Ok(Self {
            endpoint: trimmed.to_string(),
            timeout: None,
        })
    }

    /// Explicit request timeout. Unset means the transport's default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(SubmitOutcome::from_status(200).is_delivered());
        assert!(SubmitOutcome::from_status(204).is_delivered());
        assert!(SubmitOutcome::from_status(299).is_delivered());
        assert_eq!(
            SubmitOutcome::from_status(302),
            SubmitOutcome::Failed(SubmitError::Rejected { status: 302 })
        );
        assert_eq!(
            SubmitOutcome::from_status(500),
            SubmitOutcome::Failed(SubmitError::Rejected { status: 500 })
        );
    }

    #[test]
    fn test_endpoint_must_be_present() {
        assert!(RelayConfig::new("").is_err());
        assert!(RelayConfig::new("   ").is_err());
    }

    #[test]
    fn test_endpoint_must_be_http() {
        assert!(RelayConfig::new("ftp://relay.example.com").is_err());
        assert!(RelayConfig::new("relay.example.com/submit").is_err());
        assert!(RelayConfig::new("https://relay.example.com/submit").is_ok());
        assert!(RelayConfig::new("http://localhost:8080/submit").is_ok());
    }

    #[test]
    fn test_endpoint_is_trimmed() {
        let relay = RelayConfig::new(" https://relay.example.com/submit ").unwrap();
        assert_eq!(relay.endpoint(), "https://relay.example.com/submit");
    }

    #[test]
    fn test_timeout_is_opt_in() {
        let relay = RelayConfig::new("https://relay.example.com").unwrap();
        assert_eq!(relay.timeout(), None);
        let relay = relay.with_timeout(Duration::from_secs(30));
        assert_eq!(relay.timeout(), Some(Duration::from_secs(30)));
    }
}
