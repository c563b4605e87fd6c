//! Lead Capture Core
//!
//! This crate provides the domain logic behind the landing page's contact
//! form: the lead record, the field validation rules, the
//! editing/submitting/success lifecycle and the form-relay configuration.
//! It is deliberately free of any UI framework so the whole state machine
//! is testable natively.

pub mod form;
pub mod lead;
pub mod relay;
pub mod validation;

use thiserror::Error;

pub use form::{FormPhase, LeadForm, Tick, RESET_COUNTDOWN_SECS};
pub use lead::{Field, Lead};
pub use relay::{RelayConfig, SubmitError, SubmitOutcome, SUBMIT_FAILURE_MESSAGE};
pub use validation::{validate, FieldError, FormErrors};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
