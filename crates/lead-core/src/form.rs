//! Lifecycle state machine for the lead capture form

use crate::lead::{Field, Lead};
use crate::relay::SubmitOutcome;
use crate::validation::{validate, FormErrors};

/// Seconds the success panel stays up before the form resets itself.
pub const RESET_COUNTDOWN_SECS: u8 = 10;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input.
    #[default]
    Editing,
    /// One request in flight; the submit control is disabled.
    Submitting,
    /// Submission accepted; counting down to an automatic reset.
    Success { seconds_left: u8 },
}

/// What a one-second tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; this many seconds remain.
    CountedDown(u8),
    /// The countdown expired and the form reset to an empty editing state.
    Reset,
    /// The form was not in the success phase; nothing happened.
    Idle,
}

/// State machine driving the contact form.
///
/// Owns the field values, the per-field validation errors and the current
/// phase. UI layers mutate it through [`input`](LeadForm::input),
/// [`submit`](LeadForm::submit), [`finish`](LeadForm::finish) and
/// [`tick`](LeadForm::tick), and render from the accessors; every
/// transition rule lives here. The machine cycles indefinitely across
/// submissions, there is no terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    lead: Lead,
    errors: FormErrors,
    phase: FormPhase,
}

impl LeadForm {
    /// An empty form in the editing phase.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lead(&self) -> &Lead {
        &self.lead
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Seconds left on the success countdown, if it is running.
    pub fn countdown(&self) -> Option<u8> {
        match self.phase {
            FormPhase::Success { seconds_left } => Some(seconds_left),
            _ => None,
        }
    }

    /// Update one field by its wire name.
    ///
    /// If the field currently shows a validation error, only that field's
    /// error is cleared; the rest of the error map is left alone. Unknown
    /// names are ignored.
    pub fn input(&mut self, field: &str, value: &str) {
        match field {
            "name" => {
                self.lead.name = value.to_string();
                self.errors.clear(Field::Name);
            }
            "email" => {
                self.lead.email = value.to_string();
                self.errors.clear(Field::Email);
            }
            "mobile" => {
                self.lead.mobile = value.to_string();
                self.errors.clear(Field::Mobile);
            }
            "message" => {
                self.lead.message = value.to_string();
            }
            _ => {}
        }
    }

    /// Validate and, if clean, move to `Submitting`.
    ///
    /// The whole error map is replaced by the freshly computed one. On any
    /// validation error the form stays in `Editing` and `None` comes back,
    /// meaning no request must be made. Outside `Editing` the call is
    /// refused outright so a second submission cannot start while one is
    /// in flight.
    ///
    /// On success the returned [`Lead`] is the exact payload to post.
    pub fn submit(&mut self) -> Option<Lead> {
        if self.phase != FormPhase::Editing {
            return None;
        }

        let errors = validate(&self.lead);
        let clean = errors.is_empty();
        self.errors = errors;

        if !clean {
            return None;
        }

        self.phase = FormPhase::Submitting;
        Some(self.lead.clone())
    }

    /// Feed the network result back in. Only meaningful while `Submitting`.
    ///
    /// Delivery starts the success countdown; any failure returns to
    /// `Editing` with every entered value retained so the visitor can
    /// correct and resubmit.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        if self.phase != FormPhase::Submitting {
            return;
        }

        self.phase = match outcome {
            SubmitOutcome::Delivered => FormPhase::Success {
                seconds_left: RESET_COUNTDOWN_SECS,
            },
            SubmitOutcome::Failed(_) => FormPhase::Editing,
        };
    }

    /// Advance the success countdown by one second.
    pub fn tick(&mut self) -> Tick {
        match self.phase {
            FormPhase::Success { seconds_left } => {
                if seconds_left <= 1 {
                    self.reset();
                    Tick::Reset
                } else {
                    let remaining = seconds_left - 1;
                    self.phase = FormPhase::Success {
                        seconds_left: remaining,
                    };
                    Tick::CountedDown(remaining)
                }
            }
            _ => Tick::Idle,
        }
    }

    /// Return to the initial empty editing state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_editing_and_empty() {
        let form = LeadForm::new();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.lead().is_empty());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_input_ignores_unknown_field() {
        let mut form = LeadForm::new();
        form.input("company", "Acme");
        assert!(form.lead().is_empty());
    }

    #[test]
    fn test_input_overwrites_previous_value() {
        let mut form = LeadForm::new();
        form.input("name", "J");
        form.input("name", "Jane");
        assert_eq!(form.lead().name, "Jane");
    }

    #[test]
    fn test_countdown_only_in_success() {
        let mut form = LeadForm::new();
        assert_eq!(form.countdown(), None);
        form.input("name", "Jane Doe");
        form.input("email", "jane@x.com");
        form.submit().unwrap();
        assert_eq!(form.countdown(), None);
        form.finish(SubmitOutcome::Delivered);
        assert_eq!(form.countdown(), Some(RESET_COUNTDOWN_SECS));
    }
}
