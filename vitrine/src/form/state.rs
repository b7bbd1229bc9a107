use std::fmt;

use super::record::ContactRecord;
use crate::validation::FieldInvalid;

/// Where a submission attempt currently is.
///
/// `Idle -> Validating -> {Accepted, Rejected} -> Idle`. Every attempt runs to
/// completion within one call, so outside of [`ContactForm::submit`] the form
/// is always `Idle`.
///
/// [`ContactForm::submit`]: super::ContactForm::submit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Accepted,
    Rejected,
}

impl SubmissionState {
    /// Whether moving from `self` to `next` is a legal step.
    pub fn can_transition_to(self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Accepted)
                | (Validating, Rejected)
                | (Accepted, Idle)
                | (Rejected, Idle)
        )
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Accepted => "accepted",
            SubmissionState::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every field passed; the record was handed to the submitter.
    Accepted(ContactRecord),
    /// At least one field failed. Errors are in field order.
    Rejected(Vec<FieldInvalid>),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }

    pub fn record(&self) -> Option<&ContactRecord> {
        match self {
            SubmissionOutcome::Accepted(record) => Some(record),
            SubmissionOutcome::Rejected(_) => None,
        }
    }

    pub fn errors(&self) -> &[FieldInvalid] {
        match self {
            SubmissionOutcome::Accepted(_) => &[],
            SubmissionOutcome::Rejected(errors) => errors,
        }
    }
}
