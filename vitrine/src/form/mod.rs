//! The contact form and its submission state machine.

mod contact;
mod record;
mod state;

pub use contact::{ContactForm, SUBMIT_FAILED_MESSAGE, SUBMIT_SUCCESS_MESSAGE};
pub use record::ContactRecord;
pub use state::{SubmissionOutcome, SubmissionState};
