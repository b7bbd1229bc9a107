use std::sync::Arc;

use log::{debug, info};

use super::record::ContactRecord;
use super::state::{SubmissionOutcome, SubmissionState};
use crate::mask::format_phone;
use crate::sink::{FieldPresenter, Notifier, Submitter};
use crate::toast::Toast;
use crate::validation::{
    Field, FieldId, FieldKind, FormState, UiState, check, validate_all, validate_field,
};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Message sent successfully! We will get in touch soon.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Please fill in all fields correctly.";

/// The contact form: five fields, their displayed states, and the
/// collaborators that render feedback and deliver submissions.
///
/// Each method corresponds to one page event and runs to completion.
///
/// # Example
///
/// ```ignore
/// let mut form = ContactForm::new(LogPresenter, LogNotifier, LogSubmitter);
///
/// form.input(FieldId::Name, "Ana Silva");
/// form.blur(FieldId::Name);
///
/// if form.submit().is_accepted() {
///     // fields are cleared, success toast shown
/// }
/// ```
pub struct ContactForm {
    /// Indexed by [`FieldId::index`].
    fields: [Field; 5],
    /// Last state pushed to the presenter for each field.
    displayed: [UiState; 5],
    state: SubmissionState,
    presenter: Arc<dyn FieldPresenter>,
    notifier: Arc<dyn Notifier>,
    submitter: Arc<dyn Submitter>,
}

impl ContactForm {
    pub fn new(
        presenter: impl FieldPresenter + 'static,
        notifier: impl Notifier + 'static,
        submitter: impl Submitter + 'static,
    ) -> Self {
        Self {
            fields: FieldId::ALL.map(Field::contact),
            displayed: Default::default(),
            state: SubmissionState::Idle,
            presenter: Arc::new(presenter),
            notifier: Arc::new(notifier),
            submitter: Arc::new(submitter),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    /// Current raw value of a field.
    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).value()
    }

    /// State most recently shown for a field.
    pub fn ui_state(&self, id: FieldId) -> &UiState {
        &self.displayed[id.index()]
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Results for the current values, computed without touching the
    /// presenter.
    pub fn form_state(&self) -> FormState {
        let mut state = FormState::new();
        for field in self.fields.iter().filter(|f| f.id().is_validated()) {
            state.insert(field.id(), check(field));
        }
        state
    }

    /// Trimmed values of every field, including the optional company.
    pub fn record(&self) -> ContactRecord {
        let value = |id: FieldId| self.field(id).trimmed().to_string();
        ContactRecord {
            name: value(FieldId::Name),
            email: value(FieldId::Email),
            phone: value(FieldId::Phone),
            company: value(FieldId::Company),
            message: value(FieldId::Message),
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// The user changed a field's text.
    ///
    /// Phone input goes through the mask first. A field already showing an
    /// error is re-validated so the error clears as soon as it is fixed;
    /// other fields wait for [`ContactForm::blur`].
    pub fn input(&mut self, id: FieldId, value: impl Into<String>) {
        let mut value = value.into();
        if self.field(id).kind() == FieldKind::Tel {
            value = format_phone(&value);
        }
        self.fields[id.index()].set_value(value);

        if self.ui_state(id).is_error() {
            self.blur(id);
        }
    }

    /// The field lost focus.
    pub fn blur(&mut self, id: FieldId) {
        if !id.is_validated() {
            return;
        }
        let field = &self.fields[id.index()];
        let result = validate_field(field, self.presenter.as_ref());
        self.displayed[id.index()] = UiState::for_result(field, &result);
    }

    /// The form was submitted.
    pub fn submit(&mut self) -> SubmissionOutcome {
        self.transition(SubmissionState::Validating);

        let results = validate_all(self.fields.iter(), self.presenter.as_ref());
        for (id, result) in results.iter() {
            self.displayed[id.index()] = UiState::for_result(&self.fields[id.index()], result);
        }

        let outcome = if results.is_valid() {
            self.transition(SubmissionState::Accepted);
            let record = self.record();
            info!("contact form accepted for {}", record.email);
            self.submitter.submit(&record);
            self.notifier.notify(Toast::success(SUBMIT_SUCCESS_MESSAGE));
            self.reset();
            SubmissionOutcome::Accepted(record)
        } else {
            self.transition(SubmissionState::Rejected);
            let errors = results.errors();
            debug!("contact form rejected: {} invalid field(s)", errors.len());
            self.notifier.notify(Toast::error(SUBMIT_FAILED_MESSAGE));
            SubmissionOutcome::Rejected(errors)
        };

        self.transition(SubmissionState::Idle);
        outcome
    }

    /// Clear every value and indicator.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
            self.presenter.present(field.id(), &UiState::Neutral);
        }
        self.displayed = Default::default();
    }

    fn transition(&mut self, next: SubmissionState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal submission transition {} -> {}",
            self.state,
            next
        );
        debug!("submission {} -> {}", self.state, next);
        self.state = next;
    }
}
