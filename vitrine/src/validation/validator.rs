use log::debug;

use super::field::{Field, FieldId, FieldKind};
use super::result::{FormState, UiState, ValidationResult};
use super::rules::{
    EMAIL_MESSAGE, MESSAGE_MIN_LENGTH, MESSAGE_TOO_SHORT, NAME_MIN_LENGTH, NAME_TOO_SHORT,
    PHONE_MESSAGE, REQUIRED_MESSAGE, is_email_shaped, is_phone_shaped,
};
use crate::sink::FieldPresenter;

/// Minimum trimmed length enforced for a field, with its message.
fn min_length(field: FieldId) -> Option<(usize, &'static str)> {
    match field {
        FieldId::Name => Some((NAME_MIN_LENGTH, NAME_TOO_SHORT)),
        FieldId::Message => Some((MESSAGE_MIN_LENGTH, MESSAGE_TOO_SHORT)),
        _ => None,
    }
}

/// Run the rule set against `field` without touching any presentation.
pub fn check(field: &Field) -> ValidationResult {
    let value = field.trimmed();

    if value.is_empty() {
        return if field.is_required() {
            ValidationResult::invalid(REQUIRED_MESSAGE)
        } else {
            ValidationResult::valid()
        };
    }

    match field.kind() {
        FieldKind::Email if !is_email_shaped(value) => {
            return ValidationResult::invalid(EMAIL_MESSAGE);
        }
        FieldKind::Tel if !is_phone_shaped(value) => {
            return ValidationResult::invalid(PHONE_MESSAGE);
        }
        _ => {}
    }

    let too_short = min_length(field.id()).filter(|(min, _)| value.chars().count() < *min);
    if let Some((_, message)) = too_short {
        return ValidationResult::invalid(message);
    }

    ValidationResult::valid()
}

/// Validate one field and push its new state to `presenter`.
pub fn validate_field(field: &Field, presenter: &dyn FieldPresenter) -> ValidationResult {
    let result = check(field);
    let state = UiState::for_result(field, &result);
    debug!("validated {}: {:?}", field.id(), state);
    presenter.present(field.id(), &state);
    result
}

/// Validate every field that takes part in form validation.
///
/// All fields are visited even after a failure so each one's indicator is
/// refreshed in the same pass. Fields outside [`FieldId::VALIDATED`] are
/// skipped. A validated field missing from `fields` fails as required, and
/// a field given more than once only passes if every occurrence passes.
pub fn validate_all<'a>(
    fields: impl IntoIterator<Item = &'a Field>,
    presenter: &dyn FieldPresenter,
) -> FormState {
    let mut state = FormState::new();
    for field in fields {
        if field.id().is_validated() {
            state.merge(field.id(), validate_field(field, presenter));
        }
    }

    for id in FieldId::VALIDATED {
        if state.get(id).is_none() {
            debug!("{} missing from form, treating as empty", id);
            state.merge(id, ValidationResult::invalid(REQUIRED_MESSAGE));
        }
    }
    state
}

/// Whether every validated field passes. See [`validate_all`].
pub fn validate_form<'a>(
    fields: impl IntoIterator<Item = &'a Field>,
    presenter: &dyn FieldPresenter,
) -> bool {
    validate_all(fields, presenter).is_valid()
}
