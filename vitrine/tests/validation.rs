mod common;

use common::RecordingPresenter;
use vitrine::validation::{
    EMAIL_MESSAGE, Field, FieldId, FieldKind, MESSAGE_TOO_SHORT, NAME_TOO_SHORT, PHONE_MESSAGE,
    REQUIRED_MESSAGE, UiState, check, is_email_shaped, is_phone_shaped, validate_all,
    validate_field, validate_form,
};

fn contact(id: FieldId, value: &str) -> Field {
    Field::contact(id).with_value(value)
}

// ============================================================================
// Shape predicates
// ============================================================================

#[test]
fn test_email_shape_accepts_single_level_domain() {
    assert!(is_email_shaped("a@b.co"));
    assert!(is_email_shaped("ana.silva@example.com"));
    assert!(is_email_shaped("  ana@x.com  "));
}

#[test]
fn test_email_shape_rejects_malformed() {
    for value in ["not-an-email", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.co", "a@@b.co", ""] {
        assert!(!is_email_shaped(value), "{value:?} should not be email-shaped");
    }
}

#[test]
fn test_phone_shape_allows_punctuation() {
    assert!(is_phone_shaped("1198765432"));
    assert!(is_phone_shaped("(11) 98765-4321"));
    assert!(is_phone_shaped("+55 11 98765-4321"));
}

#[test]
fn test_phone_shape_rejects_letters_and_short_values() {
    assert!(!is_phone_shaped("11 9876 abcd"));
    assert!(!is_phone_shaped("123456789"));
    assert!(!is_phone_shaped("(11) 987"));
    // length counts the trimmed value
    assert!(!is_phone_shaped("   12345678   "));
}

// ============================================================================
// Field rules
// ============================================================================

#[test]
fn test_required_empty_fails_regardless_of_kind() {
    for id in FieldId::VALIDATED {
        let result = check(&contact(id, "   "));
        assert!(!result.is_valid(), "{id} should be required");
        assert_eq!(result.message, REQUIRED_MESSAGE);
    }
}

#[test]
fn test_invalid_email_message() {
    let result = check(&contact(FieldId::Email, "not-an-email"));
    assert!(!result.is_valid());
    assert_eq!(result.message, EMAIL_MESSAGE);

    assert!(check(&contact(FieldId::Email, "a@b.co")).is_valid());
}

#[test]
fn test_short_phone_fails_whatever_the_characters() {
    for value in ["123456789", "(11) 9876", "+5511"] {
        let result = check(&contact(FieldId::Phone, value));
        assert_eq!(result.message, PHONE_MESSAGE, "{value:?}");
    }
    assert!(check(&contact(FieldId::Phone, "1234567890")).is_valid());
}

#[test]
fn test_name_minimum_length() {
    let result = check(&contact(FieldId::Name, "Al"));
    assert!(!result.is_valid());
    assert_eq!(result.message, NAME_TOO_SHORT);

    assert!(check(&contact(FieldId::Name, "Ana")).is_valid());
    assert!(!check(&contact(FieldId::Name, "  Al  ")).is_valid());
}

#[test]
fn test_message_minimum_length() {
    let result = check(&contact(FieldId::Message, "123456789"));
    assert_eq!(result.message, MESSAGE_TOO_SHORT);

    assert!(check(&contact(FieldId::Message, "1234567890")).is_valid());
}

#[test]
fn test_minimum_length_counts_characters() {
    // three characters, more than three bytes
    assert!(check(&contact(FieldId::Name, "Zoë")).is_valid());
}

#[test]
fn test_length_rules_only_apply_by_identity() {
    // a short optional text field is fine
    let company = contact(FieldId::Company, "X");
    assert!(check(&company).is_valid());

    // an email field with a two character value only fails the email rule
    let email = Field::new(FieldId::Email, FieldKind::Email).with_value("ab");
    assert_eq!(check(&email).message, EMAIL_MESSAGE);
}

#[test]
fn test_optional_empty_field_is_valid() {
    let company = Field::contact(FieldId::Company);
    let result = check(&company);

    assert!(result.is_valid());
    assert!(result.message.is_empty());
}

// ============================================================================
// Presentation side effects
// ============================================================================

#[test]
fn test_validate_field_presents_error() {
    let presenter = RecordingPresenter::default();
    let result = validate_field(&contact(FieldId::Email, "nope"), &presenter);

    assert!(!result.is_valid());
    assert_eq!(
        presenter.calls(),
        vec![(FieldId::Email, UiState::Error(EMAIL_MESSAGE.to_string()))]
    );
}

#[test]
fn test_validate_field_presents_success_and_neutral() {
    let presenter = RecordingPresenter::default();

    validate_field(&contact(FieldId::Name, "Ana"), &presenter);
    validate_field(&Field::contact(FieldId::Company), &presenter);

    assert_eq!(presenter.last(FieldId::Name), Some(UiState::Success));
    assert_eq!(presenter.last(FieldId::Company), Some(UiState::Neutral));
}

#[test]
fn test_validate_form_visits_every_field() {
    let presenter = RecordingPresenter::default();
    let fields = [
        contact(FieldId::Name, ""),
        contact(FieldId::Email, "bad"),
        contact(FieldId::Phone, "1198765432"),
        contact(FieldId::Company, ""),
        contact(FieldId::Message, "Hello there!"),
    ];

    assert!(!validate_form(&fields, &presenter));

    // company is not validated
    let seen: Vec<FieldId> = presenter.calls().into_iter().map(|(id, _)| id).collect();
    assert_eq!(seen, FieldId::VALIDATED.to_vec());
    assert_eq!(presenter.last(FieldId::Phone), Some(UiState::Success));
}

#[test]
fn test_validate_all_collects_errors_in_field_order() {
    let presenter = RecordingPresenter::default();
    let fields = [
        contact(FieldId::Message, "short"),
        contact(FieldId::Name, "Al"),
        contact(FieldId::Email, "ana@x.com"),
        contact(FieldId::Phone, "1198765432"),
    ];

    let state = validate_all(&fields, &presenter);
    let errors = state.errors();

    assert_eq!(state.len(), 4);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, FieldId::Name);
    assert_eq!(errors[1].field, FieldId::Message);
    assert_eq!(errors[0].to_string(), format!("name: {NAME_TOO_SHORT}"));
    assert!(state.get(FieldId::Email).is_some_and(|r| r.is_valid()));
}

#[test]
fn test_validate_form_fails_when_fields_are_missing() {
    let presenter = RecordingPresenter::default();

    assert!(!validate_form(&[] as &[Field], &presenter));
    assert!(!validate_form(&[contact(FieldId::Name, "Ana Silva")], &presenter));

    let state = validate_all(&[contact(FieldId::Name, "Ana Silva")], &presenter);
    assert_eq!(state.len(), 4);
    for id in [FieldId::Email, FieldId::Phone, FieldId::Message] {
        let result = state.get(id).unwrap();
        assert!(!result.is_valid(), "{id}");
        assert_eq!(result.message, REQUIRED_MESSAGE);
    }
}

#[test]
fn test_repeated_field_keeps_earlier_failure() {
    let presenter = RecordingPresenter::default();
    let fields = [
        contact(FieldId::Name, "Al"),
        contact(FieldId::Name, "Ana Silva"),
        contact(FieldId::Email, "ana@x.com"),
        contact(FieldId::Phone, "1198765432"),
        contact(FieldId::Message, "Hello there!"),
    ];

    let state = validate_all(&fields, &presenter);

    assert!(!state.is_valid());
    assert_eq!(state.get(FieldId::Name).unwrap().message, NAME_TOO_SHORT);
    assert!(!validate_form(&fields, &presenter));
}
