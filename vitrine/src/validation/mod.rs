//! Field and form validation for the contact form.
//!
//! Rules are evaluated in a fixed order and the first failing rule decides the
//! message. Every validation pass pushes the resulting [`UiState`] through a
//! [`FieldPresenter`](crate::sink::FieldPresenter) before returning, so callers
//! get real-time feedback without inspecting the result themselves.
//!
//! # Example
//!
//! ```ignore
//! use vitrine::validation::{Field, FieldId, validate_field};
//! use vitrine::sink::LogPresenter;
//!
//! let mut email = Field::contact(FieldId::Email);
//! email.set_value("ana@example.com");
//!
//! let result = validate_field(&email, &LogPresenter);
//! assert!(result.is_valid());
//! ```

mod field;
mod result;
mod rules;
mod validator;

pub use field::{Field, FieldId, FieldKind};
pub use result::{FieldInvalid, FormState, UiState, ValidationResult};
pub use rules::{
    EMAIL_MESSAGE, MESSAGE_MIN_LENGTH, MESSAGE_TOO_SHORT, NAME_MIN_LENGTH, NAME_TOO_SHORT,
    PHONE_MESSAGE, PHONE_MIN_LENGTH, REQUIRED_MESSAGE, is_email_shaped, is_phone_shaped,
};
pub use validator::{check, validate_all, validate_field, validate_form};
