use std::collections::BTreeMap;

use super::field::{Field, FieldId};

/// A field that failed validation.
///
/// This is the only error the form produces. It is shown next to the field
/// and reported in a rejected submission, never raised as control flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldInvalid {
    pub field: FieldId,
    pub message: String,
}

impl FieldInvalid {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// First failing rule's message, empty when valid.
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Convert a failure into the error reported for `field`.
    pub fn error(&self, field: FieldId) -> Option<FieldInvalid> {
        (!self.valid).then(|| FieldInvalid::new(field, self.message.clone()))
    }
}

/// Visible feedback state of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    /// No indicator, e.g. an untouched or empty optional field.
    #[default]
    Neutral,
    Success,
    Error(String),
}

impl UiState {
    /// The state a field should display for `result`.
    pub fn for_result(field: &Field, result: &ValidationResult) -> Self {
        if !result.valid {
            UiState::Error(result.message.clone())
        } else if field.trimmed().is_empty() {
            UiState::Neutral
        } else {
            UiState::Success
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, UiState::Error(_))
    }

    /// Error text shown under the field, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Validation results for one whole-form pass, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    results: BTreeMap<FieldId, ValidationResult>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: FieldId, result: ValidationResult) {
        self.results.insert(field, result);
    }

    /// Record `result` for `field`, keeping an earlier failure if there is one.
    pub(crate) fn merge(&mut self, field: FieldId, result: ValidationResult) {
        match self.results.get(&field) {
            Some(existing) if !existing.valid => {}
            _ => {
                self.results.insert(field, result);
            }
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&ValidationResult> {
        self.results.get(&field)
    }

    /// True when every validated field passed.
    pub fn is_valid(&self) -> bool {
        self.results.values().all(ValidationResult::is_valid)
    }

    /// Failures in field order.
    pub fn errors(&self) -> Vec<FieldInvalid> {
        self.results
            .iter()
            .filter_map(|(field, result)| result.error(*field))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &ValidationResult)> {
        self.results.iter().map(|(field, result)| (*field, result))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
