pub mod form;
pub mod mask;
pub mod page;
pub mod paths;
pub mod settings;
pub mod sink;
pub mod theme;
pub mod toast;
pub mod validation;

pub mod prelude {
    pub use crate::form::{ContactForm, ContactRecord, SubmissionOutcome, SubmissionState};
    pub use crate::mask::format_phone;
    pub use crate::page::{Accordion, MobileMenu, Newsletter, RevealTracker, Section, Shadow};
    pub use crate::settings::{SettingsError, SettingsProvider};
    pub use crate::sink::{
        FieldPresenter, LogNotifier, LogPresenter, LogSubmitter, Notifier, Submitter,
    };
    pub use crate::theme::{Theme, ThemePreference};
    pub use crate::toast::{Toast, ToastLevel, ToastState};
    pub use crate::validation::{
        Field, FieldId, FieldInvalid, FieldKind, FormState, UiState, ValidationResult,
        validate_field, validate_form,
    };
}
