//! Presentation and delivery collaborators.
//!
//! The form never renders anything itself. Hosts implement these traits and
//! hand them in; the `Log*` implementations write to the `log` facade and are
//! enough for headless use.

use std::sync::Arc;

use log::{info, warn};

use crate::form::ContactRecord;
use crate::toast::{Toast, ToastLevel};
use crate::validation::{FieldId, UiState};

/// Renders the error/success indicator of a field. Called synchronously.
pub trait FieldPresenter: Send + Sync {
    fn present(&self, field: FieldId, state: &UiState);
}

/// Shows transient notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Delivers an accepted submission.
///
/// Delivery failures belong to the implementation; the form has no way to
/// observe them.
pub trait Submitter: Send + Sync {
    fn submit(&self, record: &ContactRecord);
}

impl<T: FieldPresenter + ?Sized> FieldPresenter for Arc<T> {
    fn present(&self, field: FieldId, state: &UiState) {
        (**self).present(field, state)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast)
    }
}

impl<T: Submitter + ?Sized> Submitter for Arc<T> {
    fn submit(&self, record: &ContactRecord) {
        (**self).submit(record)
    }
}

/// Presenter that only logs state changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPresenter;

impl FieldPresenter for LogPresenter {
    fn present(&self, field: FieldId, state: &UiState) {
        match state {
            UiState::Error(message) => info!("[{}] error: {}", field, message),
            UiState::Success => info!("[{}] ok", field),
            UiState::Neutral => info!("[{}] cleared", field),
        }
    }
}

/// Notifier that logs each toast at a level matching its severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Success => info!("[{}] {}", toast.level.icon(), toast.message),
            ToastLevel::Error => warn!("[{}] {}", toast.level.icon(), toast.message),
        }
    }
}

/// Submitter that logs the collected record instead of sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&self, record: &ContactRecord) {
        info!("contact form data: {:?}", record);
    }
}
