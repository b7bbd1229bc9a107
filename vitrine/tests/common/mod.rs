#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use vitrine::form::ContactRecord;
use vitrine::sink::{FieldPresenter, Notifier, Submitter};
use vitrine::toast::Toast;
use vitrine::validation::{FieldId, UiState};

#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    calls: Arc<RwLock<Vec<(FieldId, UiState)>>>,
}

impl RecordingPresenter {
    pub fn calls(&self) -> Vec<(FieldId, UiState)> {
        self.calls.read().unwrap().clone()
    }

    /// Last state presented for `field`.
    pub fn last(&self, field: FieldId) -> Option<UiState> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .rev()
            .find(|(id, _)| *id == field)
            .map(|(_, state)| state.clone())
    }

    pub fn clear(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl FieldPresenter for RecordingPresenter {
    fn present(&self, field: FieldId, state: &UiState) {
        self.calls.write().unwrap().push((field, state.clone()));
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<RwLock<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.write().unwrap().push(toast);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSubmitter {
    records: Arc<RwLock<Vec<ContactRecord>>>,
}

impl RecordingSubmitter {
    pub fn records(&self) -> Vec<ContactRecord> {
        self.records.read().unwrap().clone()
    }
}

impl Submitter for RecordingSubmitter {
    fn submit(&self, record: &ContactRecord) {
        self.records.write().unwrap().push(record.clone());
    }
}
