use serde::{Deserialize, Serialize};

/// The data handed to a [`Submitter`](crate::sink::Submitter) once a
/// submission is accepted. All values are already trimmed; `company` may be
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}
