use std::sync::Arc;

use log::info;

use crate::sink::Notifier;
use crate::toast::Toast;
use crate::validation::is_email_shaped;

pub const SUBSCRIBED_MESSAGE: &str = "Thanks for subscribing to our newsletter!";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email.";

/// Footer newsletter signup: a single email input.
pub struct Newsletter {
    input: String,
    notifier: Arc<dyn Notifier>,
}

impl Newsletter {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self {
            input: String::new(),
            notifier: Arc::new(notifier),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Submit the current input. On success the input is cleared; on
    /// failure it is kept so the user can fix it.
    pub fn submit(&mut self) -> bool {
        let email = self.input.trim();
        if is_email_shaped(email) {
            info!("newsletter signup: {}", email);
            self.notifier.notify(Toast::success(SUBSCRIBED_MESSAGE));
            self.input.clear();
            true
        } else {
            self.notifier.notify(Toast::error(INVALID_EMAIL_MESSAGE));
            false
        }
    }
}
