//! Shape predicates and rule messages.

use std::sync::LazyLock;

use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

pub const PHONE_MIN_LENGTH: usize = 10;
pub const NAME_MIN_LENGTH: usize = 3;
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// `local@domain.tld`, one dot after the `@`, no whitespace anywhere.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Digits, whitespace, parentheses, hyphens and plus signs only.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s()+-]+$").expect("phone pattern"));

/// Whether `value` looks like an email address once trimmed.
///
/// This is a shape check only; it says nothing about deliverability.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Whether `value` looks like a phone number once trimmed.
pub fn is_phone_shaped(value: &str) -> bool {
    let value = value.trim();
    PHONE.is_match(value) && value.chars().count() >= PHONE_MIN_LENGTH
}
