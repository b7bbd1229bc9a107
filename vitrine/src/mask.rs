//! Live input mask for the phone field.
//!
//! The mask is always re-derived from the digits alone, so running it over
//! its own output changes nothing.

use std::sync::LazyLock;

use regex::Regex;

/// Above this many digits the input is left alone.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Landline layout, `(DD) DDDD-DDDD`. The last group may be partial.
static LANDLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d{4})(\d{0,4}).*").expect("landline pattern"));

/// Mobile layout, `(DD) DDDDD-DDDD`.
static MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d{5})(\d{0,4}).*").expect("mobile pattern"));

/// Reformat a phone value as the user types.
///
/// Non-digits are dropped and the remaining digits grouped. Fewer than six
/// digits cannot fill the leading groups, so the bare digits come back.
/// More than [`MAX_PHONE_DIGITS`] digits return `raw` unchanged.
///
/// ```
/// use vitrine::mask::format_phone;
///
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(format_phone("1198765432"), "(11) 9876-5432");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits = digits_of(raw);
    if digits.len() > MAX_PHONE_DIGITS {
        return raw.to_string();
    }

    let layout = if digits.len() <= 10 { &*LANDLINE } else { &*MOBILE };
    layout.replace(&digits, "(${1}) ${2}-${3}").into_owned()
}

/// ASCII digits of `raw`, in order.
pub fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
