use vitrine::mask::{digits_of, format_phone};

#[test]
fn test_format_mobile_number() {
    assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
}

#[test]
fn test_format_landline_number() {
    assert_eq!(format_phone("1198765432"), "(11) 9876-5432");
}

#[test]
fn test_format_strips_existing_punctuation() {
    assert_eq!(format_phone("11 98765 4321"), "(11) 98765-4321");
    assert_eq!(format_phone("+11.9876.5432"), "(11) 9876-5432");
}

#[test]
fn test_format_partial_tail() {
    assert_eq!(format_phone("119876"), "(11) 9876-");
    assert_eq!(format_phone("11987654"), "(11) 9876-54");
}

#[test]
fn test_format_too_short_for_groups() {
    assert_eq!(format_phone(""), "");
    assert_eq!(format_phone("(11"), "11");
    assert_eq!(format_phone("11987"), "11987");
}

#[test]
fn test_format_leaves_long_input_untouched() {
    assert_eq!(format_phone("119876543210"), "119876543210");
    assert_eq!(format_phone("+55 (11) 98765-4321"), "+55 (11) 98765-4321");
}

#[test]
fn test_format_is_idempotent() {
    let digits = "11987654321";
    for end in 0..=digits.len() {
        let once = format_phone(&digits[..end]);
        assert_eq!(format_phone(&once), once, "prefix of length {end}");
    }
}

#[test]
fn test_typing_digit_by_digit() {
    let mut value = String::new();
    for c in "11987654321".chars() {
        value.push(c);
        value = format_phone(&value);
    }
    assert_eq!(value, "(11) 98765-4321");
}

#[test]
fn test_digits_of() {
    assert_eq!(digits_of("(11) 98765-4321"), "11987654321");
    assert_eq!(digits_of("abc"), "");
}
