//! Field shape rules shared by the value objects and the contact model.
//!
//! Lengths are counted in characters (Unicode scalar values), never bytes.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum characters in a contact ID.
pub const MAX_ID_CHARS: usize = 10;

/// Maximum characters in a first or last name.
pub const MAX_NAME_CHARS: usize = 10;

/// Exact number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Maximum characters in an address.
pub const MAX_ADDRESS_CHARS: usize = 30;

// `\d` would accept any Unicode decimal digit; only 0-9 is allowed.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("phone pattern is a valid regex"));

/// Reject `value` if it has more than `max` characters.
pub fn check_max_chars(field: Field, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

/// Reject `value` unless it is exactly [`PHONE_DIGITS`] ASCII digits.
pub fn check_phone(value: &str) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual != PHONE_DIGITS {
        return Err(ValidationError::WrongLength {
            field: Field::Phone,
            expected: PHONE_DIGITS,
            actual,
        });
    }
    if !PHONE_PATTERN.is_match(value) {
        return Err(ValidationError::NonDigit { field: Field::Phone });
    }
    Ok(())
}

/// Check a name field (first or last).
pub fn check_name(field: Field, value: &str) -> Result<(), ValidationError> {
    check_max_chars(field, value, MAX_NAME_CHARS)
}

/// Check an address.
pub fn check_address(value: &str) -> Result<(), ValidationError> {
    check_max_chars(Field::Address, value, MAX_ADDRESS_CHARS)
}

/// Unwrap an optional value, reporting `Missing` for `field` when absent.
pub fn require(field: Field, value: Option<String>) -> Result<String, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}
