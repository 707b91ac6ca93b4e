//! Domain validation errors.

use std::fmt;

/// The contact field a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The immutable contact identity.
    ContactId,
    /// Given name, at most ten characters.
    FirstName,
    /// Family name, at most ten characters.
    LastName,
    /// Exactly ten digits.
    Phone,
    /// Postal address, at most thirty characters.
    Address,
}

impl Field {
    /// Human readable field name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContactId => "contact ID",
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Phone => "phone number",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during contact field validation.
///
/// Every variant names the field it was raised for, so callers can react
/// to a specific field without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value was not supplied.
    Missing { field: Field },

    /// The value exceeds the field's maximum character count.
    TooLong {
        field: Field,
        max: usize,
        actual: usize,
    },

    /// The value does not have the exact character count the field requires.
    WrongLength {
        field: Field,
        expected: usize,
        actual: usize,
    },

    /// The value contains a character other than an ASCII digit.
    NonDigit { field: Field },
}

impl ValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            Self::Missing { field }
            | Self::TooLong { field, .. }
            | Self::WrongLength { field, .. }
            | Self::NonDigit { field } => *field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} cannot be null", field),
            Self::TooLong { field, max, actual } => write!(
                f,
                "{} must be {} characters or less (got {})",
                field, max, actual
            ),
            Self::WrongLength {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{} must be exactly {} characters (got {})",
                field, expected, actual
            ),
            Self::NonDigit { field } => write!(f, "{} must contain only digits 0-9", field),
        }
    }
}

impl std::error::Error for ValidationError {}
