//! Domain value objects and field rules.
//!
//! This module contains type-safe wrappers for contact IDs and phone
//! numbers together with the shape rules every contact field must satisfy.
//! Value objects validate at construction time, so an invalid value can
//! never be represented in the system.

pub mod contact_id;
pub mod errors;
pub mod phone;
pub mod rules;

pub use contact_id::ContactId;
pub use errors::{Field, ValidationError};
pub use phone::PhoneNumber;
pub use rules::{MAX_ADDRESS_CHARS, MAX_ID_CHARS, MAX_NAME_CHARS, PHONE_DIGITS};
