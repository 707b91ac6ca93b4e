//! Contact model representing one validated person record.

use crate::domain::rules::{check_address, check_name, require};
use crate::domain::{ContactId, Field, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact with an immutable ID and four individually validated fields.
///
/// Every field satisfies its shape rule at all times: the constructor checks
/// all of them, and each setter re-checks only the field it changes. A
/// rejected setter leaves the contact untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewContactParams")]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone: PhoneNumber,
    address: String,
}

/// Nullable input for building a [`Contact`].
///
/// Hosts that receive loosely typed data (forms, JSON) fill this in and
/// convert with `Contact::try_from`. An absent field is reported as
/// `ValidationError::Missing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContactParams {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A partial update. `None` means "leave this field unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Contact {
    /// Create a new contact.
    ///
    /// Fields are checked in the order id, first name, last name, phone,
    /// address; the first failure is returned.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::try_from(NewContactParams {
            id: Some(id.into()),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone: Some(phone.into()),
            address: Some(address.into()),
        })
    }

    /// The contact's immutable ID.
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    /// Current first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Current last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Current phone number, ten digits.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Current address.
    pub fn address(&self) -> &str {
        &self.address
    }

    // Setters (the ID is not updatable)

    /// Replace the first name. A rejected value leaves the field unchanged.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), ValidationError> {
        let first_name = first_name.into();
        check_name(Field::FirstName, &first_name)?;
        self.first_name = first_name;
        Ok(())
    }

    /// Replace the last name. A rejected value leaves the field unchanged.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), ValidationError> {
        let last_name = last_name.into();
        check_name(Field::LastName, &last_name)?;
        self.last_name = last_name;
        Ok(())
    }

    /// Replace the phone number. A rejected value leaves the field unchanged.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phone = PhoneNumber::new(phone)?;
        Ok(())
    }

    /// Replace the address. A rejected value leaves the field unchanged.
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        let address = address.into();
        check_address(&address)?;
        self.address = address;
        Ok(())
    }

    /// Apply a partial update through the setters.
    ///
    /// Fields are applied in the order first name, last name, phone,
    /// address. This is not atomic: if a later field is rejected, the
    /// fields applied before it stay applied.
    pub fn apply(&mut self, changes: &ContactChanges) -> Result<(), ValidationError> {
        if let Some(first_name) = &changes.first_name {
            self.set_first_name(first_name.as_str())?;
        }
        if let Some(last_name) = &changes.last_name {
            self.set_last_name(last_name.as_str())?;
        }
        if let Some(phone) = &changes.phone {
            self.set_phone(phone.as_str())?;
        }
        if let Some(address) = &changes.address {
            self.set_address(address.as_str())?;
        }
        Ok(())
    }
}

impl TryFrom<NewContactParams> for Contact {
    type Error = ValidationError;

    fn try_from(params: NewContactParams) -> Result<Self, Self::Error> {
        let id = ContactId::new(require(Field::ContactId, params.id)?)?;

        let first_name = require(Field::FirstName, params.first_name)?;
        check_name(Field::FirstName, &first_name)?;

        let last_name = require(Field::LastName, params.last_name)?;
        check_name(Field::LastName, &last_name)?;

        let phone = PhoneNumber::new(require(Field::Phone, params.phone)?)?;

        let address = require(Field::Address, params.address)?;
        check_address(&address)?;

        Ok(Self {
            id,
            first_name,
            last_name,
            phone,
            address,
        })
    }
}

impl ContactChanges {
    /// Set a new first name.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set a new last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set a new phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set a new address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.address.is_none()
    }

    /// The fields this update touches, in application order.
    pub fn fields(&self) -> Vec<Field> {
        [
            (Field::FirstName, self.first_name.is_some()),
            (Field::LastName, self.last_name.is_some()),
            (Field::Phone, self.phone.is_some()),
            (Field::Address, self.address.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }
}
