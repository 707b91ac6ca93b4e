//! Contact service layer.
//!
//! The host-facing entry points. Inputs arrive as `Option`s the way loosely
//! typed callers hold them; an absent ID or contact is rejected here with
//! `NullArgument` before the repository is touched.

use crate::config::Config;
use crate::error::{ContactStoreError, StoreResult};
use crate::models::{Contact, ContactChanges, NewContactParams};
use crate::repositories::{ContactRepository, InMemoryContactRepository};
use serde::{Deserialize, Serialize};

/// Parameters for updating a contact.
///
/// `contact_id` is required. Each field left as `None` is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateContactParams {
    pub contact_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UpdateContactParams {
    /// Start an update for `contact_id` with no field changes.
    pub fn for_contact(contact_id: impl Into<String>) -> Self {
        Self {
            contact_id: Some(contact_id.into()),
            ..Self::default()
        }
    }

    fn into_parts(self) -> (Option<String>, ContactChanges) {
        let changes = ContactChanges {
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            address: self.address,
        };
        (self.contact_id, changes)
    }
}

/// Contact service trait for business operations.
pub trait ContactService {
    /// Add an already constructed contact.
    fn add_contact(&mut self, contact: Option<Contact>) -> StoreResult<()>;

    /// Build a contact from nullable fields and add it.
    ///
    /// Nothing is stored if construction fails.
    fn create_contact(&mut self, params: NewContactParams) -> StoreResult<()>;

    /// Delete a contact by ID.
    fn delete_contact(&mut self, contact_id: Option<&str>) -> StoreResult<()>;

    /// Update the supplied fields of a contact.
    ///
    /// Not atomic: on a validation failure, fields applied before the
    /// rejected one keep their new values.
    fn update_contact(&mut self, params: UpdateContactParams) -> StoreResult<()>;

    /// Get a copy of a contact. An absent or unknown ID yields `None`.
    fn get_contact(&self, contact_id: Option<&str>) -> Option<Contact>;

    /// Get a snapshot of all contacts in insertion order.
    fn get_all_contacts(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn contact_count(&self) -> usize;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Box<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a contact service over the given repository.
    pub fn new(repository: Box<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Create a contact service over an in-memory repository sized from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self::new(Box::new(InMemoryContactRepository::with_config(config)))
    }
}

impl Default for ContactServiceImpl {
    fn default() -> Self {
        Self::new(Box::new(InMemoryContactRepository::new()))
    }
}

impl ContactService for ContactServiceImpl {
    fn add_contact(&mut self, contact: Option<Contact>) -> StoreResult<()> {
        let contact = contact.ok_or(ContactStoreError::NullArgument("Contact"))?;
        self.repository.add(contact)
    }

    fn create_contact(&mut self, params: NewContactParams) -> StoreResult<()> {
        let contact = Contact::try_from(params)?;
        self.repository.add(contact)
    }

    fn delete_contact(&mut self, contact_id: Option<&str>) -> StoreResult<()> {
        let contact_id = contact_id.ok_or(ContactStoreError::NullArgument("Contact ID"))?;
        self.repository.delete(contact_id)
    }

    fn update_contact(&mut self, params: UpdateContactParams) -> StoreResult<()> {
        let (contact_id, changes) = params.into_parts();
        let contact_id = contact_id.ok_or(ContactStoreError::NullArgument("Contact ID"))?;
        self.repository.update(&contact_id, changes)
    }

    fn get_contact(&self, contact_id: Option<&str>) -> Option<Contact> {
        contact_id.and_then(|id| self.repository.get(id).cloned())
    }

    fn get_all_contacts(&self) -> Vec<Contact> {
        self.repository.list_all()
    }

    fn contact_count(&self) -> usize {
        self.repository.len()
    }
}
