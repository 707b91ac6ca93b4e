use crate::config::Config;
use crate::error::{ContactStoreError, StoreResult};
use crate::models::{Contact, ContactChanges};
use crate::repositories::traits::ContactRepository;
use tracing::{debug, trace};

/// Contact repository backed by an insertion-ordered `Vec`.
///
/// Lookups are linear scans over the collection; the first match wins.
/// The repository owns its contacts exclusively and hands out shared
/// references or clones, never mutable aliases.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository with room for `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Vec::with_capacity(capacity),
        }
    }

    /// Create an empty repository sized from the host configuration.
    pub fn with_config(config: &Config) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Iterate over stored contacts in insertion order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.id().as_str() == id)
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn add(&mut self, contact: Contact) -> StoreResult<()> {
        if self.position(contact.id().as_str()).is_some() {
            return Err(ContactStoreError::DuplicateId(contact.id().to_string()));
        }

        debug!(contact_id = %contact.id(), "Contact added");
        self.contacts.push(contact);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| ContactStoreError::NotFound(id.to_string()))?;

        self.contacts.remove(index);
        debug!(contact_id = %id, remaining = self.contacts.len(), "Contact deleted");
        Ok(())
    }

    fn update(&mut self, id: &str, changes: ContactChanges) -> StoreResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| ContactStoreError::NotFound(id.to_string()))?;

        self.contacts[index].apply(&changes)?;

        // Evaluated only when debug is enabled
        debug!(contact_id = %id, fields = ?changes.fields(), "Contact updated");
        Ok(())
    }

    fn get(&self, id: &str) -> Option<&Contact> {
        let found = self.contacts.iter().find(|c| c.id().as_str() == id);
        trace!(contact_id = %id, found = found.is_some(), "Contact lookup");
        found
    }

    fn list_all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
