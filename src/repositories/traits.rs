use crate::error::StoreResult;
use crate::models::{Contact, ContactChanges};

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (in-memory, mock, instrumented). Implementations keep
/// contacts in insertion order and never hold two contacts with the same ID.
///
/// Implementations do no internal locking. A host sharing one repository
/// between threads wraps it (or the service owning it) in a mutex.
pub trait ContactRepository: Send + Sync {
    /// Store a new contact at the end of the collection.
    ///
    /// Fails with `DuplicateId` if a contact with the same ID (exact,
    /// case-sensitive match) is already stored.
    fn add(&mut self, contact: Contact) -> StoreResult<()>;

    /// Remove the contact with this ID, keeping the order of the rest.
    ///
    /// Fails with `NotFound` if no contact has this ID.
    fn delete(&mut self, id: &str) -> StoreResult<()>;

    /// Apply a partial update to the contact with this ID.
    ///
    /// Fails with `NotFound` if no contact has this ID, or with the first
    /// `Validation` error raised by a field. Fields applied before a
    /// rejected one stay applied.
    fn update(&mut self, id: &str, changes: ContactChanges) -> StoreResult<()>;

    /// Look up a contact by ID.
    fn get(&self, id: &str) -> Option<&Contact>;

    /// Snapshot of every contact in insertion order.
    fn list_all(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
