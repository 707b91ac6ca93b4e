use contact_store::error::StoreResult;
use contact_store::models::{Contact, ContactChanges};
use contact_store::repositories::{ContactRepository, InMemoryContactRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Delegates storage to an `InMemoryContactRepository` and counts method
/// calls. Clones share the call counts, so a test can keep one handle
/// after boxing another into a service.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    inner: InMemoryContactRepository,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            inner: InMemoryContactRepository::new(),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed contacts without counting calls.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let mut repo = Self::new();
        for contact in contacts {
            repo.inner.add(contact).unwrap();
        }
        repo
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total calls across all methods.
    pub fn total_calls(&self) -> usize {
        let counts = self.call_counts.lock().unwrap();
        counts.values().sum()
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, contact: Contact) -> StoreResult<()> {
        self.track_call("add");
        self.inner.add(contact)
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        self.track_call("delete");
        self.inner.delete(id)
    }

    fn update(&mut self, id: &str, changes: ContactChanges) -> StoreResult<()> {
        self.track_call("update");
        self.inner.update(id, changes)
    }

    fn get(&self, id: &str) -> Option<&Contact> {
        self.track_call("get");
        self.inner.get(id)
    }

    fn list_all(&self) -> Vec<Contact> {
        self.track_call("list_all");
        self.inner.list_all()
    }

    fn len(&self) -> usize {
        self.track_call("len");
        self.inner.len()
    }
}
