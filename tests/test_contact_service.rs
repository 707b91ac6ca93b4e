//! Tests for the contact service boundary.
//!
//! A call-counting mock repository checks that absent arguments are
//! rejected before storage is touched and that valid calls are delegated.

mod mocks;

use contact_store::{
    Contact, ContactService, ContactServiceImpl, ContactStoreError, Field, NewContactParams,
    UpdateContactParams,
};
use mocks::MockContactRepository;
use std::sync::{Arc, Mutex};
use std::thread;

fn sample_contact(id: &str, first_name: &str, last_name: &str) -> Contact {
    Contact::new(id, first_name, last_name, "1234567890", "123 Main St").unwrap()
}

fn service_with_mock(repo: &MockContactRepository) -> ContactServiceImpl {
    ContactServiceImpl::new(Box::new(repo.clone()))
}

#[test]
fn test_null_arguments_never_reach_repository() {
    let repo = MockContactRepository::new();
    let mut service = service_with_mock(&repo);

    assert_eq!(
        service.add_contact(None),
        Err(ContactStoreError::NullArgument("Contact"))
    );
    assert_eq!(
        service.delete_contact(None),
        Err(ContactStoreError::NullArgument("Contact ID"))
    );
    assert_eq!(
        service.update_contact(UpdateContactParams::default()),
        Err(ContactStoreError::NullArgument("Contact ID"))
    );
    assert!(service.get_contact(None).is_none());

    assert_eq!(repo.total_calls(), 0);
}

#[test]
fn test_operations_delegate_to_repository() {
    let repo = MockContactRepository::new();
    let mut service = service_with_mock(&repo);

    service
        .add_contact(Some(sample_contact("1", "John", "Doe")))
        .unwrap();
    service
        .update_contact(UpdateContactParams::for_contact("1"))
        .unwrap();
    assert!(service.get_contact(Some("1")).is_some());
    assert_eq!(service.get_all_contacts().len(), 1);
    service.delete_contact(Some("1")).unwrap();

    assert_eq!(repo.get_call_count("add"), 1);
    assert_eq!(repo.get_call_count("update"), 1);
    assert_eq!(repo.get_call_count("get"), 1);
    assert_eq!(repo.get_call_count("list_all"), 1);
    assert_eq!(repo.get_call_count("delete"), 1);
}

#[test]
fn test_create_contact_with_invalid_fields_skips_repository() {
    let repo = MockContactRepository::new();
    let mut service = service_with_mock(&repo);

    let params = NewContactParams {
        id: Some("1".to_string()),
        first_name: None,
        last_name: Some("Doe".to_string()),
        phone: Some("1234567890".to_string()),
        address: Some("Main St".to_string()),
    };

    match service.create_contact(params) {
        Err(ContactStoreError::Validation(e)) => assert_eq!(e.field(), Field::FirstName),
        other => panic!("Expected Validation error, got: {:?}", other),
    }
    assert_eq!(repo.get_call_count("add"), 0);
}

#[test]
fn test_create_contact_adds_valid_contact() {
    let mut service = ContactServiceImpl::default();
    let params = NewContactParams {
        id: Some("789".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        phone: Some("5550001111".to_string()),
        address: Some("12 St James's Square".to_string()),
    };

    service.create_contact(params).unwrap();

    let stored = service.get_contact(Some("789")).unwrap();
    assert_eq!(stored.last_name(), "Lovelace");
    assert_eq!(stored.address(), "12 St James's Square");
}

#[test]
fn test_seeded_mock_rejects_duplicate() {
    let repo = MockContactRepository::with_contacts(vec![sample_contact("1", "John", "Doe")]);
    let mut service = service_with_mock(&repo);

    let result = service.add_contact(Some(sample_contact("1", "Jane", "Smith")));
    assert_eq!(result, Err(ContactStoreError::DuplicateId("1".to_string())));
    assert_eq!(repo.get_call_count("add"), 1);
    assert_eq!(service.get_contact(Some("1")).unwrap().first_name(), "John");
}

#[test]
fn test_get_unknown_id_is_none_not_error() {
    let repo = MockContactRepository::with_contacts(vec![sample_contact("1", "John", "Doe")]);
    let service = service_with_mock(&repo);

    assert!(service.get_contact(Some("2")).is_none());
    assert_eq!(repo.get_call_count("get"), 1);
}

#[test]
fn test_reset_call_counts() {
    let repo = MockContactRepository::new();
    let service = service_with_mock(&repo);

    assert_eq!(service.contact_count(), 0);
    assert_eq!(repo.get_call_count("len"), 1);

    repo.reset_call_counts();
    assert_eq!(repo.total_calls(), 0);
}

#[test]
fn test_service_shared_across_threads_behind_mutex() {
    let shared = Arc::new(Mutex::new(ContactServiceImpl::default()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = Arc::clone(&shared);
            thread::spawn(move || {
                let mut service = service.lock().unwrap();
                service.add_contact(Some(sample_contact(&i.to_string(), "John", "Doe")))
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let service = shared.lock().unwrap();
    assert_eq!(service.contact_count(), 4);
    for i in 0..4 {
        assert!(service.get_contact(Some(&i.to_string())).is_some());
    }
}

#[test]
fn test_service_over_mock_moves_to_another_thread() {
    let repo = MockContactRepository::new();
    let mut service = service_with_mock(&repo);

    let count = thread::spawn(move || {
        service
            .add_contact(Some(sample_contact("1", "John", "Doe")))
            .unwrap();
        service.contact_count()
    })
    .join()
    .unwrap();

    assert_eq!(count, 1);
    assert_eq!(repo.get_call_count("add"), 1);
}
