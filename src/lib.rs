//! Contact Store - an embeddable in-memory record store for contacts.
//!
//! Contacts carry an immutable ID and four mutable fields, each checked
//! against a fixed shape rule on construction and on every change. The
//! store keeps contacts in insertion order and enforces unique IDs.
//!
//! There is no persistence, network surface or internal locking. A host
//! that shares a store between threads must serialise access itself.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`ContactId`, `PhoneNumber`) and field rules
//! - **models**: The `Contact` record and its create/update inputs
//! - **repositories**: The `ContactRepository` seam and its in-memory implementation
//! - **services**: Host-facing operations that accept nullable inputs
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ContactId, Field, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactStoreError, StoreResult};
pub use models::{Contact, ContactChanges, NewContactParams};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use services::{ContactService, ContactServiceImpl, UpdateContactParams};
