//! Application service layer.
//!
//! Services are the boundary a host application calls into. They reject
//! absent arguments and delegate storage and uniqueness rules to a
//! repository.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl, UpdateContactParams};

// Re-export common types used by services
pub use crate::models::{Contact, ContactChanges, NewContactParams};
