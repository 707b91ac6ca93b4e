//! Data models for the contact store.
//!
//! This module contains the contact record and the nullable input shapes
//! hosts use to create and partially update it.

pub mod contact;

pub use contact::{Contact, ContactChanges, NewContactParams};
