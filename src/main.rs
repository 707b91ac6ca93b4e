//! Contact Store - demo host
//!
//! Runs a short add/update/delete session against an in-memory store and
//! logs each step to stderr.

use anyhow::Result;
use contact_store::{Config, Contact, ContactService, ContactServiceImpl, UpdateContactParams};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact store demo (initial capacity: {})",
        config.initial_capacity
    );

    let mut service = ContactServiceImpl::with_config(&config);

    service.add_contact(Some(Contact::new(
        "123",
        "John",
        "Doe",
        "1234567890",
        "123 Main St",
    )?))?;
    service.add_contact(Some(Contact::new(
        "456",
        "Jane",
        "Smith",
        "9876543210",
        "456 Oak Ave",
    )?))?;
    info!("Stored {} contacts", service.contact_count());

    let update = UpdateContactParams {
        first_name: Some("Janet".to_string()),
        ..UpdateContactParams::for_contact("123")
    };
    service.update_contact(update)?;

    // A rejected add leaves the store unchanged
    let duplicate = Contact::new("456", "Dup", "Licate", "0000000000", "Nowhere")?;
    if let Err(e) = service.add_contact(Some(duplicate)) {
        error!("Rejected contact: {}", e);
    }

    service.delete_contact(Some("456"))?;

    for contact in service.get_all_contacts() {
        info!(
            "{}: {} {}, {}, {}",
            contact.id(),
            contact.first_name(),
            contact.last_name(),
            contact.phone(),
            contact.address()
        );
    }

    info!("Contact store demo complete");
    Ok(())
}
