//! Core domain logic for the contact book.
//! This crate owns contacts, their edit history and the contacts file format.

pub mod clock;
pub mod logging;
pub mod model;
pub mod persist;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::change::{ChangeRecord, ContactField, TIMESTAMP_FORMAT};
pub use model::contact::{parse_contact_id, Contact, ContactFields, ContactId};
pub use store::{ContactHistory, ContactListing, ContactStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
