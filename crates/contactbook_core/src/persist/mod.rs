//! Flat-file persistence for the contact book.
//!
//! # Responsibility
//! - Encode contacts and their change logs into the comma-separated file format.
//! - Decode contact lines back into contacts.
//!
//! # Invariants
//! - File handles are opened and released within a single call.
//! - Change history is written but never read back.
//! - Values are not escaped; a comma inside a value corrupts that line on reload.

mod flat_file;

pub use flat_file::{
    decode_contacts, encode_contacts, read_contacts_file, write_contacts_file, CHANGE_TAG,
};
