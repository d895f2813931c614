//! Contact store and its error contract.
//!
//! # Responsibility
//! - Own every contact for the lifetime of a session.
//! - Report semantic failures (`NotFound`, `InvalidInput`, `FileNotFound`)
//!   alongside I/O transport errors.
//!
//! # Invariants
//! - All reads and writes of contacts pass through `ContactStore`.
//! - No error is fatal; callers recover and keep the store usable.

use crate::model::contact::ContactId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod contact_store;

pub use contact_store::{ContactHistory, ContactListing, ContactStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error taxonomy for contact book operations.
#[derive(Debug)]
pub enum StoreError {
    /// No contact carries the requested ID.
    NotFound(ContactId),
    /// User input could not be parsed (e.g. a non-numeric ID).
    InvalidInput(String),
    /// Every `ContactId` up to `ContactId::MAX` is already taken.
    IdsExhausted,
    /// Load target does not exist.
    FileNotFound(PathBuf),
    /// Reading or writing a contacts file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::InvalidInput(value) => write!(f, "invalid contact ID: `{value}`"),
            Self::IdsExhausted => write!(f, "no contact ID left after {}", ContactId::MAX),
            Self::FileNotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
