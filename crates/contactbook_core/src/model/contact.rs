//! Contact record.
//!
//! # Responsibility
//! - Hold the current field values of one contact.
//! - Own the ordered change log for that contact.
//!
//! # Invariants
//! - `id` never changes after construction.
//! - Field values change only through `apply_update`, which logs one record
//!   per field.

use crate::model::change::{ChangeRecord, ContactField};
use crate::store::{StoreError, StoreResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Numeric contact identifier assigned by the store.
pub type ContactId = u32;

/// The four editable values of a contact.
///
/// No format validation is applied; any string (including empty) is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Reads one field by name.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::PhoneNumber => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Address => &self.address,
        }
    }
}

/// A contact with its current values and edit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    #[serde(flatten)]
    fields: ContactFields,
    /// Append-only; insertion order is chronological order.
    changes: Vec<ChangeRecord>,
}

impl Contact {
    /// Creates a contact with an empty change log.
    pub fn new(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            fields,
            changes: Vec::new(),
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn changes(&self) -> &[ChangeRecord] {
        &self.changes
    }

    /// Overwrites all four fields and appends one record per field.
    ///
    /// Records are appended in `ContactField::ALL` order even when a value
    /// did not change.
    pub(crate) fn apply_update(&mut self, fields: ContactFields, at: NaiveDateTime) {
        let previous = std::mem::replace(&mut self.fields, fields);
        for field in ContactField::ALL {
            self.changes.push(ChangeRecord::new(
                field,
                previous.get(field),
                self.fields.get(field),
                at,
            ));
        }
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}, {}, {}, {}",
            self.id, self.fields.name, self.fields.phone, self.fields.email, self.fields.address
        )
    }
}

/// Parses user-entered text as a contact ID.
///
/// # Errors
/// - Returns `StoreError::InvalidInput` when `text` is not a non-negative integer.
pub fn parse_contact_id(text: &str) -> StoreResult<ContactId> {
    let trimmed = text.trim();
    trimmed
        .parse::<ContactId>()
        .map_err(|_| StoreError::InvalidInput(trimmed.to_string()))
}
