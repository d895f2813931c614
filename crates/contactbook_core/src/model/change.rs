//! Field-level change records.
//!
//! # Responsibility
//! - Name the editable contact fields and their persisted spelling.
//! - Capture one old -> new transition with the instant it happened.
//!
//! # Invariants
//! - A `ChangeRecord` is immutable after construction.
//! - `ContactField::ALL` is the order in which updates log their records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Display and file format for change timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One editable field of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    PhoneNumber,
    Email,
    Address,
}

impl ContactField {
    /// Every field, in the order updates record them.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::PhoneNumber,
        ContactField::Email,
        ContactField::Address,
    ];

    /// Field name as written to history lines and `CHANGE` records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::PhoneNumber => "PhoneNumber",
            Self::Email => "Email",
            Self::Address => "Address",
        }
    }

    /// Inverse of [`ContactField::as_str`].
    #[cfg(test)]
    fn parse(value: &str) -> Option<Self> {
        match value {
            "Name" => Some(Self::Name),
            "PhoneNumber" => Some(Self::PhoneNumber),
            "Email" => Some(Self::Email),
            "Address" => Some(Self::Address),
            _ => None,
        }
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable log entry for one field edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    field: ContactField,
    old_value: String,
    new_value: String,
    /// Local wall-clock time supplied by the store's clock.
    timestamp: NaiveDateTime,
}

impl ChangeRecord {
    pub fn new(
        field: ContactField,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            field,
            old_value: old_value.into(),
            new_value: new_value.into(),
            timestamp,
        }
    }

    pub fn field(&self) -> ContactField {
        self.field
    }

    pub fn old_value(&self) -> &str {
        &self.old_value
    }

    pub fn new_value(&self) -> &str {
        &self.new_value
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns whether the edit left the value unchanged.
    pub fn is_noop(&self) -> bool {
        self.old_value == self.new_value
    }
}

impl Display for ChangeRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} - {} -> {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.field,
            self.old_value,
            self.new_value
        )
    }
}
