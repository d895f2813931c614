//! In-memory contact store.
//!
//! # Responsibility
//! - Assign IDs, apply updates and expose listing/history views.
//! - Delegate file I/O to the flat-file persistence layer.
//!
//! # Invariants
//! - Contacts keep insertion order.
//! - Next ID is `max(existing IDs) + 1`, or `1` for an empty store.
//! - Every successful update appends exactly four change records.

use super::{StoreError, StoreResult};
use crate::clock::{Clock, SystemClock};
use crate::model::change::{ChangeRecord, ContactField};
use crate::model::contact::{Contact, ContactFields, ContactId};
use crate::persist::{read_contacts_file, write_contacts_file};
use log::{info, warn};
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Owning collection of contacts plus the clock used to stamp edits.
#[derive(Debug)]
pub struct ContactStore<C: Clock = SystemClock> {
    contacts: Vec<Contact>,
    clock: C,
}

impl ContactStore<SystemClock> {
    /// Creates an empty store stamping edits with the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ContactStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ContactStore<C> {
    /// Creates an empty store using a caller-provided time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            contacts: Vec::new(),
            clock,
        }
    }

    /// ID the next `add` will assign, or `None` once `ContactId::MAX` is taken.
    pub fn next_id(&self) -> Option<ContactId> {
        match self.contacts.iter().map(Contact::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Appends a new contact and returns its assigned ID.
    ///
    /// # Errors
    /// - Returns `StoreError::IdsExhausted` when the highest ID is
    ///   `ContactId::MAX`; the store is left untouched.
    pub fn add(&mut self, fields: ContactFields) -> StoreResult<ContactId> {
        let Some(id) = self.next_id() else {
            warn!("event=contact_add module=store status=error error_code=ids_exhausted");
            return Err(StoreError::IdsExhausted);
        };
        self.contacts.push(Contact::new(id, fields));
        info!("event=contact_add module=store status=ok contact_id={id}");
        Ok(id)
    }

    /// Replaces all four fields of contact `id` and logs the edit.
    ///
    /// # Errors
    /// - Returns `StoreError::NotFound` when no contact has `id`; the store
    ///   is left untouched.
    pub fn update(&mut self, id: ContactId, fields: ContactFields) -> StoreResult<()> {
        let at = self.clock.now();
        let Some(contact) = self.contacts.iter_mut().find(|c| c.id() == id) else {
            warn!("event=contact_update module=store status=error error_code=not_found contact_id={id}");
            return Err(StoreError::NotFound(id));
        };

        contact.apply_update(fields, at);
        info!(
            "event=contact_update module=store status=ok contact_id={id} records={} history_len={}",
            ContactField::ALL.len(),
            contact.changes().len()
        );
        Ok(())
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    /// All contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Listing view over every contact in store order.
    pub fn list(&self) -> ContactListing<'_> {
        ContactListing {
            contacts: &self.contacts,
        }
    }

    /// Change history view for contact `id`.
    ///
    /// # Errors
    /// - Returns `StoreError::NotFound` when no contact has `id`.
    pub fn history(&self, id: ContactId) -> StoreResult<ContactHistory<'_>> {
        self.get(id)
            .map(|contact| ContactHistory { contact })
            .ok_or(StoreError::NotFound(id))
    }

    /// Writes every contact and its change log to `path`, overwriting it.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        write_contacts_file(path.as_ref(), &self.contacts)
    }

    /// Replaces the store contents with the contacts stored at `path`.
    ///
    /// Returns the number of contacts loaded. Loaded contacts start with an
    /// empty change history.
    ///
    /// # Errors
    /// - Returns `StoreError::FileNotFound` when `path` does not exist.
    /// - Returns `StoreError::Io` when reading fails.
    ///
    /// The store is unchanged on every error path.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StoreResult<usize> {
        let contacts = read_contacts_file(path.as_ref())?;
        Ok(self.replace_contacts(contacts))
    }

    /// Clears the store and repopulates it with `contacts`.
    pub fn replace_contacts(&mut self, contacts: Vec<Contact>) -> usize {
        self.contacts = contacts;
        self.contacts.len()
    }
}

/// Text listing of contacts, one `{id}: {name}, {phone}, {email}, {address}` per line.
///
/// Renders `No contacts.` for an empty store.
#[derive(Debug, Clone, Copy)]
pub struct ContactListing<'a> {
    contacts: &'a [Contact],
}

impl<'a> ContactListing<'a> {
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        self.contacts.iter().map(Contact::to_string)
    }
}

impl Display for ContactListing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.contacts.is_empty() {
            return f.write_str("No contacts.");
        }
        for (index, contact) in self.contacts.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{contact}")?;
        }
        Ok(())
    }
}

/// Change history of one contact, oldest record first.
#[derive(Debug, Clone, Copy)]
pub struct ContactHistory<'a> {
    contact: &'a Contact,
}

impl<'a> ContactHistory<'a> {
    pub fn contact(&self) -> &'a Contact {
        self.contact
    }

    pub fn records(&self) -> &'a [ChangeRecord] {
        self.contact.changes()
    }
}

impl Display for ContactHistory<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Change history for contact {}:", self.contact.name())?;
        for record in self.records() {
            write!(f, "\n{record}")?;
        }
        Ok(())
    }
}
