//! Line codec and file access for `<id>,<name>,<phone>,<email>,<address>` files.
//!
//! Each contact line is followed by its history as
//! `CHANGE,<id>,<field>,<old>,<new>,<timestamp>` lines.

use crate::model::change::TIMESTAMP_FORMAT;
use crate::model::contact::{Contact, ContactFields, ContactId};
use crate::store::{StoreError, StoreResult};
use log::{error, info, warn};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Leading tag of change-history lines.
pub const CHANGE_TAG: &str = "CHANGE";

const CONTACT_LINE_PARTS: usize = 5;

/// Serializes contacts in store order, each followed by its change records.
pub fn encode_contacts(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        let fields = contact.fields();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            contact.id(),
            fields.name,
            fields.phone,
            fields.email,
            fields.address
        );
        for change in contact.changes() {
            let _ = writeln!(
                out,
                "{CHANGE_TAG},{},{},{},{},{}",
                contact.id(),
                change.field(),
                change.old_value(),
                change.new_value(),
                change.timestamp().format(TIMESTAMP_FORMAT)
            );
        }
    }
    out
}

/// Parses contact lines; every other line is skipped.
///
/// Only lines that split into exactly five comma-separated parts are
/// considered. Such a line with a non-numeric ID is skipped as well.
/// Returned contacts carry no change history.
pub fn decode_contacts(content: &str) -> Vec<Contact> {
    let mut contacts = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != CONTACT_LINE_PARTS {
            continue;
        }

        let Ok(id) = parts[0].trim().parse::<ContactId>() else {
            warn!(
                "event=contacts_decode module=persist status=skip line={} reason=invalid_id",
                index + 1
            );
            continue;
        };

        contacts.push(Contact::new(
            id,
            ContactFields::new(parts[1], parts[2], parts[3], parts[4]),
        ));
    }

    contacts
}

/// Writes all contacts to `path`, replacing any existing file.
///
/// # Errors
/// - Returns `StoreError::Io` when the file cannot be created or written.
pub fn write_contacts_file(path: &Path, contacts: &[Contact]) -> StoreResult<()> {
    let started_at = Instant::now();
    let encoded = encode_contacts(contacts);

    let result = File::create(path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        writer.write_all(encoded.as_bytes())?;
        writer.flush()
    });

    match result {
        Ok(()) => {
            info!(
                "event=contacts_save module=persist status=ok contacts={} bytes={} duration_ms={}",
                contacts.len(),
                encoded.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=contacts_save module=persist status=error error_code=write_failed error={}",
                err
            );
            Err(StoreError::io(path, err))
        }
    }
}

/// Reads and decodes the contacts stored at `path`.
///
/// # Errors
/// - Returns `StoreError::FileNotFound` when `path` is not an existing file.
/// - Returns `StoreError::Io` when the file cannot be read as UTF-8 text.
pub fn read_contacts_file(path: &Path) -> StoreResult<Vec<Contact>> {
    let started_at = Instant::now();

    if !path.is_file() {
        warn!("event=contacts_load module=persist status=error error_code=file_not_found");
        return Err(StoreError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|err| {
        error!(
            "event=contacts_load module=persist status=error error_code=read_failed error={}",
            err
        );
        StoreError::io(path, err)
    })?;

    let contacts = decode_contacts(&content);
    info!(
        "event=contacts_load module=persist status=ok contacts={} duration_ms={}",
        contacts.len(),
        started_at.elapsed().as_millis()
    );
    Ok(contacts)
}
