//! Interactive text menu over a `ContactStore`.
//!
//! # Responsibility
//! - Read one menu choice per line and dispatch it to the store.
//! - Turn every store error into a user-visible message and keep looping.
//!
//! # Invariants
//! - An invalid ID aborts the command before any store mutation.
//! - Exit or end of input returns `Ok(())`.

use crate::config::CliConfig;
use contactbook_core::{parse_contact_id, Clock, ContactFields, ContactStore, StoreError};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "\
Menu:
1. Add contact
2. Update contact
3. List contacts
4. Show contact history
5. Save contacts to file
6. Load contacts from file
7. Exit";

/// Outcome of one menu command.
enum Step {
    Continue,
    Exit,
}

/// Runs the menu loop until the user exits or input ends.
pub fn run_menu<C, R, W>(
    store: &mut ContactStore<C>,
    config: &CliConfig,
    input: R,
    output: W,
) -> io::Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        store,
        config,
        input,
        output,
    };

    loop {
        writeln!(session.output, "{MENU}")?;
        let Some(choice) = session.read_line()? else {
            return Ok(());
        };
        debug!("event=menu_choice module=cli choice={}", choice.trim());
        if let Step::Exit = session.dispatch(choice.trim())? {
            return Ok(());
        }
    }
}

struct Session<'a, C: Clock, R, W> {
    store: &'a mut ContactStore<C>,
    config: &'a CliConfig,
    input: R,
    output: W,
}

impl<C: Clock, R: BufRead, W: Write> Session<'_, C, R, W> {
    fn dispatch(&mut self, choice: &str) -> io::Result<Step> {
        match choice {
            "1" => self.add_contact(),
            "2" => self.update_contact(),
            "3" => {
                writeln!(self.output, "{}", self.store.list())?;
                Ok(Step::Continue)
            }
            "4" => self.show_history(),
            "5" => self.save(),
            "6" => self.load(),
            "7" => Ok(Step::Exit),
            _ => {
                writeln!(self.output, "Unknown option.")?;
                Ok(Step::Continue)
            }
        }
    }

    fn add_contact(&mut self) -> io::Result<Step> {
        let Some(fields) = self.read_fields()? else {
            return Ok(Step::Exit);
        };
        match self.store.add(fields) {
            Ok(id) => {
                writeln!(self.output, "Contact added with ID {id}.")?;
                Ok(Step::Continue)
            }
            Err(err) => self.report(&err),
        }
    }

    fn update_contact(&mut self) -> io::Result<Step> {
        let Some(id) = self.prompt("Contact ID to update: ")? else {
            return Ok(Step::Exit);
        };
        let id = match parse_contact_id(&id) {
            Ok(id) => id,
            Err(err) => return self.report(&err),
        };
        let Some(fields) = self.read_fields()? else {
            return Ok(Step::Exit);
        };
        match self.store.update(id, fields) {
            Ok(()) => {
                writeln!(self.output, "Contact updated.")?;
                Ok(Step::Continue)
            }
            Err(err) => self.report(&err),
        }
    }

    fn show_history(&mut self) -> io::Result<Step> {
        let Some(id) = self.prompt("Contact ID to show history for: ")? else {
            return Ok(Step::Exit);
        };
        let result = parse_contact_id(&id).and_then(|id| {
            self.store
                .history(id)
                .map(|history| history.to_string())
        });
        match result {
            Ok(rendered) => {
                writeln!(self.output, "{rendered}")?;
                Ok(Step::Continue)
            }
            Err(err) => self.report(&err),
        }
    }

    fn save(&mut self) -> io::Result<Step> {
        let Some(path) = self.prompt_path("File name to save contacts to: ")? else {
            return Ok(Step::Exit);
        };
        match self.store.save(&path) {
            Ok(()) => {
                writeln!(
                    self.output,
                    "Contacts and change history saved to {}.",
                    path.display()
                )?;
                Ok(Step::Continue)
            }
            Err(err) => self.report(&err),
        }
    }

    fn load(&mut self) -> io::Result<Step> {
        let Some(path) = self.prompt_path("File name to load contacts from: ")? else {
            return Ok(Step::Exit);
        };
        match self.store.load(&path) {
            Ok(count) => {
                writeln!(
                    self.output,
                    "Loaded {count} contacts from {}.",
                    path.display()
                )?;
                Ok(Step::Continue)
            }
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, err: &StoreError) -> io::Result<Step> {
        let message = match err {
            StoreError::NotFound(_) => "Contact not found.".to_string(),
            StoreError::InvalidInput(_) => "Invalid contact ID.".to_string(),
            StoreError::FileNotFound(path) => format!("File not found: {}", path.display()),
            StoreError::IdsExhausted | StoreError::Io { .. } => err.to_string(),
        };
        writeln!(self.output, "{message}")?;
        Ok(Step::Continue)
    }

    fn read_fields(&mut self) -> io::Result<Option<ContactFields>> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(None);
        };
        let Some(phone) = self.prompt("Phone number: ")? else {
            return Ok(None);
        };
        let Some(email) = self.prompt("Email: ")? else {
            return Ok(None);
        };
        let Some(address) = self.prompt("Address: ")? else {
            return Ok(None);
        };
        Ok(Some(ContactFields {
            name,
            phone,
            email,
            address,
        }))
    }

    fn prompt_path(&mut self, label: &str) -> io::Result<Option<PathBuf>> {
        Ok(self.prompt(label)?.map(|name| {
            let name = name.trim();
            if name.is_empty() {
                self.config.default_file.clone()
            } else {
                PathBuf::from(name)
            }
        }))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its terminator; `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
