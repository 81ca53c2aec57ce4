use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::{ContactStore, create_file_parent};
use crate::domain::contact::Contact;
use crate::errors::AppError;

pub const STORAGE_PATH: &str = "./.instance/contacts.json";

/// Current on-disk layout version. Bumped when the document shape changes;
/// files written by a newer build are refused rather than migrated.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct ContactsFile {
    version: u32,
    contacts: Vec<Contact>,
}

/// One JSON document holding the whole collection. Saves truncate and
/// rewrite the file.
pub struct JsonStore {
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self, AppError> {
        Self::at(STORAGE_PATH)
    }

    pub fn at(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        create_file_parent(&path)?;
        Ok(JsonStore { path })
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value = serde_json::from_str(&data)?;

        // Early files stored a bare array with no version envelope.
        if value.is_array() {
            warn!(path = %self.path.display(), "loading unversioned contacts file");
            return Ok(serde_json::from_value(value)?);
        }

        let document: ContactsFile = serde_json::from_value(value)?;
        if document.version > FORMAT_VERSION {
            return Err(AppError::UnsupportedVersion(document.version));
        }
        Ok(document.contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let document = ContactsFile {
            version: FORMAT_VERSION,
            contacts: contacts.to_vec(),
        };
        let data = serde_json::to_string(&document)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(data.as_bytes())?;

        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}
