pub mod json;
pub mod memory;
pub mod port;

use std::fs;
use std::path::Path;

use dotenv::dotenv;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Full-collection persistence: implementors read and write the whole
/// contact list as one unit. There is no per-record access.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

/// The configured store: a [`json::JsonStore`] at `CONTACTS_PATH`, falling
/// back to the default path.
pub fn parse_store() -> Result<Box<dyn ContactStore>, AppError> {
    dotenv().ok();

    let path = std::env::var("CONTACTS_PATH").unwrap_or(json::STORAGE_PATH.to_string());
    Ok(Box::new(json::JsonStore::at(path)?))
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
