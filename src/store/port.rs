use std::fs;
use std::path::{Path, PathBuf};

use csv::{Reader, Writer};

use super::create_file_parent;
use crate::domain::contact::Contact;
use crate::errors::AppError;

const EXPORT_PATH: &str = "./.instance/exported.csv";

/// Write the collection to a `.csv` file. A directory destination gets
/// `exported.csv` appended; any other extension is rejected.
pub fn export_contacts_to_csv(
    contacts: &[Contact],
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(EXPORT_PATH);

    if let Some(path) = des {
        file_path = PathBuf::from(path);

        if file_path.is_dir() {
            file_path = file_path.join("exported.csv");
        } else if file_path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation(
                "Export file must be a .csv file".to_string(),
            ));
        }
    }

    create_file_parent(&file_path)?;

    let mut writer = Writer::from_path(&file_path)?;
    let mut counter: u64 = 0;

    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }
    writer.flush()?;

    Ok((file_path, counter))
}

/// Read contact records from a `.csv` file. Records come back as parsed;
/// callers decide how to merge them into the collection.
pub fn import_contacts_from_csv(src: &Path) -> Result<Vec<Contact>, AppError> {
    if src.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    if !fs::exists(src)? {
        return Err(AppError::Validation(format!(
            "No such file: {}",
            src.display()
        )));
    }

    let mut reader = Reader::from_path(src)?;
    let mut contacts = Vec::new();

    for result in reader.deserialize() {
        let record: Contact = result?;
        contacts.push(record);
    }

    Ok(contacts)
}
