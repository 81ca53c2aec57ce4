use std::env;
use std::path::Path;

use clap::Parser;

use crate::contacts::ContactBook;
use crate::domain::contact::{Contact, ContactPatch};
use crate::errors::AppError;
use crate::prelude::command::{Cli, Commands};
use crate::store::port::{export_contacts_to_csv, import_contacts_from_csv};
use crate::validation::{ValidationReq, validate_avatar, validate_twitter};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    crate::logging::init_logging();

    if let Some(path) = &cli.contacts_path {
        unsafe {
            env::set_var("CONTACTS_PATH", path);
        }
    }
    if let Some(ms) = cli.latency_ms {
        unsafe {
            env::set_var("FAKE_LATENCY_MS", ms.to_string());
        }
    }

    let mut book = ContactBook::new()?;

    match cli.command {
        Commands::List { query } => {
            let contacts = book.list(query.as_deref())?;

            if contacts.is_empty() {
                println!("No contacts yet");
                return Ok(());
            }

            for (mut i, c) in contacts.iter().enumerate() {
                i += 1;
                let star = if c.favorite { "★" } else { " " };
                println!("{i:>3}. {:<30} {} {}", c.display_name(), star, c.id);
            }
            Ok(())
        }

        Commands::Add {
            first,
            last,
            avatar,
            twitter,
            notes,
        } => {
            let patch = ContactPatch {
                first,
                last,
                avatar,
                twitter,
                notes,
                favorite: None,
            };
            validate_patch(&patch)?;

            let contact = book.create()?;
            let contact = if patch.is_empty() {
                contact
            } else {
                book.update(contact.id, patch)?
            };

            println!("Contact added successfully: {}", contact.id);
            Ok(())
        }

        Commands::Show { id } => match book.get(id)? {
            Some(contact) => {
                print_contact(&contact);
                Ok(())
            }
            None => {
                println!("No contact with id {id}");
                Ok(())
            }
        },

        Commands::Edit {
            id,
            first,
            last,
            avatar,
            twitter,
            notes,
        } => {
            let patch = ContactPatch {
                first,
                last,
                avatar,
                twitter,
                notes,
                favorite: None,
            };
            if patch.is_empty() {
                return Err(AppError::Validation(
                    "Provide at least one field to update. See help".to_string(),
                ));
            }
            validate_patch(&patch)?;

            book.update(id, patch)?;
            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Favorite { id, remove } => {
            let contact = book.set_favorite(id, !remove)?;

            if contact.favorite {
                println!("Added {} to favorites", contact.display_name());
            } else {
                println!("Removed {} from favorites", contact.display_name());
            }
            Ok(())
        }

        Commands::Delete { id } => {
            if book.delete(id)? {
                println!("Contact deleted successfully");
            } else {
                println!("No contact with id {id}");
            }
            Ok(())
        }

        Commands::Import { src } => {
            let records = import_contacts_from_csv(Path::new(&src))?;
            let total = records.len();

            // Imported records go through the ordinary create/update path,
            // so ids and creation times are assigned by the store.
            for record in records {
                let fresh = book.create()?;
                book.update(
                    fresh.id,
                    ContactPatch {
                        first: Some(record.first),
                        last: Some(record.last),
                        avatar: Some(record.avatar),
                        twitter: Some(record.twitter),
                        notes: Some(record.notes),
                        favorite: Some(record.favorite),
                    },
                )?;
            }

            println!("Successfully imported {} contacts from {:?}.", total, src);
            Ok(())
        }

        Commands::Export { des } => {
            let contacts = book.list(None)?;
            let (path, total) = export_contacts_to_csv(&contacts, des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

fn validate_patch(patch: &ContactPatch) -> Result<(), AppError> {
    if let Some(twitter) = &patch.twitter
        && !validate_twitter(twitter)?
    {
        return Err(AppError::Validation(ValidationReq::twitter_req()));
    }

    if let Some(avatar) = &patch.avatar
        && !validate_avatar(avatar)
    {
        return Err(AppError::Validation(ValidationReq::avatar_req()));
    }

    Ok(())
}

fn print_contact(contact: &Contact) {
    let star = if contact.favorite { "★" } else { "☆" };
    println!("{} {}", contact.display_name(), star);
    println!("id: {}", contact.id);

    if !contact.twitter.is_empty() {
        println!(
            "https://twitter.com/{}",
            contact.twitter.trim_start_matches('@')
        );
    }
    if !contact.notes.is_empty() {
        println!("{}", contact.notes);
    }
    if !contact.avatar.is_empty() {
        println!("avatar: {}", contact.avatar);
    }
}
