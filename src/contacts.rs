//! The contact book: list/create/get/update/delete over one persisted
//! collection.

use tracing::debug;
use uuid::Uuid;

use crate::domain::contact::{self, Contact, ContactPatch};
use crate::domain::search;
use crate::errors::AppError;
use crate::network::FakeNetwork;
use crate::store::{ContactStore, parse_store};

/// Sole authority over the persisted contact collection.
///
/// Every operation loads the whole collection and mutations write it all
/// back as one document. Overlapping writers race: the last save wins, there
/// is no version check, and a create or delete interleaved with an in-flight
/// update can be lost. The intended execution context is a single
/// user-paced session.
pub struct ContactBook {
    store: Box<dyn ContactStore>,
    net: FakeNetwork,
}

impl ContactBook {
    /// Book over the configured store ([`parse_store`]) with latency from
    /// the environment.
    pub fn new() -> Result<Self, AppError> {
        Ok(ContactBook {
            store: parse_store()?,
            net: FakeNetwork::from_env(),
        })
    }

    /// Book over an explicit store with latency disabled.
    pub fn with_store(store: Box<dyn ContactStore>) -> Self {
        Self::with_network(store, FakeNetwork::disabled())
    }

    pub fn with_network(store: Box<dyn ContactStore>, net: FakeNetwork) -> Self {
        ContactBook { store, net }
    }

    /// All contacts, or those whose first/last name matches `query`, sorted
    /// by last name then creation time. A missing or empty collection is an
    /// empty list, not an error.
    pub fn list(&mut self, query: Option<&str>) -> Result<Vec<Contact>, AppError> {
        self.net
            .delay(Some(&format!("list:{}", query.unwrap_or_default())));

        let mut contacts = self.store.load()?;
        if let Some(query) = query.filter(|q| !q.trim().is_empty()) {
            contacts.retain(|c| search::matches(c, query));
        }
        contacts.sort_by(contact::display_order);
        Ok(contacts)
    }

    /// Create a blank contact at the front of the collection.
    pub fn create(&mut self) -> Result<Contact, AppError> {
        self.net.delay(None);

        let contact = Contact::new();
        let mut contacts = self.store.load()?;
        contacts.insert(0, contact.clone());
        self.store.save(&contacts)?;

        debug!(id = %contact.id, "created contact");
        Ok(contact)
    }

    /// The contact with this id, or `None`. Absence is not an error.
    pub fn get(&mut self, id: Uuid) -> Result<Option<Contact>, AppError> {
        self.net.delay(Some(&format!("contact:{id}")));

        let contacts = self.store.load()?;
        Ok(contacts.into_iter().find(|c| c.id == id))
    }

    /// Merge `patch` into the contact with this id and persist. Fails with
    /// [`AppError::NotFound`] when no contact has the id.
    pub fn update(&mut self, id: Uuid, patch: ContactPatch) -> Result<Contact, AppError> {
        self.net.delay(None);

        let mut contacts = self.store.load()?;
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound { id })?;

        contact.apply(patch);
        let updated = contact.clone();
        self.store.save(&contacts)?;

        debug!(id = %id, "updated contact");
        Ok(updated)
    }

    /// Remove the contact with this id. `true` when something was removed;
    /// an unknown id is `false` and leaves the collection untouched.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, AppError> {
        let mut contacts = self.store.load()?;
        let Some(index) = contacts.iter().position(|c| c.id == id) else {
            return Ok(false);
        };

        contacts.remove(index);
        self.store.save(&contacts)?;

        debug!(id = %id, "deleted contact");
        Ok(true)
    }

    /// The favorite toggle; routed through [`ContactBook::update`].
    pub fn set_favorite(&mut self, id: Uuid, favorite: bool) -> Result<Contact, AppError> {
        self.update(id, ContactPatch::favorite(favorite))
    }

    /// Forget all memoized latency keys.
    pub fn reset_network(&mut self) {
        self.net.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStore;

    #[test]
    fn list_memoizes_per_query_key() -> Result<(), AppError> {
        let mut book = ContactBook::with_store(Box::new(MemStore::new()));

        book.list(None)?;
        book.list(Some("ali"))?;

        assert!(book.net.seen.contains("list:"));
        assert!(book.net.seen.contains("list:ali"));

        book.reset_network();
        assert!(book.net.seen.is_empty());
        Ok(())
    }

    #[test]
    fn mutations_clear_the_latency_memo() -> Result<(), AppError> {
        let mut book = ContactBook::with_store(Box::new(MemStore::new()));

        book.list(None)?;
        let contact = book.create()?;
        assert!(book.net.seen.is_empty());

        book.get(contact.id)?;
        assert!(book.net.seen.contains(&format!("contact:{}", contact.id)));

        book.update(contact.id, ContactPatch::favorite(true))?;
        assert!(book.net.seen.is_empty());
        Ok(())
    }

    #[test]
    fn delete_skips_the_network() -> Result<(), AppError> {
        let mut book = ContactBook::with_store(Box::new(MemStore::new()));

        let contact = book.create()?;
        book.get(contact.id)?;
        let seen_before = book.net.seen.clone();

        book.delete(contact.id)?;
        assert_eq!(book.net.seen, seen_before);
        Ok(())
    }
}
