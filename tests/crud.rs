use std::collections::HashSet;

use address_book::prelude::*;

fn book() -> ContactBook {
    ContactBook::with_store(Box::new(MemStore::new()))
}

#[test]
fn created_contact_round_trips() -> Result<(), AppError> {
    let mut book = book();

    let created = book.create()?;
    let fetched = book.get(created.id)?;

    assert_eq!(fetched, Some(created));
    Ok(())
}

#[test]
fn created_contacts_get_distinct_ids() -> Result<(), AppError> {
    let mut book = book();

    let mut ids = HashSet::new();
    for _ in 0..50 {
        ids.insert(book.create()?.id);
    }

    assert_eq!(ids.len(), 50);
    Ok(())
}

#[test]
fn update_merges_only_present_fields() -> Result<(), AppError> {
    let mut book = book();

    let contact = book.create()?;
    book.update(
        contact.id,
        ContactPatch {
            notes: Some("met at the conference".to_string()),
            favorite: Some(true),
            ..ContactPatch::default()
        },
    )?;

    let updated = book.update(
        contact.id,
        ContactPatch {
            first: Some("Ada".to_string()),
            ..ContactPatch::default()
        },
    )?;

    assert_eq!(updated.first, "Ada");
    assert_eq!(updated.notes, "met at the conference");
    assert!(updated.favorite);
    assert!(updated.last.is_empty());
    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.created_at, contact.created_at);
    Ok(())
}

#[test]
fn update_on_unknown_id_fails_and_changes_nothing() -> Result<(), AppError> {
    let mut book = book();

    let existing = book.create()?;
    let missing = Uuid::new_v4();

    let result = book.update(
        missing,
        ContactPatch {
            first: Some("Nobody".to_string()),
            ..ContactPatch::default()
        },
    );

    match result {
        Err(AppError::NotFound { id }) => assert_eq!(id, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }

    let contacts = book.list(None)?;
    assert_eq!(contacts, vec![existing]);
    Ok(())
}

#[test]
fn delete_removes_and_reports() -> Result<(), AppError> {
    let mut book = book();

    let contact = book.create()?;

    assert!(book.delete(contact.id)?);
    assert_eq!(book.get(contact.id)?, None);

    assert!(!book.delete(contact.id)?);
    assert!(book.list(None)?.is_empty());
    Ok(())
}

#[test]
fn delete_on_unknown_id_leaves_the_collection_alone() -> Result<(), AppError> {
    let mut book = book();

    let kept = book.create()?;

    assert!(!book.delete(Uuid::new_v4())?);
    assert_eq!(book.list(None)?, vec![kept]);
    Ok(())
}

#[test]
fn favorite_toggle_goes_through_update() -> Result<(), AppError> {
    let mut book = book();

    let contact = book.create()?;
    assert!(!contact.favorite);

    let marked = book.set_favorite(contact.id, true)?;
    assert!(marked.favorite);
    assert_eq!(marked.first, contact.first);
    assert_eq!(marked.notes, contact.notes);

    let unmarked = book.set_favorite(contact.id, false)?;
    assert!(!unmarked.favorite);
    Ok(())
}

#[test]
fn favorite_toggle_on_unknown_id_is_not_found() {
    let mut book = book();

    let missing = Uuid::new_v4();
    assert!(matches!(
        book.set_favorite(missing, true),
        Err(AppError::NotFound { id }) if id == missing
    ));
}
