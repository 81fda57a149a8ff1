use std::collections::HashSet;

use rolodex_store::prelude::*;

fn ana() -> ContactInput {
    ContactInput::new("Ana", "Diaz", "a@x.com", "555-1111")
}

async fn empty_store() -> ContactStore {
    ContactStore::open(Box::new(MemStorage::new())).await
}

#[tokio::test]
async fn add_toggle_delete_walkthrough() -> Result<(), AppError> {
    let store = empty_store().await;
    assert!(store.contacts().is_empty());

    let added = store.add_contact(ana()).await?;

    let contacts = store.contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0], added);
    assert!(!added.favorite);
    assert_eq!(added.first_name, "Ana");
    assert_eq!(added.company, "");

    let toggled = store.toggle_favorite(&added.id).await?;
    assert!(toggled.favorite);
    assert_eq!(toggled.id, added.id);
    assert!(store.get(&added.id).is_some_and(|c| c.favorite));

    store.delete_contact(&added.id).await?;
    assert!(store.contacts().is_empty());
    Ok(())
}

#[tokio::test]
async fn ids_are_unique_for_rapid_adds() -> Result<(), AppError> {
    let store = empty_store().await;

    let mut ids = HashSet::new();
    for _ in 0..200 {
        let contact = store.add_contact(ana()).await?;
        assert!(ids.insert(contact.id), "id {} handed out twice", contact.id);
    }

    assert_eq!(store.contacts().len(), 200);
    Ok(())
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() -> Result<(), AppError> {
    let store = empty_store().await;

    let first = store.add_contact(ana()).await?;
    store.delete_contact(&first.id).await?;
    let second = store.add_contact(ana()).await?;

    assert_ne!(first.id, second.id);
    Ok(())
}

#[tokio::test]
async fn values_are_stored_as_submitted() -> Result<(), AppError> {
    let store = empty_store().await;
    let input = ContactInput::new("  Ana ", "Diaz", " a@x.com", "555-1111 ")
        .with_company("Acme")
        .with_notes("met at the conference");

    let added = store.add_contact(input).await?;

    assert_eq!(added.first_name, "  Ana ");
    assert_eq!(added.email, " a@x.com");
    assert_eq!(added.phone, "555-1111 ");
    assert_eq!(added.notes, "met at the conference");
    Ok(())
}

#[tokio::test]
async fn add_keeps_insertion_order() -> Result<(), AppError> {
    let store = empty_store().await;

    for name in ["Zoe", "Ana", "Mia"] {
        store
            .add_contact(ContactInput::new(name, "Diaz", "a@x.com", "1"))
            .await?;
    }

    let names: Vec<String> = store
        .contacts()
        .into_iter()
        .map(|c| c.first_name)
        .collect();
    assert_eq!(names, vec!["Zoe", "Ana", "Mia"]);
    Ok(())
}

#[tokio::test]
async fn incomplete_input_is_rejected() {
    let store = empty_store().await;

    for input in [
        ContactInput::new("", "Diaz", "a@x.com", "1"),
        ContactInput::new("Ana", " ", "a@x.com", "1"),
        ContactInput::new("Ana", "Diaz", "", "1"),
        ContactInput::new("Ana", "Diaz", "a@x.com", "\n"),
    ] {
        let err = store.add_contact(input).await.unwrap_err();
        assert!(err.is_validation(), "unexpected error {err}");
    }

    assert!(store.contacts().is_empty());
}
