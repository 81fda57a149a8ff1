use rolodex_store::prelude::*;

#[tokio::test]
async fn deleting_contacts() -> Result<(), AppError> {
    let store = ContactStore::open(Box::new(MemStorage::new())).await;

    // Attempt to delete non existing contact
    let err = store.delete_contact(&Uuid::new_v4()).await.unwrap_err();
    assert!(err.is_not_found());

    let mut added = Vec::new();
    for (first_name, phone) in [
        ("Patricia", "08066809241"),
        ("Diane", "08064879199"),
        ("John", "08046516806"),
    ] {
        added.push(
            store
                .add_contact(ContactInput::new(first_name, "Doe", "x@y.com", phone))
                .await?,
        );
    }

    store.delete_contact(&added[1].id).await?;

    let remaining: Vec<Uuid> = store.contacts().iter().map(|c| c.id).collect();
    assert_eq!(remaining, vec![added[0].id, added[2].id]);

    // A second delete of the same id finds nothing
    let err = store.delete_contact(&added[1].id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.contacts().len(), 2);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn double_tap_delete_succeeds_once() -> Result<(), AppError> {
    let store = ContactStore::open(Box::new(MemStorage::new())).await;
    let keep = store
        .add_contact(ContactInput::new("Keep", "Me", "k@x.com", "1"))
        .await?;
    let gone = store
        .add_contact(ContactInput::new("Gone", "Soon", "g@x.com", "2"))
        .await?
        .id;

    let first = tokio::spawn({
        let store = store.clone();
        async move { store.delete_contact(&gone).await }
    });
    let second = tokio::spawn({
        let store = store.clone();
        async move { store.delete_contact(&gone).await }
    });

    let results = [first.await.unwrap(), second.await.unwrap()];
    let ok = results.iter().filter(|r| r.is_ok()).count();
    let not_found = results
        .iter()
        .filter(|r| r.as_ref().is_err_and(AppError::is_not_found))
        .count();

    assert_eq!(ok, 1);
    assert_eq!(not_found, 1);
    assert_eq!(store.contacts(), vec![keep]);
    Ok(())
}
