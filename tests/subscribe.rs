use rolodex_store::prelude::*;

#[tokio::test]
async fn load_is_announced_to_early_subscribers() -> Result<(), AppError> {
    let existing = Contact::new(
        Uuid::new_v4(),
        ContactInput::new("Ana", "Diaz", "a@x.com", "1"),
    );
    let storage = MemStorage::with_contacts(std::slice::from_ref(&existing))?;
    let store = ContactStore::new(Box::new(storage));
    let mut events = store.subscribe();

    assert!(store.snapshot().loading);
    store.load().await;

    match events.recv().await {
        Some(StoreEvent::Loaded(snapshot)) => {
            assert!(!snapshot.loading);
            assert_eq!(snapshot.contacts, vec![existing]);
        }
        other => panic!("expected a load event, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn one_event_per_committed_mutation() -> Result<(), AppError> {
    let store = ContactStore::open(Box::new(MemStorage::new())).await;
    let mut events = store.subscribe();

    let ana = store
        .add_contact(ContactInput::new("Ana", "Diaz", "a@x.com", "1"))
        .await?;
    store.toggle_favorite(&ana.id).await?;
    store
        .update_contact(
            &ana.id,
            ContactPatch {
                notes: Some("climbing partner".to_string()),
                ..Default::default()
            },
        )
        .await?;
    let _ = store.delete_contact(&Uuid::new_v4()).await; // fails, no event
    store.delete_contact(&ana.id).await?;

    let mut changes = Vec::new();
    while let Some(event) = events.try_recv() {
        if let StoreEvent::Changed { change, .. } = event {
            changes.push(change);
        }
    }

    assert_eq!(
        changes,
        vec![
            Change::Added(ana.id),
            Change::FavoriteToggled(ana.id),
            Change::Updated(ana.id),
            Change::Deleted(ana.id),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn event_carries_committed_snapshot() -> Result<(), AppError> {
    let store = ContactStore::open(Box::new(MemStorage::new())).await;
    let mut events = store.subscribe();

    let ana = store
        .add_contact(ContactInput::new("Ana", "Diaz", "a@x.com", "1"))
        .await?;

    let event = events.recv().await.expect("store still alive");
    assert_eq!(event.snapshot(), &store.snapshot());
    assert_eq!(event.snapshot().get(&ana.id), Some(&ana));
    Ok(())
}

#[tokio::test]
async fn every_subscriber_is_notified_and_can_leave() -> Result<(), AppError> {
    let store = ContactStore::open(Box::new(MemStorage::new())).await;
    let mut first = store.subscribe();
    let second = store.subscribe();
    assert_eq!(store.subscriber_count(), 2);

    second.unsubscribe();
    assert_eq!(store.subscriber_count(), 1);

    store
        .add_contact(ContactInput::new("Ana", "Diaz", "a@x.com", "1"))
        .await?;

    assert!(matches!(
        first.try_recv(),
        Some(StoreEvent::Changed {
            change: Change::Added(_),
            ..
        })
    ));
    Ok(())
}
