use super::*;

use crate::storage::ContactStorage;
use crate::validation::{validate_input, validate_patch};
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::{Mutex, broadcast};
use tracing::{debug, error, warn};

const EVENT_CAPACITY: usize = 64;

/// The single source of truth for contacts.
///
/// Cloning yields another handle on the same store. Reads are synchronous and
/// only ever see committed state. Mutations run one at a time, in the order
/// they were issued, and become visible only after the full list has been
/// written to storage. A failed write leaves the list exactly as it was.
#[derive(Clone)]
pub struct ContactStore {
    inner: Arc<Inner>,
}

struct Inner {
    storage: Box<dyn ContactStorage>,
    state: RwLock<Snapshot>,
    // Held across the whole read-modify-persist-publish cycle.
    mutations: Arc<Mutex<()>>,
    events: broadcast::Sender<StoreEvent>,
}

impl ContactStore {
    /// An idle store: empty and `loading` until [`ContactStore::load`] runs.
    pub fn new(storage: Box<dyn ContactStorage>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                storage,
                state: RwLock::new(Snapshot {
                    contacts: Vec::new(),
                    loading: true,
                }),
                mutations: Arc::new(Mutex::new(())),
                events,
            }),
        }
    }

    pub async fn open(storage: Box<dyn ContactStorage>) -> Self {
        let store = Self::new(storage);
        store.load().await;
        store
    }

    pub fn medium(&self) -> &str {
        self.inner.storage.get_medium()
    }

    /// Reads the persisted list. Never fails: unreadable storage is logged
    /// and the store starts empty. Does nothing once loaded.
    pub async fn load(&self) {
        let _turn = self.inner.mutations.lock().await;
        self.load_locked().await;
    }

    pub fn snapshot(&self) -> Snapshot {
        self.read_state().clone()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.read_state().contacts.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    pub fn get(&self, id: &Uuid) -> Option<Contact> {
        self.read_state().get(id).cloned()
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription::new(self.inner.events.subscribe())
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.events.receiver_count()
    }

    pub async fn add_contact(&self, input: ContactInput) -> Result<Contact, AppError> {
        validate_input(&input)?;

        self.commit(move |contacts| {
            let contact = Contact::new(fresh_id(contacts), input);
            contacts.push(contact.clone());
            Ok((Change::Added(contact.id), contact))
        })
        .await
    }

    pub async fn update_contact(&self, id: &Uuid, patch: ContactPatch) -> Result<Contact, AppError> {
        validate_patch(&patch)?;
        let id = *id;

        self.commit(move |contacts| {
            let contact = contacts
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| not_found(&id))?;
            contact.apply(patch);
            Ok((Change::Updated(id), contact.clone()))
        })
        .await
    }

    pub async fn delete_contact(&self, id: &Uuid) -> Result<(), AppError> {
        let id = *id;

        self.commit(move |contacts| {
            let index = contacts
                .iter()
                .position(|c| c.id == id)
                .ok_or_else(|| not_found(&id))?;
            contacts.remove(index);
            Ok((Change::Deleted(id), ()))
        })
        .await
    }

    pub async fn toggle_favorite(&self, id: &Uuid) -> Result<Contact, AppError> {
        let id = *id;

        self.commit(move |contacts| {
            let contact = contacts
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| not_found(&id))?;
            contact.favorite = !contact.favorite;
            Ok((Change::FavoriteToggled(id), contact.clone()))
        })
        .await
    }

    /// Waits for its turn, then hands the mutation to a task of its own so
    /// that dropping the caller's future cannot split the write from the
    /// in-memory swap.
    async fn commit<T, F>(&self, mutate: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Vec<Contact>) -> Result<(Change, T), AppError> + Send + 'static,
    {
        let turn = Arc::clone(&self.inner.mutations).lock_owned().await;
        let store = self.clone();

        let task = tokio::spawn(async move {
            let _turn = turn;
            store.apply(mutate).await
        });

        task.await.map_err(|err| {
            error!(error = %err, "mutation task did not complete");
            AppError::Persistence(format!("mutation did not complete: {err}"))
        })?
    }

    /// Applies `mutate` to a copy of the list, persists the copy and only
    /// then publishes it. Callers hold the mutation gate.
    async fn apply<T, F>(&self, mutate: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Vec<Contact>) -> Result<(Change, T), AppError>,
    {
        self.load_locked().await;

        let mut next = self.read_state().contacts.clone();
        let (change, output) = mutate(&mut next)?;

        if let Err(err) = self.inner.storage.write_all(&next).await {
            error!(
                medium = self.medium(),
                ?change,
                error = %err,
                "failed to persist contacts, change discarded"
            );
            return Err(err);
        }

        let snapshot = {
            let mut state = self.write_state();
            state.contacts = next;
            state.clone()
        };
        debug!(?change, contacts = snapshot.len(), "contacts committed");

        // No subscribers is not an error.
        let _ = self.inner.events.send(StoreEvent::Changed { change, snapshot });
        Ok(output)
    }

    async fn load_locked(&self) {
        let loading = self.read_state().loading;
        if !loading {
            return;
        }

        let contacts = match self.inner.storage.read_all().await {
            Ok(Some(contacts)) => drop_duplicate_ids(contacts),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    medium = self.medium(),
                    error = %err,
                    "could not load contacts, starting with an empty list"
                );
                Vec::new()
            }
        };

        let snapshot = {
            let mut state = self.write_state();
            *state = Snapshot {
                contacts,
                loading: false,
            };
            state.clone()
        };
        debug!(contacts = snapshot.len(), medium = self.medium(), "contacts loaded");

        let _ = self.inner.events.send(StoreEvent::Loaded(snapshot));
    }

    fn read_state(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("Contact {id}"))
}

fn fresh_id(contacts: &[Contact]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !contacts.iter().any(|c| c.id == id) {
            return id;
        }
    }
}

fn drop_duplicate_ids(contacts: Vec<Contact>) -> Vec<Contact> {
    let mut seen = HashSet::new();
    contacts
        .into_iter()
        .filter(|contact| {
            let first = seen.insert(contact.id);
            if !first {
                warn!(id = %contact.id, "duplicate contact id in storage, keeping the first record");
            }
            first
        })
        .collect()
}
