use super::*;

use serde::Serialize;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::warn;

/// Read-only view of the store handed to consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub contacts: Vec<Contact>,
    pub loading: bool,
}

impl Snapshot {
    pub fn get(&self, id: &Uuid) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added(Uuid),
    Updated(Uuid),
    Deleted(Uuid),
    FavoriteToggled(Uuid),
}

impl Change {
    pub fn id(&self) -> Uuid {
        match self {
            Change::Added(id)
            | Change::Updated(id)
            | Change::Deleted(id)
            | Change::FavoriteToggled(id) => *id,
        }
    }
}

/// Emitted once per committed state transition, always after the write to
/// storage has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Loaded(Snapshot),
    Changed { change: Change, snapshot: Snapshot },
}

impl StoreEvent {
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            StoreEvent::Loaded(snapshot) => snapshot,
            StoreEvent::Changed { snapshot, .. } => snapshot,
        }
    }
}

/// A consumer's handle on store events. Dropping it unsubscribes.
///
/// Every event carries the full snapshot, so a consumer that falls behind
/// skips to the newest events instead of failing.
pub struct Subscription {
    rx: broadcast::Receiver<StoreEvent>,
}

impl Subscription {
    pub(crate) fn new(rx: broadcast::Receiver<StoreEvent>) -> Self {
        Self { rx }
    }

    /// Waits for the next event. `None` once the store is gone.
    pub async fn recv(&mut self) -> Option<StoreEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "store subscriber lagged, skipping to newer events");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Returns an already delivered event without waiting.
    pub fn try_recv(&mut self) -> Option<StoreEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "store subscriber lagged, skipping to newer events");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    pub fn unsubscribe(self) {}
}
