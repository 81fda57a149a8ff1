pub mod contact;
pub mod events;
pub mod store;

pub use crate::errors::AppError;
pub use uuid::Uuid;

pub use contact::{Contact, ContactInput, ContactPatch};
pub use events::{Change, Snapshot, StoreEvent, Subscription};
pub use store::ContactStore;
