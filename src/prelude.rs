pub use crate::cli::{command, run_app};
pub use crate::config::StoreConfig;
pub use crate::domain::{
    Change, ContactStore, Snapshot, StoreEvent, Subscription,
    contact::{self, Contact, ContactInput, ContactPatch},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStorage, JsonStorage, MemStorage, StorageMediums, parse_storage_type,
};
pub use uuid::{self, Uuid};
