pub mod memory;
pub mod stores;

use crate::config::StoreConfig;
use crate::prelude::{AppError, Contact};
use async_trait::async_trait;
use std::path::Path;

pub use memory::MemStorage;
pub use stores::JsonStorage;

/// Well-known key the whole contact list is stored under.
pub const STORAGE_KEY: &str = "contacts";

/// Local durable storage for the contact list.
///
/// The list is always read and written whole; implementations must not leave
/// a partially written list behind.
#[async_trait]
pub trait ContactStorage: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    async fn read_all(&self) -> Result<Option<Vec<Contact>>, AppError>;

    async fn write_all(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Config(format!(
                "'{str}' is not a recognized storage medium (json, mem)"
            ))),
        }
    }
}

pub fn parse_storage_type(config: &StoreConfig) -> Box<dyn ContactStorage> {
    match config.medium {
        StorageMediums::Json => Box::new(JsonStorage::new(&config.data_dir)),
        StorageMediums::Mem => Box::new(MemStorage::new()),
    }
}

pub async fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !tokio::fs::try_exists(parent).await?
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}
