use crate::errors::AppError;
use crate::storage::StorageMediums;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./.instance";
pub const DEFAULT_STORAGE_CHOICE: &str = "json";

/// Where and how the contact list is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub medium: StorageMediums,
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(medium: StorageMediums, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            medium,
            data_dir: data_dir.into(),
        }
    }

    /// Builds a config from raw settings as given on the command line or in
    /// the environment (`STORAGE_CHOICE`, `ROLODEX_DATA_DIR`).
    pub fn parse(storage_choice: &str, data_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let data_dir = data_dir.into();
        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("data directory must not be empty".to_string()));
        }
        Ok(Self::new(StorageMediums::from(storage_choice)?, data_dir))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(StorageMediums::Json, DEFAULT_DATA_DIR)
    }
}
