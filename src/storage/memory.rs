use super::*;

use std::sync::{Mutex, PoisonError};

/// Keeps the serialized list in process memory. Nothing survives the process.
pub struct MemStorage {
    pub medium: String,
    data: Mutex<Option<String>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            data: Mutex::new(None),
        }
    }

    /// Starts with `contacts` already stored, as if written by an earlier run.
    pub fn with_contacts(contacts: &[Contact]) -> Result<Self, AppError> {
        let storage = Self::new();
        *storage.lock() = Some(serde_json::to_string(contacts)?);
        Ok(storage)
    }

    /// The serialized list exactly as last written.
    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStorage for MemStorage {
    async fn read_all(&self) -> Result<Option<Vec<Contact>>, AppError> {
        let data = self.raw();
        match data {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    async fn write_all(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let data = serde_json::to_string(contacts)?;
        *self.lock() = Some(data);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
