use super::*;

use std::io::ErrorKind;
use std::path::PathBuf;

/// Stores the contact list as a JSON array in `<data_dir>/contacts.json`.
pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            medium: "json".to_string(),
            path: data_dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl ContactStorage for JsonStorage {
    async fn read_all(&self) -> Result<Option<Vec<Contact>>, AppError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }

        Ok(Some(serde_json::from_str(&data)?))
    }

    async fn write_all(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path).await?;

        let json_contacts = serde_json::to_string_pretty(contacts)?;

        // Write beside the target then swap it in, so readers only ever see
        // the previous list or the new one.
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, json_contacts.as_bytes()).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
