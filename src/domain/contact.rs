use super::*;
use crate::helper;
use serde::{Deserialize, Serialize};
use url::Url;

/// A person record as held by the store and written to storage.
///
/// Field names are persisted in camelCase (`firstName`, `lastName`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub phone: String,
    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub favorite: bool,
}

/// Payload for creating a contact. Everything but `id` and `favorite`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

/// Partial update over the fixed contact schema.
///
/// `Some` replaces the stored value, `None` keeps it. The id is not part of
/// the schema and cannot be patched; unknown fields are rejected when a patch
/// is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl ContactInput {
    pub fn new(first_name: &str, last_name: &str, email: &str, phone: &str) -> Self {
        ContactInput {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = company.to_string();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        self == &ContactPatch::default()
    }
}

impl Contact {
    /// Builds a fresh, non-favorite contact from a creation payload.
    pub fn new(id: Uuid, input: ContactInput) -> Self {
        Contact {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            company: input.company,
            phone: input.phone,
            notes: input.notes,
            favorite: false,
        }
    }

    /// Merges `patch` onto this record. The id never changes.
    pub fn apply(&mut self, patch: ContactPatch) {
        let ContactPatch {
            first_name,
            last_name,
            email,
            company,
            phone,
            notes,
            favorite,
        } = patch;

        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(company) = company {
            self.company = company;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
        if let Some(favorite) = favorite {
            self.favorite = favorite;
        }
    }

    pub fn full_name(&self) -> String {
        helper::format_contact_name(&self.first_name, &self.last_name)
    }

    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// `tel:` link for placing a call.
    pub fn call_uri(&self) -> Result<Url, AppError> {
        Ok(Url::parse(&format!(
            "tel:{}",
            helper::dialable_phone(&self.phone)?
        ))?)
    }

    /// `sms:` link for sending a text message.
    pub fn sms_uri(&self) -> Result<Url, AppError> {
        Ok(Url::parse(&format!(
            "sms:{}",
            helper::dialable_phone(&self.phone)?
        ))?)
    }

    pub fn mail_uri(&self) -> Result<Url, AppError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::Validation("No email provided".to_string()));
        }
        Ok(Url::parse(&format!("mailto:{email}"))?)
    }
}
