use crate::domain::contact::{ContactInput, ContactPatch};
use crate::errors::AppError;

/// Fields that must be non-empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl RequiredField {
    pub fn required_message(&self) -> &'static str {
        match self {
            RequiredField::FirstName => "First name is required",
            RequiredField::LastName => "Last name is required",
            RequiredField::Email => "Email is required",
            RequiredField::Phone => "Phone number is required",
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks a creation payload. Values are only inspected, never rewritten.
pub fn validate_input(input: &ContactInput) -> Result<(), AppError> {
    let missing: Vec<RequiredField> = [
        (RequiredField::FirstName, &input.first_name),
        (RequiredField::LastName, &input.last_name),
        (RequiredField::Email, &input.email),
        (RequiredField::Phone, &input.phone),
    ]
    .into_iter()
    .filter(|(_, value)| is_blank(value))
    .map(|(field, _)| field)
    .collect();

    report(&missing)
}

/// Checks only the required fields a patch actually touches.
pub fn validate_patch(patch: &ContactPatch) -> Result<(), AppError> {
    let missing: Vec<RequiredField> = [
        (RequiredField::FirstName, &patch.first_name),
        (RequiredField::LastName, &patch.last_name),
        (RequiredField::Email, &patch.email),
        (RequiredField::Phone, &patch.phone),
    ]
    .into_iter()
    .filter(|(_, value)| value.as_deref().is_some_and(is_blank))
    .map(|(field, _)| field)
    .collect();

    report(&missing)
}

fn report(missing: &[RequiredField]) -> Result<(), AppError> {
    if missing.is_empty() {
        return Ok(());
    }
    let message = missing
        .iter()
        .map(RequiredField::required_message)
        .collect::<Vec<&str>>()
        .join("; ");
    Err(AppError::Validation(message))
}
