use crate::errors::AppError;
use regex::Regex;
use std::sync::LazyLock;

static NON_DIALABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d+*#]").expect("non-dialable pattern compiles"));

/// "First Last", skipping blank parts.
pub fn format_contact_name(first_name: &str, last_name: &str) -> String {
    [first_name.trim(), last_name.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Strips everything a dialer cannot use (spaces, dashes, brackets, dots).
/// A leading '+' country code is kept.
pub fn dialable_phone(phone: &str) -> Result<String, AppError> {
    let digits = NON_DIALABLE.replace_all(phone.trim(), "").to_string();

    if !digits.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Phone number has no dialable digits".to_string(),
        ));
    }
    Ok(digits)
}
