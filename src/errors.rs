use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field was missing or blank.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0} Not found")]
    NotFound(String),

    /// Durable storage could not be read or written.
    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid link: {0}")]
    Url(#[from] url::ParseError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(format!("I/O error while accessing contact storage: {err}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Persistence(format!("contact data could not be (de)serialized: {err}"))
    }
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::Persistence(_))
    }
}
