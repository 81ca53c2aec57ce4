use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("no contact found for id {id}")]
    NotFound { id: Uuid },

    #[error("contacts file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("contacts file version {0} is newer than this build understands")]
    UnsupportedVersion(u32),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}
