use thiserror::Error;

/// Errors surfaced by the shortener operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("short code already exists: {0}")]
    CodeAlreadyExists(String),
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("could not generate a free short code after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}

/// Errors returned by repository backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Conflict(code) => Self::CodeAlreadyExists(code),
        }
    }
}
