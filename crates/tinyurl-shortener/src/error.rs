use thiserror::Error;

/// Errors returned when configuring a [`ShortenerService`](crate::ShortenerService).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("max_attempts must be at least 1")]
    ZeroMaxAttempts,
}
