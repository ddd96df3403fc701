use crate::mapping::{Snapshot, UrlMapping};
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone, Default)]
pub struct ShortenParams {
    /// The absolute URL to be shortened.
    pub long_url: String,
    /// Optional caller-chosen short code. `None` or an empty string asks
    /// for a generated one.
    pub custom_code: Option<String>,
}

impl ShortenParams {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            custom_code: None,
        }
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }

    /// Returns the custom code if one was actually supplied.
    pub fn desired_code(&self) -> Option<&str> {
        self.custom_code.as_deref().filter(|code| !code.is_empty())
    }
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates a shortened URL and returns the caller-chosen or generated short code.
    async fn shorten(&self, params: ShortenParams) -> Result<ShortCode>;

    /// Resolves a short code to its long URL, counting the visit.
    async fn resolve(&self, code: &str) -> Result<String>;

    /// Returns a copy of a single mapping without counting a visit.
    async fn lookup(&self, code: &str) -> Result<UrlMapping>;

    /// Deletes a shortened URL by its short code.
    /// Returns `true` if a mapping was removed; a missing code is not an error.
    async fn delete(&self, code: &str) -> Result<bool>;

    /// Returns a point-in-time copy of all mappings and their visit counts.
    async fn statistics(&self) -> Result<Snapshot>;
}
