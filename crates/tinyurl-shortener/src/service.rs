use crate::error::Error;
use async_trait::async_trait;
use std::sync::Arc;
use tinyurl_core::validation::{validate_code, Validate};
use tinyurl_core::{
    Repository, ShortCode, ShortenParams, Shortener, ShortenerError, Snapshot, StorageError,
    UrlMapping,
};
use tinyurl_generator::Generator;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Tunables for [`ShortenerService`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ShortenerSettings {
    /// How many generated candidates may collide before giving up.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - Short code generation (auto-generated or custom)
/// - Bounded retry when a generated code collides
/// - Defensive input validation
/// - Visit counting on resolve
///
/// Construct one per process and share it by cloning; clones use the same table.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            settings: self.settings,
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(repository: R, generator: G) -> Self {
        Self::from_parts(repository, generator, ShortenerSettings::default())
    }

    /// Creates a `ShortenerService` with explicit settings.
    ///
    /// A zero `max_attempts` is rejected: generated creates could never succeed.
    pub fn with_settings(
        repository: R,
        generator: G,
        settings: ShortenerSettings,
    ) -> Result<Self, Error> {
        if settings.max_attempts == 0 {
            return Err(Error::ZeroMaxAttempts);
        }
        Ok(Self::from_parts(repository, generator, settings))
    }

    fn from_parts(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            settings,
        }
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Inserts under a caller-chosen code. A taken code is a hard failure.
    async fn insert_custom(
        &self,
        code: &str,
        long_url: String,
    ) -> Result<ShortCode, ShortenerError> {
        let short_code = ShortCode::new(code)?;
        self.repository
            .insert(UrlMapping::new(short_code.clone(), long_url))
            .await?;

        debug!(code = %short_code, "stored mapping under custom code");
        Ok(short_code)
    }

    /// Inserts under generated codes until one is free or the budget runs out.
    async fn insert_generated(&self, long_url: String) -> Result<ShortCode, ShortenerError> {
        for attempt in 1..=self.settings.max_attempts {
            let short_code: ShortCode = self.generator.generate().into();
            let mapping = UrlMapping::new(short_code.clone(), long_url.clone());

            match self.repository.insert(mapping).await {
                Ok(()) => {
                    debug!(code = %short_code, attempt, "stored mapping under generated code");
                    return Ok(short_code);
                }
                Err(StorageError::Conflict(_)) => {
                    trace!(code = %short_code, attempt, "generated code collided, retrying");
                }
            }
        }

        debug!(
            attempts = self.settings.max_attempts,
            "short code generation exhausted"
        );
        Err(ShortenerError::GenerationExhausted {
            attempts: self.settings.max_attempts,
        })
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, params: ShortenParams) -> Result<ShortCode, ShortenerError> {
        params.ensure_valid()?;

        match params.desired_code().map(str::to_owned) {
            Some(code) => self.insert_custom(&code, params.long_url).await,
            None => self.insert_generated(params.long_url).await,
        }
    }

    async fn resolve(&self, code: &str) -> Result<String, ShortenerError> {
        if let Some(violation) = validate_code("short_code", code) {
            return Err(violation.into());
        }

        match self.repository.record_visit(code).await? {
            Some(mapping) => {
                trace!(code, visits = mapping.visit_count, "resolved short code");
                Ok(mapping.long_url)
            }
            None => {
                trace!(code, "short code not found");
                Err(ShortenerError::NotFound(code.to_string()))
            }
        }
    }

    async fn lookup(&self, code: &str) -> Result<UrlMapping, ShortenerError> {
        if let Some(violation) = validate_code("short_code", code) {
            return Err(violation.into());
        }

        self.repository
            .get(code)
            .await?
            .ok_or_else(|| ShortenerError::NotFound(code.to_string()))
    }

    async fn delete(&self, code: &str) -> Result<bool, ShortenerError> {
        let deleted = self.repository.delete(code).await?;
        debug!(code, deleted, "delete requested");
        Ok(deleted)
    }

    async fn statistics(&self) -> Result<Snapshot, ShortenerError> {
        Ok(self.repository.snapshot().await?)
    }
}
