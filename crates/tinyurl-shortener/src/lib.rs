//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which combines a repository and
//! a code generator into the create / resolve / delete / statistics
//! operations. Core types are re-exported from `tinyurl_core`.

pub mod error;
pub mod service;

pub use error::Error;
pub use service::{ShortenerService, ShortenerSettings, DEFAULT_MAX_ATTEMPTS};
pub use tinyurl_core::{ShortCode, ShortenParams, Shortener, ShortenerError, Snapshot, UrlMapping};
