//! Core types and traits for the tinyurl shortener.
//!
//! This crate holds the domain model shared by the storage backend, the
//! shortener service and the HTTP gateway. It performs no I/O and no logging.

pub mod error;
pub mod mapping;
pub mod repository;
pub mod shortcode;
pub mod shortener;
pub mod validation;

pub use error::{ShortenerError, StorageError};
pub use mapping::{Snapshot, UrlMapping};
pub use repository::{ReadRepository, Repository};
pub use shortcode::ShortCode;
pub use shortener::{ShortenParams, Shortener};
pub use validation::{Validate, Violation};
