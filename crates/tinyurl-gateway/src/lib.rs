//! HTTP adapter for the tinyurl shortener.
//!
//! Translates HTTP requests into [`tinyurl_core::Shortener`] calls and maps
//! the typed outcomes back to status codes.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
