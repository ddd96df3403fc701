use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_url_handler, delete_url_handler, get_url_handler, health_handler, redirect_handler,
    stats_handler,
};
use crate::state::AppState;

/// Codes that would be shadowed by, or break, the gateway's own routes.
pub const RESERVED_CODES: &[&str] = &["health", "v1", ".", ".."];

pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/v1/urls", post(create_url_handler))
            .route(
                "/v1/urls/{short_code}",
                get(get_url_handler).delete(delete_url_handler),
            )
            .route("/v1/stats", get(stats_handler))
            .route("/{short_code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
