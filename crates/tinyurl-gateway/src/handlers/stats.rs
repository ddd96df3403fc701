use crate::error::Result;
use crate::model::StatsResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let snapshot = state.shortener().statistics().await?;
    Ok(Json(StatsResponse::from_snapshot(snapshot, state.base_url())))
}
