use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use log::info;
use std::sync::Arc;

use super::{ApiResult, AppState};
use crate::api::models::RefreshResponse;

/// Drop the cached bootstrap and fetch a fresh copy right away
pub async fn refresh_bootstrap(State(state): State<Arc<AppState>>) -> ApiResult {
    info!("Admin triggered bootstrap refresh");
    let bootstrap = state.client.refresh_bootstrap().await?;
    let fetched_at = state.client.cache().fetched_at().await;

    Ok(Json(RefreshResponse {
        players: bootstrap.elements.len(),
        teams: bootstrap.teams.len(),
        current_gameweek: bootstrap.current_gameweek(),
        fetched_at,
    })
    .into_response())
}
