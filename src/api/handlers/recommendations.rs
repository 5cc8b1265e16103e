use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{ApiResult, AppState};
use crate::api::models::{AllRecommendationsResponse, DifferentialsResponse, TransfersResponse};
use crate::services::recommendation::RecommendationService;

pub async fn get_transfers(State(state): State<Arc<AppState>>, Path(team_id): Path<u64>) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let service = RecommendationService::new(&snapshot, &state.config.scoring);
    let recommendations = state
        .presenter
        .transfers_by_position(&service.best_transfers_per_position());

    Ok(Json(TransfersResponse {
        team_id,
        recommendations,
    })
    .into_response())
}

pub async fn get_differentials(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u64>,
) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let service = RecommendationService::new(&snapshot, &state.config.scoring);
    let count = state.config.scoring.top_per_position;
    let differentials = state
        .presenter
        .differentials_by_position(&service.high_upside_differentials(count));

    Ok(Json(DifferentialsResponse {
        team_id,
        differentials,
    })
    .into_response())
}

pub async fn get_all(State(state): State<Arc<AppState>>, Path(team_id): Path<u64>) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let service = RecommendationService::new(&snapshot, &state.config.scoring);
    let data = state
        .presenter
        .smart_recommendations(&service.smart_recommendations());

    Ok(Json(AllRecommendationsResponse { team_id, data }).into_response())
}
