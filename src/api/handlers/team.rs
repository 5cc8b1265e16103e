use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{ApiResult, AppState};
use crate::api::models::{
    CurrentGameweekResponse, SmartSwapsResponse, SquadResponse, UnderperformersResponse,
};
use crate::services::recommendation::RecommendationService;
use crate::squad::SquadResolver;

pub async fn get_current_gameweek(State(state): State<Arc<AppState>>) -> ApiResult {
    let current_gameweek = state.client.get_current_gameweek().await?;
    Ok(Json(CurrentGameweekResponse { current_gameweek }).into_response())
}

pub async fn get_summary(State(state): State<Arc<AppState>>, Path(team_id): Path<u64>) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let resolver = SquadResolver::new(&snapshot, &state.config.scoring);
    Ok(Json(resolver.summary()).into_response())
}

pub async fn get_squad(State(state): State<Arc<AppState>>, Path(team_id): Path<u64>) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let resolver = SquadResolver::new(&snapshot, &state.config.scoring);
    let squad = resolver.current_squad().to_vec();
    Ok(Json(SquadResponse { squad }).into_response())
}

pub async fn get_analysis(State(state): State<Arc<AppState>>, Path(team_id): Path<u64>) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let resolver = SquadResolver::new(&snapshot, &state.config.scoring);
    Ok(Json(resolver.health()).into_response())
}

pub async fn get_depth(State(state): State<Arc<AppState>>, Path(team_id): Path<u64>) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let resolver = SquadResolver::new(&snapshot, &state.config.scoring);
    Ok(Json(resolver.depth()).into_response())
}

pub async fn get_detailed_analysis(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u64>,
) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let resolver = SquadResolver::new(&snapshot, &state.config.scoring);
    Ok(Json(resolver.detailed_analysis()).into_response())
}

pub async fn get_transfer_analysis(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u64>,
) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let service = RecommendationService::new(&snapshot, &state.config.scoring);
    let view = state.presenter.transfer_analysis(service.transfer_analysis());
    Ok(Json(view).into_response())
}

pub async fn get_underperformers(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u64>,
) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let service = RecommendationService::new(&snapshot, &state.config.scoring);
    let underperformers = state.presenter.underperformers(&service.underperformers());
    Ok(Json(UnderperformersResponse { underperformers }).into_response())
}

pub async fn get_smart_swaps(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u64>,
) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let service = RecommendationService::new(&snapshot, &state.config.scoring);
    let smart_swaps = state.presenter.swaps_by_position(&service.smart_swaps());
    Ok(Json(SmartSwapsResponse { smart_swaps }).into_response())
}

pub async fn get_squad_overview(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u64>,
) -> ApiResult {
    let snapshot = state.load_snapshot(team_id).await?;
    let resolver = SquadResolver::new(&snapshot, &state.config.scoring);
    Ok(Json(state.presenter.squad_overview(&resolver)).into_response())
}
