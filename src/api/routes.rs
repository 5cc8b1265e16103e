use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::refresh_bootstrap,
    photos::get_photo,
    recommendations::{get_all, get_differentials, get_transfers},
    team::{
        get_analysis, get_current_gameweek, get_depth, get_detailed_analysis, get_smart_swaps,
        get_squad, get_squad_overview, get_summary, get_transfer_analysis, get_underperformers,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/team/current-gameweek", get(get_current_gameweek))
        .route("/api/team/:id/summary", get(get_summary))
        .route("/api/team/:id/squad", get(get_squad))
        .route("/api/team/:id/analysis", get(get_analysis))
        .route("/api/team/:id/depth", get(get_depth))
        .route("/api/team/:id/detailed-analysis", get(get_detailed_analysis))
        .route("/api/team/:id/transfer-analysis", get(get_transfer_analysis))
        .route("/api/team/:id/underperformers", get(get_underperformers))
        .route("/api/team/:id/smart-swaps", get(get_smart_swaps))
        .route("/api/team/:id/squad-overview", get(get_squad_overview))
        .route("/api/recommendations/:id/transfers", get(get_transfers))
        .route("/api/recommendations/:id/differentials", get(get_differentials))
        .route("/api/recommendations/:id/all", get(get_all))
        .route("/api/photos/:file", get(get_photo))
        .route("/api/admin/refresh-bootstrap", post(refresh_bootstrap))
        .with_state(state)
}
