use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{Gameweek, PlayerId, Position};
use crate::scoring::PerformanceRating;
use crate::squad::{SquadEntry, TeamSummary};

#[derive(Debug, Serialize)]
pub struct TransferRecommendation {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub team: String,
    pub position: Position,
    pub price: f64,
    pub form: f64,
    pub selected_by_percent: f64,
    pub minutes: u32,
    pub expected_points_this_week: f64,
    pub upcoming_fdr: f64,
    pub value_score: f64,
    pub ownership_score: f64,
    pub fixture_score: f64,
    pub playing_time_score: f64,
    pub score: f64,
    pub reason: String,
    pub photo_url: String,
}

#[derive(Debug, Serialize)]
pub struct DifferentialRecommendation {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub team: String,
    pub position: Position,
    pub price: f64,
    pub form: f64,
    pub selected_by_percent: f64,
    /// Ownership rounded to one decimal
    pub ownership_rank: f64,
    pub expected_points: f64,
    pub upcoming_fdr: f64,
    pub differential_score: f64,
    pub reason: String,
    pub photo_url: String,
}

#[derive(Debug, Serialize)]
pub struct UnderperformerView {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub position: Position,
    pub team: String,
    pub price: f64,
    pub form: f64,
    pub minutes: u32,
    pub selected_by_percent: f64,
    pub code: Option<u64>,
    pub player_score: f64,
    pub urgency: f64,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct SwapOut {
    pub name: Option<String>,
    pub price: f64,
    pub reason: String,
    pub photo_url: String,
}

#[derive(Debug, Serialize)]
pub struct SwapIn {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub team: String,
    pub position: Position,
    pub price: f64,
    pub form: f64,
    pub reason: String,
    pub photo_url: String,
}

#[derive(Debug, Serialize)]
pub struct SwapView {
    pub swap_out: SwapOut,
    pub swap_in_options: Vec<SwapIn>,
}

pub type SwapsByPosition = BTreeMap<Position, Vec<SwapView>>;

#[derive(Debug, Serialize)]
pub struct SquadOverviewPlayer {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub position: Position,
    pub team: String,
    pub price: f64,
    pub form: f64,
    pub total_points: i64,
    pub minutes: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub selected_by_percent: f64,
    pub status: String,
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub points_per_million: f64,
    pub performance_rating: PerformanceRating,
    pub photo_url: String,
}

#[derive(Debug, Serialize)]
pub struct SquadOverview {
    pub squad: Vec<SquadOverviewPlayer>,
    pub total_spent: f64,
    pub bank: f64,
    pub squad_form: f64,
}

#[derive(Debug, Serialize)]
pub struct TransferAnalysisView<'a> {
    pub summary: TeamSummary,
    pub current_squad: Vec<SquadEntry<'a>>,
    pub underperformers: Vec<UnderperformerView>,
    pub smart_swaps: SwapsByPosition,
}

#[derive(Debug, Serialize)]
pub struct SmartRecommendationsView {
    pub current_gameweek: Gameweek,
    pub best_transfers_per_position: BTreeMap<Position, Vec<TransferRecommendation>>,
    pub high_upside_differentials: BTreeMap<Position, Vec<DifferentialRecommendation>>,
}

// --- Response envelopes ---

#[derive(Serialize)]
pub struct CurrentGameweekResponse {
    pub current_gameweek: Gameweek,
}

#[derive(Serialize)]
pub struct SquadResponse<'a> {
    pub squad: Vec<SquadEntry<'a>>,
}

#[derive(Serialize)]
pub struct UnderperformersResponse {
    pub underperformers: Vec<UnderperformerView>,
}

#[derive(Serialize)]
pub struct SmartSwapsResponse {
    pub smart_swaps: SwapsByPosition,
}

#[derive(Serialize)]
pub struct TransfersResponse {
    pub team_id: u64,
    pub recommendations: BTreeMap<Position, Vec<TransferRecommendation>>,
}

#[derive(Serialize)]
pub struct DifferentialsResponse {
    pub team_id: u64,
    pub differentials: BTreeMap<Position, Vec<DifferentialRecommendation>>,
}

#[derive(Serialize)]
pub struct AllRecommendationsResponse {
    pub team_id: u64,
    pub data: SmartRecommendationsView,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub players: usize,
    pub teams: usize,
    pub current_gameweek: Option<Gameweek>,
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
