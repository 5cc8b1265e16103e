use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{Element, Gameweek, PlayerId, Position, TeamId};

/// One pick joined against the bootstrap player table
#[derive(Debug, Clone, Serialize)]
pub struct SquadEntry<'a> {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub position: Position,
    pub team: String,
    pub price: f64,
    pub form: f64,
    #[serde(rename = "selected")]
    pub multiplier: u32,
    #[serde(rename = "captain")]
    pub is_captain: bool,
    #[serde(rename = "vice_captain")]
    pub is_vice_captain: bool,
    #[serde(skip)]
    pub team_id: TeamId,
    /// `None` when the pick has no bootstrap record
    #[serde(skip)]
    pub element: Option<&'a Element>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    pub team_id: u64,
    pub team_name: Option<String>,
    pub manager_name: String,
    pub current_rank: Option<u64>,
    pub total_points: Option<i64>,
    pub current_gameweek: Gameweek,
    pub transfers_remaining: Option<i64>,
    pub transfer_bank: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingFixture {
    pub gameweek: Gameweek,
    pub opponent: String,
    pub home: bool,
    pub difficulty: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionGroup<'a> {
    pub count: usize,
    pub avg_form: f64,
    pub avg_price: f64,
    pub players: Vec<SquadEntry<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SquadHealth<'a> {
    pub total_squad_form: f64,
    pub players_by_position: BTreeMap<Position, PositionGroup<'a>>,
    pub upcoming_fixtures: Vec<UpcomingFixture>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionDepth<'a> {
    pub count: usize,
    pub avg_form: f64,
    pub min_form: f64,
    pub max_form: f64,
    /// Squad players per club, for spotting over-reliance on one team
    pub team_concentration: BTreeMap<String, usize>,
    pub players: Vec<SquadEntry<'a>>,
}

pub type SquadDepth<'a> = BTreeMap<Position, PositionDepth<'a>>;

#[derive(Debug, Clone, Serialize)]
pub struct DetailedAnalysis<'a> {
    pub summary: TeamSummary,
    pub squad: Vec<SquadEntry<'a>>,
    pub health: SquadHealth<'a>,
    pub depth: SquadDepth<'a>,
    pub upcoming_fixtures: Vec<UpcomingFixture>,
}
