use crate::domain::{Element, Position};
use crate::scoring::{DifferentialScore, TransferScore};
use crate::squad::SquadEntry;

/// Non-squad player scored as a transfer target
#[derive(Debug, Clone)]
pub struct ScoredTransfer<'a> {
    pub element: &'a Element,
    pub position: Position,
    pub team: &'a str,
    pub fdr: f64,
    pub expected_points: f64,
    pub scored: TransferScore,
}

/// Non-squad player scored for contrarian upside
#[derive(Debug, Clone)]
pub struct ScoredDifferential<'a> {
    pub element: &'a Element,
    pub position: Position,
    pub team: &'a str,
    pub fdr: f64,
    pub expected_points: f64,
    pub scored: DifferentialScore,
}

/// Squad player whose urgency crossed the threshold.
/// `player_score` and `urgency` are already rounded to 2 decimals.
#[derive(Debug, Clone)]
pub struct Underperformer<'a> {
    pub entry: SquadEntry<'a>,
    pub element: &'a Element,
    pub fdr: f64,
    pub player_score: f64,
    pub urgency: f64,
}

/// Candidate to bring in for an underperformer; scores rounded to 2 decimals
#[derive(Debug, Clone)]
pub struct Replacement<'a> {
    pub element: &'a Element,
    pub position: Position,
    pub team: &'a str,
    pub fdr: f64,
    pub replacement_score: f64,
    pub improvement: f64,
    pub price_diff: f64,
}

#[derive(Debug, Clone)]
pub struct SwapRecommendation<'a> {
    pub swap_out: Underperformer<'a>,
    /// Outgoing price plus banked funds
    pub budget: f64,
    pub swap_in: Vec<Replacement<'a>>,
}
