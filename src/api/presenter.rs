//! Maps scored candidates onto response records and writes their
//! human-readable justifications.

use std::collections::BTreeMap;

use super::models::{
    DifferentialRecommendation, SmartRecommendationsView, SquadOverview, SquadOverviewPlayer,
    SwapIn, SwapOut, SwapView, SwapsByPosition, TransferAnalysisView, TransferRecommendation,
    UnderperformerView,
};
use crate::domain::Position;
use crate::scoring::{performance_rating, points_per_million, round2};
use crate::services::candidates::{
    Replacement, ScoredDifferential, ScoredTransfer, SwapRecommendation, Underperformer,
};
use crate::services::recommendation::{SmartRecommendations, TransferAnalysis};
use crate::squad::SquadResolver;

/// Builds photo URLs that point back at this service's photo proxy
#[derive(Debug, Clone)]
pub struct PhotoLinker {
    public_base_url: String,
}

impl PhotoLinker {
    pub fn new(public_base_url: &str) -> Self {
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, code: Option<u64>) -> String {
        format!("{}/api/photos/{}.png", self.public_base_url, code.unwrap_or(0))
    }
}

/// Decimal rendering that keeps a trailing `.0` on whole numbers
fn decimal(value: f64) -> String {
    format!("{:?}", value)
}

pub fn transfer_reason(form: f64, ownership_score: f64, fdr: f64) -> String {
    let mut reasons = Vec::new();

    if form > 5.0 {
        reasons.push(format!("Excellent form ({})", decimal(form)));
    } else if form > 3.0 {
        reasons.push(format!("Good form ({})", decimal(form)));
    }

    if ownership_score < 0.1 {
        reasons.push("Very low ownership".to_string());
    } else if ownership_score < 0.3 {
        reasons.push("Low ownership".to_string());
    }

    if fdr < 3.0 {
        reasons.push(format!("Easy fixtures ahead (FDR {:.1})", fdr));
    }

    if reasons.is_empty() {
        return "Solid potential".to_string();
    }
    reasons.join(" | ")
}

pub fn differential_reason(selected_percent: f64, form: f64, fdr: f64) -> String {
    format!(
        "Low ownership ({:.1}%) with form {} and facing FDR {:.1}",
        selected_percent,
        decimal(form),
        fdr
    )
}

pub fn underperformance_reason(form: f64, price: f64, minutes: u32, selected_percent: f64) -> String {
    let mut reasons = Vec::new();

    if minutes == 0 {
        reasons.push("Not playing".to_string());
    } else if minutes < 90 {
        reasons.push(format!("Limited mins ({})", minutes));
    }

    if form < 3.0 {
        reasons.push(format!("Poor form ({})", decimal(form)));
    } else if form < 5.0 {
        reasons.push(format!("Okay form ({})", decimal(form)));
    }

    if price > 8.0 {
        reasons.push(format!("Expensive (£{}m)", decimal(price)));
    }

    if selected_percent > 30.0 {
        reasons.push(format!("High ownership ({:.0}%)", selected_percent));
    }

    if reasons.is_empty() {
        return "Worth considering transfer".to_string();
    }
    reasons.join(" | ")
}

pub fn swap_in_reason(form: f64, improvement: f64) -> String {
    format!("Form {} | Improvement +{:.1}", decimal(form), improvement)
}

#[derive(Debug, Clone)]
pub struct Presenter {
    photos: PhotoLinker,
}

impl Presenter {
    pub fn new(photos: PhotoLinker) -> Self {
        Self { photos }
    }

    pub fn transfer(&self, candidate: &ScoredTransfer) -> TransferRecommendation {
        let element = candidate.element;
        let components = &candidate.scored.components;

        TransferRecommendation {
            player_id: element.id,
            name: element.web_name.clone(),
            team: candidate.team.to_string(),
            position: candidate.position,
            price: element.price(),
            form: element.form,
            selected_by_percent: element.selected_by_percent,
            minutes: element.minutes,
            expected_points_this_week: round2(candidate.expected_points),
            upcoming_fdr: candidate.fdr,
            value_score: round2(components.value_score),
            ownership_score: round2(components.ownership_score),
            fixture_score: round2(components.fixture_score),
            playing_time_score: round2(components.playing_time_score),
            score: round2(candidate.scored.score),
            reason: transfer_reason(element.form, components.ownership_score, candidate.fdr),
            photo_url: self.photos.url(element.photo_code()),
        }
    }

    pub fn differential(&self, candidate: &ScoredDifferential) -> DifferentialRecommendation {
        let element = candidate.element;
        let selected = element.selected_by_percent;

        DifferentialRecommendation {
            player_id: element.id,
            name: element.web_name.clone(),
            team: candidate.team.to_string(),
            position: candidate.position,
            price: element.price(),
            form: element.form,
            selected_by_percent: selected,
            ownership_rank: (selected * 10.0).round_ties_even() / 10.0,
            expected_points: round2(candidate.expected_points),
            upcoming_fdr: candidate.fdr,
            differential_score: round2(candidate.scored.score),
            reason: differential_reason(selected, element.form, candidate.fdr),
            photo_url: self.photos.url(element.photo_code()),
        }
    }

    pub fn underperformer(&self, underperformer: &Underperformer) -> UnderperformerView {
        let entry = &underperformer.entry;
        let element = underperformer.element;

        UnderperformerView {
            player_id: entry.player_id,
            name: entry.name.clone(),
            position: entry.position,
            team: entry.team.clone(),
            price: entry.price,
            form: element.form,
            minutes: element.minutes,
            selected_by_percent: element.selected_by_percent,
            code: element.photo_code(),
            player_score: underperformer.player_score,
            urgency: underperformer.urgency,
            reason: self.underperformer_reason(underperformer),
        }
    }

    pub fn swap(&self, swap: &SwapRecommendation) -> SwapView {
        let outgoing = &swap.swap_out;

        SwapView {
            swap_out: SwapOut {
                name: outgoing.entry.name.clone(),
                price: outgoing.entry.price,
                reason: self.underperformer_reason(outgoing),
                photo_url: self.photos.url(outgoing.element.photo_code()),
            },
            swap_in_options: swap.swap_in.iter().map(|r| self.swap_in(r)).collect(),
        }
    }

    pub fn transfers_by_position(
        &self,
        transfers: &BTreeMap<Position, Vec<ScoredTransfer>>,
    ) -> BTreeMap<Position, Vec<TransferRecommendation>> {
        transfers
            .iter()
            .map(|(&position, group)| (position, group.iter().map(|c| self.transfer(c)).collect()))
            .collect()
    }

    pub fn differentials_by_position(
        &self,
        differentials: &BTreeMap<Position, Vec<ScoredDifferential>>,
    ) -> BTreeMap<Position, Vec<DifferentialRecommendation>> {
        differentials
            .iter()
            .map(|(&position, group)| {
                (position, group.iter().map(|c| self.differential(c)).collect())
            })
            .collect()
    }

    pub fn underperformers(&self, underperformers: &[Underperformer]) -> Vec<UnderperformerView> {
        underperformers.iter().map(|u| self.underperformer(u)).collect()
    }

    pub fn swaps_by_position(
        &self,
        swaps: &BTreeMap<Position, Vec<SwapRecommendation>>,
    ) -> SwapsByPosition {
        swaps
            .iter()
            .map(|(&position, group)| (position, group.iter().map(|s| self.swap(s)).collect()))
            .collect()
    }

    pub fn transfer_analysis<'a>(&self, analysis: TransferAnalysis<'a>) -> TransferAnalysisView<'a> {
        TransferAnalysisView {
            underperformers: self.underperformers(&analysis.underperformers),
            smart_swaps: self.swaps_by_position(&analysis.smart_swaps),
            summary: analysis.summary,
            current_squad: analysis.current_squad,
        }
    }

    pub fn smart_recommendations(&self, all: &SmartRecommendations) -> SmartRecommendationsView {
        SmartRecommendationsView {
            current_gameweek: all.current_gameweek,
            best_transfers_per_position: self.transfers_by_position(&all.best_transfers_per_position),
            high_upside_differentials: self.differentials_by_position(&all.high_upside_differentials),
        }
    }

    /// Per-player performance figures for the whole squad
    pub fn squad_overview(&self, resolver: &SquadResolver) -> SquadOverview {
        let squad: Vec<SquadOverviewPlayer> = resolver
            .current_squad()
            .iter()
            .map(|entry| {
                let element = entry.element.cloned().unwrap_or_default();
                let status = if entry.element.is_some() {
                    element.status.clone()
                } else {
                    "a".to_string()
                };

                SquadOverviewPlayer {
                    player_id: entry.player_id,
                    name: entry.name.clone(),
                    position: entry.position,
                    team: entry.team.clone(),
                    price: entry.price,
                    form: entry.form,
                    total_points: element.total_points,
                    minutes: element.minutes,
                    goals: element.goals_scored,
                    assists: element.assists,
                    clean_sheets: element.clean_sheets,
                    selected_by_percent: element.selected_by_percent,
                    status,
                    is_captain: entry.is_captain,
                    is_vice_captain: entry.is_vice_captain,
                    points_per_million: round2(points_per_million(element.total_points, entry.price)),
                    performance_rating: performance_rating(
                        element.form,
                        element.total_points,
                        entry.price,
                    ),
                    photo_url: self.photos.url(element.photo_code()),
                }
            })
            .collect();

        let total_spent = squad.iter().map(|p| p.price).sum();
        let squad_form = if squad.is_empty() {
            0.0
        } else {
            squad.iter().map(|p| p.form).sum::<f64>() / squad.len() as f64
        };

        SquadOverview {
            squad,
            total_spent,
            bank: resolver.snapshot().bank(),
            squad_form,
        }
    }

    fn swap_in(&self, replacement: &Replacement) -> SwapIn {
        let element = replacement.element;

        SwapIn {
            player_id: element.id,
            name: element.web_name.clone(),
            team: replacement.team.to_string(),
            position: replacement.position,
            price: element.price(),
            form: element.form,
            reason: swap_in_reason(element.form, replacement.improvement),
            photo_url: self.photos.url(element.photo_code()),
        }
    }

    fn underperformer_reason(&self, underperformer: &Underperformer) -> String {
        let element = underperformer.element;
        underperformance_reason(
            element.form,
            underperformer.entry.price,
            element.minutes,
            element.selected_by_percent,
        )
    }
}
