use log::debug;
use std::collections::{BTreeMap, HashSet};

use super::candidates::{
    Replacement, ScoredDifferential, ScoredTransfer, SwapRecommendation, Underperformer,
};
use crate::config::ScoringSettings;
use crate::domain::{Element, PlayerId, Position, Snapshot};
use crate::scoring::{
    self, differential_score, expected_points, is_underperformer, player_score,
    replacement_score, round2, transfer_score, FixtureOutlook, PlayerSignals,
};
use crate::squad::{SquadEntry, SquadResolver, TeamSummary};

pub struct TransferAnalysis<'a> {
    pub summary: TeamSummary,
    pub current_squad: Vec<SquadEntry<'a>>,
    pub underperformers: Vec<Underperformer<'a>>,
    pub smart_swaps: BTreeMap<Position, Vec<SwapRecommendation<'a>>>,
}

pub struct SmartRecommendations<'a> {
    pub current_gameweek: u32,
    pub best_transfers_per_position: BTreeMap<Position, Vec<ScoredTransfer<'a>>>,
    pub high_upside_differentials: BTreeMap<Position, Vec<ScoredDifferential<'a>>>,
}

/// Runs the scoring formulas over candidate pools and ranks the results
pub struct RecommendationService<'a> {
    resolver: SquadResolver<'a>,
    settings: &'a ScoringSettings,
    outlook: FixtureOutlook<'a>,
    squad_ids: HashSet<PlayerId>,
}

impl<'a> RecommendationService<'a> {
    pub fn new(snapshot: &'a Snapshot, settings: &'a ScoringSettings) -> Self {
        let resolver = SquadResolver::new(snapshot, settings);
        let outlook = FixtureOutlook::new(
            &snapshot.fixtures,
            snapshot.current_gameweek,
            settings.fdr_lookahead_weeks,
        );
        let squad_ids = resolver.squad_ids();

        Self {
            resolver,
            settings,
            outlook,
            squad_ids,
        }
    }

    pub fn resolver(&self) -> &SquadResolver<'a> {
        &self.resolver
    }

    /// Top transfer targets for every position
    pub fn best_transfers_per_position(&self) -> BTreeMap<Position, Vec<ScoredTransfer<'a>>> {
        Position::ALL
            .iter()
            .map(|&position| {
                let mut scored: Vec<ScoredTransfer<'a>> = self
                    .available_players()
                    .filter(|e| e.position() == position)
                    .map(|e| self.score_transfer(e))
                    .collect();

                sort_desc_by(&mut scored, |s| round2(s.scored.score));
                scored.truncate(self.settings.top_per_position);
                (position, scored)
            })
            .collect()
    }

    /// Best low-ownership picks, `count` per position
    pub fn high_upside_differentials(
        &self,
        count: usize,
    ) -> BTreeMap<Position, Vec<ScoredDifferential<'a>>> {
        let mut by_position: BTreeMap<Position, Vec<ScoredDifferential<'a>>> =
            Position::ALL.iter().map(|&p| (p, Vec::new())).collect();

        for element in self.available_players() {
            let scored = self.score_differential(element);
            if let Some(group) = by_position.get_mut(&scored.position) {
                group.push(scored);
            }
        }

        for group in by_position.values_mut() {
            sort_desc_by(group, |d| round2(d.scored.score));
            group.truncate(count);
        }
        by_position
    }

    /// Squad players worth replacing, most urgent first
    pub fn underperformers(&self) -> Vec<Underperformer<'a>> {
        let mut underperformers: Vec<Underperformer<'a>> = self
            .resolver
            .current_squad()
            .iter()
            .filter_map(|entry| {
                let element = entry.element?;
                let urgency = scoring::urgency(element.form, entry.price, element.minutes);
                if !is_underperformer(urgency) {
                    return None;
                }

                let fdr = self.outlook.fdr(element.team);
                let signals = PlayerSignals::from_element(element, fdr);
                Some(Underperformer {
                    entry: entry.clone(),
                    element,
                    fdr,
                    player_score: round2(player_score(&signals)),
                    urgency: round2(urgency),
                })
            })
            .collect();

        sort_desc_by(&mut underperformers, |u| u.urgency);
        underperformers
    }

    /// Swap-out / swap-in pairs per position, ordered by urgency
    pub fn smart_swaps(&self) -> BTreeMap<Position, Vec<SwapRecommendation<'a>>> {
        let mut swaps: BTreeMap<Position, Vec<SwapRecommendation<'a>>> =
            Position::ALL.iter().map(|&p| (p, Vec::new())).collect();
        let bank_tenths = self.resolver.snapshot().entry.last_deadline_bank;

        for underperformer in self.underperformers() {
            let position = underperformer.entry.position;
            let Some(position_swaps) = swaps.get_mut(&position) else {
                debug!("Skipping swap for player {} without a position", underperformer.entry.player_id);
                continue;
            };
            if position_swaps.len() >= self.settings.max_swaps_per_position {
                continue;
            }

            let budget_tenths = underperformer.element.now_cost.saturating_add(bank_tenths);
            let replacements = self.find_replacements(
                position,
                budget_tenths,
                underperformer.entry.price,
                underperformer.player_score,
            );
            if replacements.is_empty() {
                continue;
            }

            position_swaps.push(SwapRecommendation {
                budget: budget_tenths as f64 / 10.0,
                swap_out: underperformer,
                swap_in: replacements,
            });
        }

        swaps
    }

    pub fn transfer_analysis(&self) -> TransferAnalysis<'a> {
        TransferAnalysis {
            summary: self.resolver.summary(),
            current_squad: self.resolver.current_squad().to_vec(),
            underperformers: self.underperformers(),
            smart_swaps: self.smart_swaps(),
        }
    }

    pub fn smart_recommendations(&self) -> SmartRecommendations<'a> {
        SmartRecommendations {
            current_gameweek: self.resolver.snapshot().current_gameweek,
            best_transfers_per_position: self.best_transfers_per_position(),
            high_upside_differentials: self
                .high_upside_differentials(self.settings.top_per_position),
        }
    }

    /// Same-position active players within budget, best improvement first
    fn find_replacements(
        &self,
        position: Position,
        budget_tenths: i64,
        outgoing_price: f64,
        outgoing_score: f64,
    ) -> Vec<Replacement<'a>> {
        let mut candidates: Vec<Replacement<'a>> = self
            .available_players()
            .filter(|e| e.position() == position && e.now_cost <= budget_tenths)
            .map(|element| {
                let fdr = self.outlook.fdr(element.team);
                let signals = PlayerSignals::from_element(element, fdr);
                let score = replacement_score(&signals);

                Replacement {
                    element,
                    position,
                    team: self.resolver.lookup().team_name(element.team),
                    fdr,
                    replacement_score: round2(score),
                    improvement: round2(scoring::improvement(score, outgoing_score)),
                    price_diff: round2(element.price() - outgoing_price),
                }
            })
            .collect();

        sort_desc_by(&mut candidates, |c| c.improvement);
        candidates.truncate(self.settings.replacements_per_swap);
        candidates
    }

    fn score_transfer(&self, element: &'a Element) -> ScoredTransfer<'a> {
        let fdr = self.outlook.fdr(element.team);
        let signals = PlayerSignals::from_element(element, fdr);

        ScoredTransfer {
            element,
            position: element.position(),
            team: self.resolver.lookup().team_name(element.team),
            fdr,
            expected_points: expected_points(element.form, element.position()),
            scored: transfer_score(&signals),
        }
    }

    fn score_differential(&self, element: &'a Element) -> ScoredDifferential<'a> {
        let fdr = self.outlook.fdr(element.team);
        let signals = PlayerSignals::from_element(element, fdr);

        ScoredDifferential {
            element,
            position: element.position(),
            team: self.resolver.lookup().team_name(element.team),
            fdr,
            expected_points: expected_points(element.form, element.position()),
            scored: differential_score(&signals),
        }
    }

    /// Active players outside the current squad, in bootstrap order
    fn available_players(&self) -> impl Iterator<Item = &'a Element> + '_ {
        let elements: &'a [Element] = &self.resolver.snapshot().bootstrap.elements;
        elements
            .iter()
            .filter(move |e| e.is_active() && !self.squad_ids.contains(&e.id))
    }
}

/// Stable descending sort, so equal keys keep pool order
fn sort_desc_by<T>(items: &mut [T], key: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| key(b).total_cmp(&key(a)));
}
