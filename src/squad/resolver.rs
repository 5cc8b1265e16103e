use log::warn;
use std::collections::{BTreeMap, HashSet};

use super::types::{
    DetailedAnalysis, PositionDepth, PositionGroup, SquadDepth, SquadEntry, SquadHealth,
    TeamSummary, UpcomingFixture,
};
use crate::config::ScoringSettings;
use crate::domain::{Lookup, Pick, PlayerId, Position, Snapshot, UNKNOWN};
use crate::scoring::upcoming_for_team;

/// Joins a manager's picks against the bootstrap and derives squad summaries
pub struct SquadResolver<'a> {
    snapshot: &'a Snapshot,
    lookup: Lookup<'a>,
    settings: &'a ScoringSettings,
    squad: Vec<SquadEntry<'a>>,
}

impl<'a> SquadResolver<'a> {
    pub fn new(snapshot: &'a Snapshot, settings: &'a ScoringSettings) -> Self {
        let lookup = snapshot.lookup();
        let squad = snapshot
            .picks
            .iter()
            .map(|pick| Self::resolve_pick(&lookup, pick))
            .collect();

        Self {
            snapshot,
            lookup,
            settings,
            squad,
        }
    }

    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    pub fn lookup(&self) -> &Lookup<'a> {
        &self.lookup
    }

    pub fn current_squad(&self) -> &[SquadEntry<'a>] {
        &self.squad
    }

    pub fn squad_ids(&self) -> HashSet<PlayerId> {
        self.squad.iter().map(|p| p.player_id).collect()
    }

    pub fn summary(&self) -> TeamSummary {
        let entry = &self.snapshot.entry;
        TeamSummary {
            team_id: self.snapshot.manager_id,
            team_name: entry.name.clone(),
            manager_name: entry.manager_name(),
            current_rank: entry.summary_overall_rank,
            total_points: entry.summary_overall_points,
            current_gameweek: self.snapshot.current_gameweek,
            transfers_remaining: entry.transfers_available,
            transfer_bank: entry.bank(),
        }
    }

    pub fn squad_by_position(&self) -> BTreeMap<Position, Vec<SquadEntry<'a>>> {
        let mut grouped: BTreeMap<Position, Vec<SquadEntry<'a>>> =
            Position::ALL.iter().map(|&p| (p, Vec::new())).collect();

        for player in &self.squad {
            if let Some(group) = grouped.get_mut(&player.position) {
                group.push(player.clone());
            }
        }
        grouped
    }

    pub fn health(&self) -> SquadHealth<'a> {
        let players_by_position = self
            .squad_by_position()
            .into_iter()
            .map(|(position, players)| {
                let group = PositionGroup {
                    count: players.len(),
                    avg_form: average(players.iter().map(|p| p.form)),
                    avg_price: average(players.iter().map(|p| p.price)),
                    players,
                };
                (position, group)
            })
            .collect();

        SquadHealth {
            total_squad_form: average(self.squad.iter().map(|p| p.form)),
            players_by_position,
            upcoming_fixtures: self.upcoming_fixtures(self.settings.health_fixture_count),
        }
    }

    pub fn depth(&self) -> SquadDepth<'a> {
        self.squad_by_position()
            .into_iter()
            .map(|(position, players)| {
                let forms: Vec<f64> = players.iter().map(|p| p.form).collect();

                let mut team_concentration = BTreeMap::new();
                for player in &players {
                    *team_concentration.entry(player.team.clone()).or_insert(0) += 1;
                }

                let depth = PositionDepth {
                    count: players.len(),
                    avg_form: average(forms.iter().copied()),
                    min_form: forms.iter().copied().reduce(f64::min).unwrap_or(0.0),
                    max_form: forms.iter().copied().reduce(f64::max).unwrap_or(0.0),
                    team_concentration,
                    players,
                };
                (position, depth)
            })
            .collect()
    }

    /// Next `count` fixtures for the manager's favourite club
    pub fn upcoming_fixtures(&self, count: usize) -> Vec<UpcomingFixture> {
        let Some(team_id) = self.snapshot.entry.favourite_team.filter(|&id| id != 0) else {
            return Vec::new();
        };

        upcoming_for_team(&self.snapshot.fixtures, team_id, self.snapshot.current_gameweek)
            .take(count)
            .filter_map(|fixture| {
                Some(UpcomingFixture {
                    gameweek: fixture.event?,
                    opponent: self.lookup.team_name(fixture.opponent_of(team_id)).to_string(),
                    home: fixture.team_h == team_id,
                    difficulty: fixture.difficulty_for(team_id)?,
                })
            })
            .collect()
    }

    pub fn detailed_analysis(&self) -> DetailedAnalysis<'a> {
        DetailedAnalysis {
            summary: self.summary(),
            squad: self.squad.clone(),
            health: self.health(),
            depth: self.depth(),
            upcoming_fixtures: self.upcoming_fixtures(self.settings.detailed_fixture_count),
        }
    }

    fn resolve_pick(lookup: &Lookup<'a>, pick: &Pick) -> SquadEntry<'a> {
        let element = lookup.player(pick.element);
        if element.is_none() {
            warn!("Pick {} has no bootstrap record; using an empty one", pick.element);
        }

        let (name, position, team_id, price, form) = match element {
            Some(e) => (e.web_name.clone(), e.position(), e.team, e.price(), e.form),
            None => (None, Position::Unknown, 0, 0.0, 0.0),
        };
        let team = match element {
            Some(_) => lookup.team_name(team_id).to_string(),
            None => UNKNOWN.to_string(),
        };

        SquadEntry {
            player_id: pick.element,
            name,
            position,
            team,
            price,
            form,
            multiplier: pick.multiplier,
            is_captain: pick.is_captain,
            is_vice_captain: pick.is_vice_captain,
            team_id,
            element,
        }
    }
}

/// Mean of the values, 0 for none
fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, player, snapshot};

    fn settings() -> ScoringSettings {
        ScoringSettings::default()
    }

    #[test]
    fn squad_contains_exactly_the_picks() {
        let snap = snapshot(
            vec![
                player(1, 1, 1).build(),
                player(2, 2, 2).cost(45).form(3.5).build(),
                player(3, 3, 3).build(),
            ],
            &[2, 1],
            vec![],
            0,
        );
        let settings = settings();
        let resolver = SquadResolver::new(&snap, &settings);
        let squad = resolver.current_squad();

        assert_eq!(squad.len(), 2);
        assert_eq!(squad[0].player_id, 2);
        assert_eq!(squad[0].position, Position::Defender);
        assert_eq!(squad[0].team, "CHE");
        assert_eq!(squad[0].price, 4.5);
        assert_eq!(squad[0].form, 3.5);
        assert_eq!(resolver.squad_ids(), HashSet::from([1, 2]));
    }

    #[test]
    fn missing_player_degrades_to_empty_record() {
        let snap = snapshot(vec![player(1, 1, 1).build()], &[1, 404], vec![], 0);
        let settings = settings();
        let resolver = SquadResolver::new(&snap, &settings);
        let ghost = &resolver.current_squad()[1];

        assert_eq!(ghost.player_id, 404);
        assert!(ghost.name.is_none());
        assert!(ghost.element.is_none());
        assert_eq!(ghost.position, Position::Unknown);
        assert_eq!(ghost.team, UNKNOWN);
        assert_eq!(ghost.price, 0.0);
    }

    #[test]
    fn player_with_unknown_team_keeps_record() {
        let snap = snapshot(vec![player(1, 4, 77).build()], &[1], vec![], 0);
        let settings = settings();
        let resolver = SquadResolver::new(&snap, &settings);

        assert_eq!(resolver.current_squad()[0].team, UNKNOWN);
        assert!(resolver.current_squad()[0].element.is_some());
    }

    #[test]
    fn empty_squad_averages_are_zero() {
        let snap = snapshot(vec![player(1, 1, 1).build()], &[], vec![], 0);
        let settings = settings();
        let resolver = SquadResolver::new(&snap, &settings);

        let health = resolver.health();
        assert_eq!(health.total_squad_form, 0.0);
        assert_eq!(health.players_by_position.len(), 4);
        assert!(health.players_by_position.values().all(|g| g.avg_form == 0.0 && g.count == 0));

        let depth = resolver.depth();
        assert!(depth.values().all(|d| d.min_form == 0.0 && d.max_form == 0.0));
    }

    #[test]
    fn health_and_depth_aggregate_per_position() {
        let snap = snapshot(
            vec![
                player(1, 2, 1).form(2.0).cost(40).build(),
                player(2, 2, 1).form(6.0).cost(60).build(),
                player(3, 2, 2).form(4.0).cost(50).build(),
                player(4, 4, 3).form(8.0).cost(100).build(),
            ],
            &[1, 2, 3, 4],
            vec![],
            0,
        );
        let settings = settings();
        let resolver = SquadResolver::new(&snap, &settings);

        let health = resolver.health();
        assert_eq!(health.total_squad_form, 5.0);
        let defenders = &health.players_by_position[&Position::Defender];
        assert_eq!(defenders.count, 3);
        assert_eq!(defenders.avg_form, 4.0);
        assert_eq!(defenders.avg_price, 5.0);

        let depth = resolver.depth();
        let defenders = &depth[&Position::Defender];
        assert_eq!(defenders.min_form, 2.0);
        assert_eq!(defenders.max_form, 6.0);
        assert_eq!(defenders.team_concentration["ARS"], 2);
        assert_eq!(defenders.team_concentration["CHE"], 1);
        assert_eq!(depth[&Position::Goalkeeper].count, 0);
    }

    #[test]
    fn upcoming_fixtures_follow_gameweek_order() {
        let snap = snapshot(
            vec![],
            &[],
            vec![
                fixture(Some(12), 1, 3, 4, 3),
                fixture(Some(9), 1, 2, 2, 2),
                fixture(Some(10), 2, 1, 3, 5),
                fixture(None, 1, 4, 1, 1),
                fixture(Some(11), 4, 3, 2, 2),
                fixture(Some(11), 1, 4, 2, 4),
            ],
            0,
        );
        let settings = settings();
        let resolver = SquadResolver::new(&snap, &settings);

        let upcoming = resolver.upcoming_fixtures(3);
        let gameweeks: Vec<u32> = upcoming.iter().map(|f| f.gameweek).collect();
        assert_eq!(gameweeks, vec![10, 11, 12]);

        assert_eq!(upcoming[0].opponent, "CHE");
        assert!(!upcoming[0].home);
        assert_eq!(upcoming[0].difficulty, 5);
        assert_eq!(upcoming[1].opponent, "MCI");
        assert!(upcoming[1].home);
        assert_eq!(upcoming[1].difficulty, 2);

        assert_eq!(resolver.upcoming_fixtures(1).len(), 1);
    }

    #[test]
    fn summary_reports_bank_in_millions() {
        let snap = snapshot(vec![], &[], vec![], 15);
        let settings = settings();
        let summary = SquadResolver::new(&snap, &settings).summary();

        assert_eq!(summary.transfer_bank, 1.5);
        assert_eq!(summary.manager_name, "Sam Manager");
        assert_eq!(summary.current_gameweek, crate::test_support::CURRENT_GW);
    }
}
