use crate::domain::{Fixture, Gameweek, TeamId};

/// Medium difficulty, used whenever there is nothing to average
pub const NEUTRAL_FDR: f64 = 3.0;

/// Fixtures a team plays from the current gameweek on, in list order.
///
/// Callers pass a gameweek-sorted list (see `Snapshot`), so taking the first
/// N yields the next N matches.
pub fn upcoming_for_team<'a>(
    fixtures: &'a [Fixture],
    team_id: TeamId,
    current_gameweek: Gameweek,
) -> impl Iterator<Item = &'a Fixture> + 'a {
    fixtures
        .iter()
        .filter(move |f| f.is_upcoming(current_gameweek) && f.involves(team_id))
}

/// Average difficulty of a team's next `weeks` fixtures
pub fn upcoming_fdr(
    fixtures: &[Fixture],
    team_id: TeamId,
    current_gameweek: Gameweek,
    weeks: usize,
) -> f64 {
    if team_id == 0 {
        return NEUTRAL_FDR;
    }

    let difficulties: Vec<u8> = upcoming_for_team(fixtures, team_id, current_gameweek)
        .filter_map(|f| f.difficulty_for(team_id))
        .take(weeks)
        .collect();

    if difficulties.is_empty() {
        return NEUTRAL_FDR;
    }
    let total: u32 = difficulties.iter().map(|&d| d as u32).sum();
    total as f64 / difficulties.len() as f64
}

/// Fixture list bound to a gameweek and lookahead window
#[derive(Debug, Clone, Copy)]
pub struct FixtureOutlook<'a> {
    fixtures: &'a [Fixture],
    current_gameweek: Gameweek,
    weeks: usize,
}

impl<'a> FixtureOutlook<'a> {
    pub fn new(fixtures: &'a [Fixture], current_gameweek: Gameweek, weeks: usize) -> Self {
        Self {
            fixtures,
            current_gameweek,
            weeks,
        }
    }

    pub fn fdr(&self, team_id: TeamId) -> f64 {
        upcoming_fdr(self.fixtures, team_id, self.current_gameweek, self.weeks)
    }
}
