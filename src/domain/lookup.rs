use std::collections::HashMap;

use super::models::{Bootstrap, Element, PlayerId, TeamId};

pub const UNKNOWN: &str = "Unknown";

/// Indexed view over a bootstrap snapshot, shared by every component that
/// needs player records or team names
pub struct Lookup<'a> {
    players: HashMap<PlayerId, &'a Element>,
    team_names: HashMap<TeamId, &'a str>,
}

impl<'a> Lookup<'a> {
    pub fn new(bootstrap: &'a Bootstrap) -> Self {
        let mut players = HashMap::with_capacity(bootstrap.elements.len());
        for element in &bootstrap.elements {
            // First record wins, matching a front-to-back scan
            players.entry(element.id).or_insert(element);
        }

        let mut team_names = HashMap::with_capacity(bootstrap.teams.len());
        for team in &bootstrap.teams {
            team_names.entry(team.id).or_insert(team.short_name.as_str());
        }

        Self { players, team_names }
    }

    pub fn player(&self, id: PlayerId) -> Option<&'a Element> {
        self.players.get(&id).copied()
    }

    pub fn team_name(&self, id: TeamId) -> &'a str {
        if id == 0 {
            return UNKNOWN;
        }
        self.team_names.get(&id).copied().unwrap_or(UNKNOWN)
    }
}
