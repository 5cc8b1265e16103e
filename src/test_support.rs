//! Synthetic league data shared by unit tests.

use std::sync::Arc;

use crate::domain::{Bootstrap, Element, EntryInfo, Event, Fixture, Pick, Snapshot, Team};

pub const CURRENT_GW: u32 = 10;

pub struct PlayerBuilder(Element);

/// Active, regular starter on 5.0 form, priced 5.0, 10% owned
pub fn player(id: u64, element_type: u32, team: u32) -> PlayerBuilder {
    PlayerBuilder(Element {
        id,
        web_name: Some(format!("P{}", id)),
        element_type,
        team,
        now_cost: 50,
        form: 5.0,
        selected_by_percent: 10.0,
        minutes: 900,
        status: "a".to_string(),
        code: id * 100,
        ..Default::default()
    })
}

impl PlayerBuilder {
    pub fn cost(mut self, tenths: i64) -> Self {
        self.0.now_cost = tenths;
        self
    }

    pub fn form(mut self, form: f64) -> Self {
        self.0.form = form;
        self
    }

    pub fn selected(mut self, percent: f64) -> Self {
        self.0.selected_by_percent = percent;
        self
    }

    pub fn minutes(mut self, minutes: u32) -> Self {
        self.0.minutes = minutes;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.0.status = status.to_string();
        self
    }

    pub fn points(mut self, total_points: i64) -> Self {
        self.0.total_points = total_points;
        self
    }

    pub fn build(self) -> Element {
        self.0
    }
}

pub fn fixture(event: Option<u32>, team_h: u32, team_a: u32, h_diff: u8, a_diff: u8) -> Fixture {
    Fixture {
        event,
        team_h,
        team_a,
        team_h_difficulty: h_diff,
        team_a_difficulty: a_diff,
    }
}

pub fn teams() -> Vec<Team> {
    ["ARS", "CHE", "LIV", "MCI"]
        .iter()
        .enumerate()
        .map(|(i, short)| Team {
            id: i as u32 + 1,
            short_name: short.to_string(),
        })
        .collect()
}

pub fn pick(element: u64) -> Pick {
    Pick {
        element,
        multiplier: 1,
        ..Default::default()
    }
}

pub fn snapshot(
    elements: Vec<Element>,
    squad: &[u64],
    fixtures: Vec<Fixture>,
    bank_tenths: i64,
) -> Snapshot {
    let bootstrap = Bootstrap {
        events: vec![
            Event { id: CURRENT_GW - 1, ..Default::default() },
            Event { id: CURRENT_GW, is_current: true },
            Event { id: CURRENT_GW + 1, ..Default::default() },
        ],
        teams: teams(),
        elements,
    };
    let entry = EntryInfo {
        name: Some("Test XI".to_string()),
        player_first_name: "Sam".to_string(),
        player_last_name: "Manager".to_string(),
        summary_overall_rank: Some(1234),
        summary_overall_points: Some(567),
        last_deadline_bank: bank_tenths,
        favourite_team: Some(1),
        ..Default::default()
    };
    let picks = squad.iter().map(|&id| pick(id)).collect();

    Snapshot::new(1, CURRENT_GW, Arc::new(bootstrap), entry, picks, fixtures)
}
