use serde::{Deserialize, Serialize};

use super::lenient;

pub type PlayerId = u64;
pub type TeamId = u32;
pub type Gameweek = u32;

/// Playing position, derived from the provider's `element_type` (1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
    Unknown,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn from_element_type(element_type: u32) -> Self {
        match element_type {
            1 => Position::Goalkeeper,
            2 => Position::Defender,
            3 => Position::Midfielder,
            4 => Position::Forward,
            _ => Position::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
            Position::Unknown => "Unknown",
        }
    }
}

/// Availability as reported in the element's `status` code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Active,
    Injured,
    Unavailable,
    Other,
}

impl Availability {
    pub fn from_code(code: &str) -> Self {
        match code {
            "a" => Availability::Active,
            "i" => Availability::Injured,
            "u" => Availability::Unavailable,
            _ => Availability::Other,
        }
    }
}

/// Player record from `bootstrap-static`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Element {
    pub id: PlayerId,
    #[serde(default)]
    pub web_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub element_type: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub team: TeamId,
    /// Tenths of a million
    #[serde(default, deserialize_with = "lenient::tenths")]
    pub now_cost: i64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub form: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub selected_by_percent: f64,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub minutes: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::u64")]
    pub code: u64,
    #[serde(default, deserialize_with = "lenient::i64")]
    pub total_points: i64,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub goals_scored: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub assists: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub clean_sheets: u32,
}

impl Element {
    pub fn position(&self) -> Position {
        Position::from_element_type(self.element_type)
    }

    pub fn price(&self) -> f64 {
        self.now_cost as f64 / 10.0
    }

    pub fn availability(&self) -> Availability {
        Availability::from_code(&self.status)
    }

    pub fn is_active(&self) -> bool {
        self.availability() == Availability::Active
    }

    pub fn photo_code(&self) -> Option<u64> {
        (self.code != 0).then_some(self.code)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub short_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    pub id: Gameweek,
    #[serde(default, deserialize_with = "lenient::bool")]
    pub is_current: bool,
}

/// `bootstrap-static` payload: gameweeks, teams and players
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Bootstrap {
    /// Gameweek flagged as current, falling back to the first listed one
    pub fn current_gameweek(&self) -> Option<Gameweek> {
        self.events
            .iter()
            .find(|e| e.is_current)
            .or_else(|| self.events.first())
            .map(|e| e.id)
    }
}

/// Difficulty scale bounds
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;
pub const DEFAULT_DIFFICULTY: u8 = 3;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub event: Option<Gameweek>,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub team_h: TeamId,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub team_a: TeamId,
    #[serde(default = "default_difficulty", deserialize_with = "lenient::difficulty")]
    pub team_h_difficulty: u8,
    #[serde(default = "default_difficulty", deserialize_with = "lenient::difficulty")]
    pub team_a_difficulty: u8,
}

fn default_difficulty() -> u8 {
    DEFAULT_DIFFICULTY
}

impl Fixture {
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.team_h == team_id || self.team_a == team_id
    }

    /// Difficulty from `team_id`'s side, `None` when the team is not playing
    pub fn difficulty_for(&self, team_id: TeamId) -> Option<u8> {
        if self.team_a == team_id {
            Some(self.team_a_difficulty)
        } else if self.team_h == team_id {
            Some(self.team_h_difficulty)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, team_id: TeamId) -> TeamId {
        if self.team_a == team_id {
            self.team_h
        } else {
            self.team_a
        }
    }

    pub fn is_upcoming(&self, current: Gameweek) -> bool {
        self.event.is_some_and(|gw| gw >= current)
    }
}

/// Manager entry (`entry/{id}/`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub player_first_name: String,
    #[serde(default)]
    pub player_last_name: String,
    #[serde(default)]
    pub summary_overall_rank: Option<u64>,
    #[serde(default)]
    pub summary_overall_points: Option<i64>,
    #[serde(default)]
    pub transfers_available: Option<i64>,
    /// Tenths of a million
    #[serde(default, deserialize_with = "lenient::tenths")]
    pub last_deadline_bank: i64,
    #[serde(default)]
    pub favourite_team: Option<TeamId>,
}

impl EntryInfo {
    pub fn manager_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
            .trim()
            .to_string()
    }

    pub fn bank(&self) -> f64 {
        self.last_deadline_bank as f64 / 10.0
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pick {
    pub element: PlayerId,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub multiplier: u32,
    #[serde(default, deserialize_with = "lenient::bool")]
    pub is_captain: bool,
    #[serde(default, deserialize_with = "lenient::bool")]
    pub is_vice_captain: bool,
}

/// The picks endpoint normally wraps the list, older payloads were bare arrays
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PicksPayload {
    Wrapped { picks: Vec<Pick> },
    Bare(Vec<Pick>),
}

impl PicksPayload {
    pub fn into_picks(self) -> Vec<Pick> {
        match self {
            PicksPayload::Wrapped { picks } => picks,
            PicksPayload::Bare(picks) => picks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_decodes_string_numbers() {
        let raw = r#"{
            "id": 7, "web_name": "Saka", "element_type": 3, "team": 1,
            "now_cost": 100, "form": "6.5", "selected_by_percent": "45.2",
            "minutes": 900, "status": "a", "code": 223340
        }"#;
        let element: Element = serde_json::from_str(raw).unwrap();

        assert_eq!(element.position(), Position::Midfielder);
        assert_eq!(element.price(), 10.0);
        assert_eq!(element.form, 6.5);
        assert_eq!(element.selected_by_percent, 45.2);
        assert!(element.is_active());
        assert_eq!(element.photo_code(), Some(223340));
    }

    #[test]
    fn element_missing_fields_default_to_zero() {
        let element: Element =
            serde_json::from_str(r#"{"id": 1, "form": null, "now_cost": "abc"}"#).unwrap();

        assert_eq!(element.form, 0.0);
        assert_eq!(element.now_cost, 0);
        assert_eq!(element.position(), Position::Unknown);
        assert_eq!(element.availability(), Availability::Other);
        assert!(element.photo_code().is_none());
    }

    #[test]
    fn current_gameweek_falls_back_to_first_event() {
        let mut bootstrap = Bootstrap {
            events: vec![
                Event { id: 1, ..Default::default() },
                Event { id: 2, ..Default::default() },
            ],
            ..Default::default()
        };
        assert_eq!(bootstrap.current_gameweek(), Some(1));

        bootstrap.events[1].is_current = true;
        assert_eq!(bootstrap.current_gameweek(), Some(2));

        bootstrap.events.clear();
        assert_eq!(bootstrap.current_gameweek(), None);
    }

    #[test]
    fn fixture_difficulty_is_side_aware_and_clamped() {
        let fixture: Fixture = serde_json::from_str(
            r#"{"event": 4, "team_h": 1, "team_a": 2,
                "team_h_difficulty": 9, "team_a_difficulty": null}"#,
        )
        .unwrap();

        assert_eq!(fixture.difficulty_for(1), Some(5));
        assert_eq!(fixture.difficulty_for(2), Some(3));
        assert_eq!(fixture.difficulty_for(3), None);
        assert_eq!(fixture.opponent_of(2), 1);
    }

    #[test]
    fn unscheduled_fixture_is_never_upcoming() {
        let fixture: Fixture =
            serde_json::from_str(r#"{"event": null, "team_h": 1, "team_a": 2}"#).unwrap();
        assert!(!fixture.is_upcoming(1));
    }

    #[test]
    fn picks_accept_wrapped_and_bare_payloads() {
        let wrapped: PicksPayload =
            serde_json::from_str(r#"{"picks": [{"element": 5, "is_captain": true}]}"#).unwrap();
        let bare: PicksPayload = serde_json::from_str(r#"[{"element": 6}]"#).unwrap();

        let wrapped = wrapped.into_picks();
        assert_eq!(wrapped[0].element, 5);
        assert!(wrapped[0].is_captain);
        assert_eq!(bare.into_picks()[0].element, 6);
    }

    #[test]
    fn manager_name_is_trimmed() {
        let entry = EntryInfo {
            player_first_name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.manager_name(), "Ada");
    }
}
