use std::sync::Arc;

use super::lookup::Lookup;
use super::models::{Bootstrap, EntryInfo, Fixture, Gameweek, Pick};

/// Everything one request scores against, fetched once up front
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub manager_id: u64,
    pub current_gameweek: Gameweek,
    pub bootstrap: Arc<Bootstrap>,
    pub entry: EntryInfo,
    pub picks: Vec<Pick>,
    /// Ordered by gameweek, unscheduled fixtures last
    pub fixtures: Vec<Fixture>,
}

impl Snapshot {
    pub fn new(
        manager_id: u64,
        current_gameweek: Gameweek,
        bootstrap: Arc<Bootstrap>,
        entry: EntryInfo,
        picks: Vec<Pick>,
        fixtures: Vec<Fixture>,
    ) -> Self {
        Self {
            manager_id,
            current_gameweek,
            bootstrap,
            entry,
            picks,
            fixtures: sort_by_gameweek(fixtures),
        }
    }

    pub fn lookup(&self) -> Lookup<'_> {
        Lookup::new(&self.bootstrap)
    }

    pub fn bank(&self) -> f64 {
        self.entry.bank()
    }
}

/// Stable, so fixtures within one gameweek keep provider order
pub fn sort_by_gameweek(mut fixtures: Vec<Fixture>) -> Vec<Fixture> {
    fixtures.sort_by_key(|f| (f.event.is_none(), f.event.unwrap_or(0)));
    fixtures
}
