pub mod resolver;
pub mod types;

pub use resolver::SquadResolver;
pub use types::{
    DetailedAnalysis, PositionDepth, PositionGroup, SquadDepth, SquadEntry, SquadHealth,
    TeamSummary, UpcomingFixture,
};
