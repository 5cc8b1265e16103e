pub mod fixtures;
pub mod formulas;
pub mod types;

pub use fixtures::{upcoming_fdr, upcoming_for_team, FixtureOutlook, NEUTRAL_FDR};
pub use formulas::{
    differential_score, expected_points, improvement, is_underperformer, performance_rating,
    player_score, points_per_million, replacement_score, round2, transfer_score, urgency,
    URGENCY_THRESHOLD,
};
pub use types::{
    Components, DifferentialScore, PerformanceRating, PlayerSignals, TransferScore,
};
