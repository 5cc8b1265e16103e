use serde::Serialize;

use crate::domain::{Element, Position};

/// Raw inputs every formula draws from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSignals {
    pub form: f64,
    pub price: f64,
    pub selected_percent: f64,
    pub minutes: u32,
    pub fdr: f64,
}

impl PlayerSignals {
    pub fn from_element(element: &Element, fdr: f64) -> Self {
        Self {
            form: element.form,
            price: element.price(),
            selected_percent: element.selected_by_percent,
            minutes: element.minutes,
            fdr,
        }
    }
}

/// Normalized signals shared by the composite scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    pub value_score: f64,
    pub ownership_score: f64,
    pub fixture_score: f64,
    pub playing_time_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferScore {
    pub components: Components,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentialScore {
    pub form_factor: f64,
    pub ownership_factor: f64,
    pub fixture_factor: f64,
    pub playing_time_factor: f64,
    pub score: f64,
}

/// Points multiplier per goal-involvement, by position
pub fn position_multiplier(position: Position) -> f64 {
    match position {
        Position::Goalkeeper => 1.2,
        Position::Defender => 1.5,
        Position::Midfielder => 2.0,
        Position::Forward => 2.5,
        Position::Unknown => 1.0,
    }
}

/// Squad-overview grade from form and points per million
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceRating {
    Excellent,
    Good,
    Average,
    Poor,
}
