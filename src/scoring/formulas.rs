use super::types::{
    position_multiplier, Components, DifferentialScore, PerformanceRating, PlayerSignals,
    TransferScore,
};
use crate::domain::Position;

/// Urgency above which a squad player counts as an underperformer
pub const URGENCY_THRESHOLD: f64 = 0.5;

const FULL_MATCH_MINUTES: f64 = 90.0;

/// Two decimals, exact halves going to the even neighbour
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn value_score(form: f64, price: f64) -> f64 {
    if price > 0.0 { form / price } else { 0.0 }
}

pub fn ownership_score(selected_percent: f64) -> f64 {
    (100.0 - selected_percent) / 100.0
}

/// Difficulty 1-5 inverted onto 1.0-0.2
pub fn fixture_score(fdr: f64) -> f64 {
    (6.0 - fdr) / 5.0
}

pub fn playing_time_score(minutes: u32) -> f64 {
    (minutes as f64 / FULL_MATCH_MINUTES).min(1.0)
}

pub fn components(signals: &PlayerSignals) -> Components {
    Components {
        value_score: value_score(signals.form, signals.price),
        ownership_score: ownership_score(signals.selected_percent),
        fixture_score: fixture_score(signals.fdr),
        playing_time_score: playing_time_score(signals.minutes),
    }
}

pub fn transfer_score(signals: &PlayerSignals) -> TransferScore {
    let c = components(signals);
    let score = signals.form * 0.25
        + c.value_score * 0.20
        + c.ownership_score * 0.15
        + c.fixture_score * 0.25
        + c.playing_time_score * 0.15;

    TransferScore { components: c, score }
}

/// Low ownership carries the most weight
pub fn differential_score(signals: &PlayerSignals) -> DifferentialScore {
    let form_factor = signals.form.max(0.0);
    let ownership_factor = ownership_score(signals.selected_percent);
    let fixture_factor = fixture_score(signals.fdr);
    let playing_time_factor = playing_time_score(signals.minutes);
    let score = form_factor * 0.30
        + ownership_factor * 0.40
        + fixture_factor * 0.20
        + playing_time_factor * 0.10;

    DifferentialScore {
        form_factor,
        ownership_factor,
        fixture_factor,
        playing_time_factor,
        score,
    }
}

/// How badly a squad player needs replacing; penalties accumulate
pub fn urgency(form: f64, price: f64, minutes: u32) -> f64 {
    let mut urgency = 0.0;

    if (minutes as f64) < FULL_MATCH_MINUTES {
        urgency += (1.0 - minutes as f64 / FULL_MATCH_MINUTES) * 2.0;
    }
    if form < 3.0 {
        urgency += (3.0 - form) * 1.0;
    }
    if price > 8.0 && form < 5.0 {
        urgency += (5.0 - form) * 0.5;
    }

    urgency
}

pub fn is_underperformer(urgency: f64) -> bool {
    urgency > URGENCY_THRESHOLD
}

/// Current worth of a squad player, the baseline replacements must beat
pub fn player_score(signals: &PlayerSignals) -> f64 {
    signals.form * 0.40
        + fixture_score(signals.fdr) * 0.30
        + playing_time_score(signals.minutes) * 0.20
        + ownership_score(signals.selected_percent) * 0.10
}

pub fn replacement_score(signals: &PlayerSignals) -> f64 {
    signals.form * 0.40
        + fixture_score(signals.fdr) * 0.30
        + ownership_score(signals.selected_percent) * 0.20
        + playing_time_score(signals.minutes) * 0.10
}

pub fn improvement(replacement_score: f64, outgoing_player_score: f64) -> f64 {
    replacement_score - outgoing_player_score
}

pub fn expected_points(form: f64, position: Position) -> f64 {
    form * position_multiplier(position)
}

pub fn points_per_million(total_points: i64, price: f64) -> f64 {
    if price > 0.0 { total_points as f64 / price } else { 0.0 }
}

pub fn performance_rating(form: f64, total_points: i64, price: f64) -> PerformanceRating {
    let score = form * 0.4 + points_per_million(total_points, price) * 0.6;

    if score > 6.0 {
        PerformanceRating::Excellent
    } else if score > 4.0 {
        PerformanceRating::Good
    } else if score > 2.0 {
        PerformanceRating::Average
    } else {
        PerformanceRating::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn signals() -> PlayerSignals {
        PlayerSignals {
            form: 6.0,
            price: 10.0,
            selected_percent: 20.0,
            minutes: 180,
            fdr: 2.0,
        }
    }

    #[test]
    fn round2_sends_halves_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(2.0899999), 2.09);
    }

    #[test]
    fn value_score_is_zero_for_free_players() {
        assert_eq!(value_score(7.5, 0.0), 0.0);
        assert_eq!(value_score(6.0, 4.0), 1.5);
    }

    #[test]
    fn playing_time_caps_at_one() {
        assert_eq!(playing_time_score(45), 0.5);
        assert_eq!(playing_time_score(900), 1.0);
        assert_eq!(playing_time_score(0), 0.0);
    }

    #[test]
    fn transfer_score_matches_hand_computation() {
        let scored = transfer_score(&signals());

        // 0.25*6 + 0.20*0.6 + 0.15*0.8 + 0.25*0.8 + 0.15*1.0
        assert!(approx(scored.score, 2.09));
        assert_eq!(round2(scored.score), 2.09);
        assert!(approx(scored.components.value_score, 0.6));
        assert!(approx(scored.components.ownership_score, 0.8));
        assert!(approx(scored.components.fixture_score, 0.8));
        assert_eq!(scored.components.playing_time_score, 1.0);
    }

    #[test]
    fn differential_score_matches_hand_computation() {
        let scored = differential_score(&signals());

        // 0.30*6 + 0.40*0.8 + 0.20*0.8 + 0.10*1.0
        assert!(approx(scored.score, 2.38));
    }

    #[test]
    fn differential_ignores_negative_form() {
        let mut s = signals();
        s.form = -1.0;
        let scored = differential_score(&s);

        assert_eq!(scored.form_factor, 0.0);
        assert!(approx(scored.score, 0.58));
    }

    #[test]
    fn player_and_replacement_scores_use_their_own_weights() {
        let mut s = signals();
        s.minutes = 45;

        // 0.40*6 + 0.30*0.8 + 0.20*0.5 + 0.10*0.8
        assert!(approx(player_score(&s), 2.82));
        // 0.40*6 + 0.30*0.8 + 0.20*0.8 + 0.10*0.5
        assert!(approx(replacement_score(&s), 2.85));
    }

    #[test]
    fn urgency_accumulates_all_penalties() {
        // (1 - 45/90)*2 + (3-2)*1 + (5-2)*0.5
        assert!(approx(urgency(2.0, 9.0, 45), 3.5));
    }

    #[test]
    fn in_form_regular_is_not_an_underperformer() {
        let u = urgency(10.0, 5.0, 90);
        assert_eq!(u, 0.0);
        assert!(!is_underperformer(u));
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_underperformer(0.5));
        assert!(is_underperformer(0.51));
        // 80 minutes alone: (1 - 80/90)*2 ~ 0.22
        assert!(!is_underperformer(urgency(4.0, 6.0, 80)));
    }

    #[test]
    fn expensive_penalty_needs_both_conditions() {
        assert_eq!(urgency(4.0, 8.0, 90), 0.0);
        assert_eq!(urgency(4.0, 8.5, 90), 0.5);
        assert_eq!(urgency(5.0, 12.0, 90), 0.0);
    }

    #[test]
    fn expected_points_scale_by_position() {
        assert!(approx(expected_points(4.0, Position::Forward), 10.0));
        assert!(approx(expected_points(4.0, Position::Goalkeeper), 4.8));
        assert!(approx(expected_points(4.0, Position::Unknown), 4.0));
    }

    #[test]
    fn improvement_can_be_negative() {
        assert!(approx(improvement(1.2, 2.0), -0.8));
    }

    #[test]
    fn performance_rating_bands() {
        // 0.4*5 + 0.6*(100/10) = 8
        assert_eq!(performance_rating(5.0, 100, 10.0), PerformanceRating::Excellent);
        // 0.4*5 + 0.6*5 = 5
        assert_eq!(performance_rating(5.0, 25, 5.0), PerformanceRating::Good);
        assert_eq!(performance_rating(5.0, 0, 10.0), PerformanceRating::Poor);
        assert_eq!(performance_rating(6.0, 0, 0.0), PerformanceRating::Average);
        assert_eq!(points_per_million(40, 0.0), 0.0);
    }
}
