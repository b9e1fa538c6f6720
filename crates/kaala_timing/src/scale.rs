//! The two scoring scales and the conversions between them.
//!
//! Window and aspect scores live on the 0–10 strength scale;
//! consensus, confidence and precision live on the 0–1 unit scale.
//! Every crossing between the two goes through these functions.

/// Strength (0–10) to unit (0–1).
pub fn strength_to_unit(strength: f64) -> f64 {
    (strength / 10.0).clamp(0.0, 1.0)
}

/// Unit (0–1) to strength (0–10).
pub fn unit_to_strength(unit: f64) -> f64 {
    (unit * 10.0).clamp(0.0, 10.0)
}

/// Clamps an analyzer score to the 1–10 band used for window scores.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(1.0, 10.0)
}

/// Clamps to the full 0–10 strength scale.
pub fn clamp_strength(strength: f64) -> f64 {
    strength.clamp(0.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_round_trip_inside_range() {
        for s in [0.0, 1.0, 5.0, 7.5, 10.0] {
            assert!((unit_to_strength(strength_to_unit(s)) - s).abs() < 1e-12);
        }
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(strength_to_unit(14.0), 1.0);
        assert_eq!(strength_to_unit(-2.0), 0.0);
        assert_eq!(unit_to_strength(1.4), 10.0);
    }

    #[test]
    fn score_band_floor_is_one() {
        assert_eq!(clamp_score(-3.0), 1.0);
        assert_eq!(clamp_score(11.2), 10.0);
        assert_eq!(clamp_score(6.4), 6.4);
        assert_eq!(clamp_strength(-3.0), 0.0);
    }
}
