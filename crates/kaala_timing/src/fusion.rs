//! Enhancement of consensus windows.
//!
//! Each consensus window is amplified by overlapping favorable transit
//! windows, credited for net transiting aspect support at its midpoint,
//! and narrowed toward its opening. The three factors combine into the
//! final prediction score.

use kaala_chart::{NatalChart, find_aspect};
use kaala_ephem::{ELEMENT_BODIES, longitude_of};
use kaala_time::TimeInstant;

use crate::error::TimingError;
use crate::types::{ConsensusWindow, EnhancedPrediction, MethodAnalysis, RefinedWindow};

/// Amplification per overlapping favorable transit window.
const AMPLIFICATION_STEP: f64 = 0.1;

/// Fraction of the window length kept after narrowing.
const NARROWING_FACTOR: f64 = 0.8;

/// Weight of neutral aspects in the support balance.
const NEUTRAL_WEIGHT: f64 = 0.3;

/// Fuses transit, aspect and narrowing factors into each window.
///
/// Output is sorted by final score descending, ties by start.
pub fn enhance(
    windows: &[ConsensusWindow],
    transit: Option<&MethodAnalysis>,
    chart: &NatalChart,
) -> Result<Vec<EnhancedPrediction>, TimingError> {
    let mut predictions = Vec::with_capacity(windows.len());

    for window in windows {
        let amplification = transit_amplification(window, transit);
        let aspect_support = midpoint_aspect_support(window, chart)?;
        let refined = narrow(window);

        // Left unclamped: the rank key must keep separating windows
        // that the 0-10 strength cap would collapse together.
        let narrowing_bonus = (1.0 - refined.narrowing_factor) * 3.0;
        let final_score = window.combined_score * amplification
            + 2.0 * aspect_support.max(0.0)
            + narrowing_bonus;

        predictions.push(EnhancedPrediction {
            window: window.clone(),
            amplification,
            aspect_support,
            refined,
            final_score,
        });
    }

    predictions.sort_by(|a, b| {
        b.final_score
            .total_cmp(&a.final_score)
            .then(a.window.start_jd.total_cmp(&b.window.start_jd))
    });
    Ok(predictions)
}

fn transit_amplification(window: &ConsensusWindow, transit: Option<&MethodAnalysis>) -> f64 {
    let Some(transit) = transit else { return 1.0 };
    let overlaps = transit
        .favorable()
        .filter(|w| w.overlaps(window.start_jd, window.end_jd))
        .count();
    1.0 + AMPLIFICATION_STEP * overlaps as f64
}

/// Net transiting aspect pressure at the window midpoint, on −1..1.
///
/// Every planet's transit position is aspected against every natal
/// body present; harmonious strengths add, challenging subtract, and
/// neutral kinds count at reduced weight.
fn midpoint_aspect_support(
    window: &ConsensusWindow,
    chart: &NatalChart,
) -> Result<f64, TimingError> {
    let midpoint = TimeInstant::from_jd(window.midpoint_jd());

    let mut net = 0.0;
    let mut count = 0u32;
    for body in ELEMENT_BODIES {
        let pos = longitude_of(body, &midpoint)?;
        for natal_body in chart.bodies_present() {
            let Some(natal) = chart.position(natal_body) else { continue };
            if let Some(a) = find_aspect(pos.longitude, natal.longitude, body, natal_body) {
                if a.kind.is_harmonious() {
                    net += a.strength;
                } else if a.kind.is_challenging() {
                    net -= a.strength;
                } else {
                    net += NEUTRAL_WEIGHT * a.strength;
                }
                count += 1;
            }
        }
    }

    if count == 0 {
        return Ok(0.0);
    }
    Ok((net / (10.0 * f64::from(count))).clamp(-1.0, 1.0))
}

/// Keeps the opening fraction of the window. The front is favored so
/// the prediction can act before the supporting periods wane.
fn narrow(window: &ConsensusWindow) -> RefinedWindow {
    let length = window.end_jd - window.start_jd;
    RefinedWindow {
        start_jd: window.start_jd,
        end_jd: window.start_jd + length * NARROWING_FACTOR,
        narrowing_factor: NARROWING_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnalysisWindow, Influence, MethodId};
    use kaala_chart::GeoLocation;
    use kaala_time::CivilTime;

    fn chart() -> NatalChart {
        let birth = TimeInstant::new(CivilTime::new(1990, 5, 15, 14, 30, 0.0));
        NatalChart::for_instant(&birth, &GeoLocation::new(28.6139, 77.2090)).unwrap()
    }

    fn consensus(start: f64, end: f64, combined: f64) -> ConsensusWindow {
        ConsensusWindow {
            start_jd: start,
            end_jd: end,
            consensus: 0.7,
            methods: vec![MethodId::Lordship],
            combined_score: combined,
        }
    }

    fn transit_analysis(windows: Vec<AnalysisWindow>) -> MethodAnalysis {
        MethodAnalysis {
            method: MethodId::Transit,
            weight: 0.25,
            windows,
            missing_bodies: vec![],
        }
    }

    #[test]
    fn amplification_counts_overlapping_favorable_transits() {
        let window = consensus(100.0, 200.0, 7.0);
        let transit = transit_analysis(vec![
            AnalysisWindow::new(90.0, 110.0, MethodId::Transit, Influence::Favorable, 7.0, 0.25),
            AnalysisWindow::new(150.0, 160.0, MethodId::Transit, Influence::Favorable, 7.0, 0.25),
            // Unfavorable overlap must not count.
            AnalysisWindow::new(120.0, 130.0, MethodId::Transit, Influence::Unfavorable, 3.0, 0.25),
            // Favorable but disjoint must not count.
            AnalysisWindow::new(300.0, 310.0, MethodId::Transit, Influence::Favorable, 8.0, 0.25),
        ]);
        assert!((transit_amplification(&window, Some(&transit)) - 1.2).abs() < 1e-12);
        assert_eq!(transit_amplification(&window, None), 1.0);
    }

    #[test]
    fn narrowing_keeps_the_front_four_fifths() {
        let refined = narrow(&consensus(100.0, 200.0, 7.0));
        assert_eq!(refined.start_jd, 100.0);
        assert!((refined.end_jd - 180.0).abs() < 1e-9);
        assert_eq!(refined.narrowing_factor, 0.8);
    }

    #[test]
    fn aspect_support_stays_on_the_unit_band() {
        let chart = chart();
        let support =
            midpoint_aspect_support(&consensus(2_460_000.0, 2_460_100.0, 7.0), &chart).unwrap();
        assert!((-1.0..=1.0).contains(&support));
    }

    #[test]
    fn final_score_includes_the_narrowing_bonus() {
        let chart = chart();
        let predictions = enhance(&[consensus(2_460_000.0, 2_460_100.0, 5.0)], None, &chart)
            .unwrap();
        assert_eq!(predictions.len(), 1);
        let p = &predictions[0];
        let expected = 5.0 * p.amplification + 2.0 * p.aspect_support.max(0.0) + 0.6;
        assert!((p.final_score - expected).abs() < 1e-9);
    }

    #[test]
    fn rank_key_separates_windows_above_the_strength_cap() {
        let chart = chart();
        // Both windows share a midpoint, so their aspect support is
        // identical and only the combined scores differ.
        let predictions = enhance(
            &[
                consensus(2_460_000.0, 2_460_100.0, 9.6),
                consensus(2_460_040.0, 2_460_060.0, 10.0),
            ],
            None,
            &chart,
        )
        .unwrap();
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].window.start_jd, 2_460_040.0);
        assert!(predictions[0].final_score > 10.0);
        let gap = predictions[0].final_score - predictions[1].final_score;
        assert!((gap - 0.4).abs() < 1e-9, "gap {gap}");
    }

    #[test]
    fn predictions_sorted_by_final_score() {
        let chart = chart();
        let predictions = enhance(
            &[
                consensus(2_460_000.0, 2_460_050.0, 4.0),
                consensus(2_460_200.0, 2_460_250.0, 9.0),
            ],
            None,
            &chart,
        )
        .unwrap();
        assert_eq!(predictions.len(), 2);
        assert!(predictions[0].final_score >= predictions[1].final_score);
        assert_eq!(predictions[0].window.start_jd, 2_460_200.0);
    }

    #[test]
    fn empty_consensus_gives_empty_predictions() {
        let chart = chart();
        assert!(enhance(&[], None, &chart).unwrap().is_empty());
    }
}
