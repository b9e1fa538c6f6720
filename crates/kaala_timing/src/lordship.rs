//! Period-table (lordship) analyzer.
//!
//! Scores each major/minor sub-period overlapping the query range from
//! the lords' relevance to the event, their mutual relation, the minor
//! lord's natal dignity and conjunctions, its house lordships, and its
//! nature.

use kaala_chart::{Dignity, Nature, Relation, Sign, conjunction_orb_deg, dignity, nature,
    relation};
use kaala_ephem::separation_deg;

use crate::method::{AnalysisContext, TimingMethod};
use crate::scale::clamp_score;
use crate::types::{AnalysisWindow, EventCategory, Influence, MethodAnalysis, MethodId};
use crate::error::TimingError;

const FAVORABLE_FLOOR: f64 = 6.0;
const UNFAVORABLE_CEILING: f64 = 3.0;

pub struct LordshipMethod;

impl TimingMethod for LordshipMethod {
    fn id(&self) -> MethodId {
        MethodId::Lordship
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<MethodAnalysis, TimingError> {
        let weight = self.weight(ctx.event);
        let mut windows = Vec::new();
        let mut missing = Vec::new();

        for period in ctx.periods.overlapping(ctx.start_jd, ctx.end_jd) {
            let score = score_sub_period(ctx, period.major, period.minor, &mut missing);
            let influence = if score >= FAVORABLE_FLOOR {
                Influence::Favorable
            } else if score <= UNFAVORABLE_CEILING {
                Influence::Unfavorable
            } else {
                Influence::Neutral
            };
            windows.push(AnalysisWindow::new(
                period.start_jd.max(ctx.start_jd),
                period.end_jd.min(ctx.end_jd),
                MethodId::Lordship,
                influence,
                score,
                weight,
            ));
        }

        missing.sort();
        missing.dedup();
        Ok(MethodAnalysis { method: MethodId::Lordship, weight, windows, missing_bodies: missing })
    }
}

fn score_sub_period(
    ctx: &AnalysisContext<'_>,
    major: kaala_ephem::Body,
    minor: kaala_ephem::Body,
    missing: &mut Vec<kaala_ephem::Body>,
) -> f64 {
    let relevant = ctx.event.relevant_bodies();
    let mut score = 5.0;

    if relevant.contains(&minor) {
        score += 2.5;
    }
    if relevant.contains(&major) {
        score += 1.5;
    }

    match relation(major, minor) {
        Relation::Friend => score += 1.5,
        Relation::Enemy => score -= 1.5,
        Relation::Neutral => {}
    }

    // Dignity and conjunction factors need the minor lord's natal
    // placement; without it they are skipped and the body recorded.
    if let Some(pos) = ctx.chart.position(minor) {
        match dignity(minor, Sign::from_index(pos.sign_index)) {
            Dignity::Exalted | Dignity::OwnSign => score += 1.5,
            Dignity::Debilitated => score -= 1.5,
            _ => {}
        }
        for other in ctx.chart.bodies_present() {
            if other == minor {
                continue;
            }
            let Some(other_pos) = ctx.chart.position(other) else { continue };
            if separation_deg(pos.longitude, other_pos.longitude)
                <= conjunction_orb_deg(minor, other)
            {
                match nature(other) {
                    Nature::Benefic => score += 0.5,
                    Nature::Malefic => score -= 0.3,
                    Nature::Neutral => {}
                }
            }
        }
    } else {
        missing.push(minor);
    }

    let houses = ctx.chart.lordships(minor);
    for h in ctx.event.relevant_houses() {
        if houses.contains(h) {
            score += 1.0;
        }
    }

    match nature(minor) {
        Nature::Benefic => score += 0.5,
        Nature::Malefic => {
            if matches!(ctx.event, EventCategory::Career | EventCategory::Health) {
                score += 0.3;
            } else {
                score -= 0.3;
            }
        }
        Nature::Neutral => {}
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period_table::{PeriodTable, SubPeriod};
    use kaala_chart::{GeoLocation, NatalChart};
    use kaala_ephem::Body;
    use kaala_time::{CivilTime, TimeInstant};

    fn chart() -> NatalChart {
        let birth = TimeInstant::new(CivilTime::new(1990, 5, 15, 14, 30, 0.0));
        NatalChart::for_instant(&birth, &GeoLocation::new(28.6139, 77.2090)).unwrap()
    }

    fn ctx<'a>(
        chart: &'a NatalChart,
        periods: &'a PeriodTable,
        event: EventCategory,
    ) -> AnalysisContext<'a> {
        AnalysisContext {
            chart,
            periods,
            event,
            start_jd: 2_460_000.0,
            end_jd: 2_460_700.0,
        }
    }

    #[test]
    fn venus_minor_period_scores_high_for_marriage() {
        let chart = chart();
        let periods = PeriodTable::new(vec![SubPeriod::new(
            Body::Venus,
            Body::Venus,
            2_460_100.0,
            2_460_400.0,
        )])
        .unwrap();
        let analysis =
            LordshipMethod.analyze(&ctx(&chart, &periods, EventCategory::Marriage)).unwrap();
        assert_eq!(analysis.windows.len(), 1);
        // Venus is both major and minor, event-relevant and benefic.
        assert!(analysis.windows[0].score >= 6.0, "score {}", analysis.windows[0].score);
        assert_eq!(analysis.windows[0].influence, Influence::Favorable);
    }

    #[test]
    fn windows_clip_to_the_query_range() {
        let chart = chart();
        let periods = PeriodTable::new(vec![SubPeriod::new(
            Body::Saturn,
            Body::Mercury,
            2_459_000.0,
            2_461_000.0,
        )])
        .unwrap();
        let analysis =
            LordshipMethod.analyze(&ctx(&chart, &periods, EventCategory::Career)).unwrap();
        let w = &analysis.windows[0];
        assert_eq!(w.start_jd, 2_460_000.0);
        assert_eq!(w.end_jd, 2_460_700.0);
    }

    #[test]
    fn missing_minor_lord_is_recorded_not_fatal() {
        let full = chart();
        let mut positions: [Option<kaala_ephem::Position>; 9] = [None; 9];
        for body in kaala_ephem::ALL_BODIES {
            positions[body.index()] = full.position(body);
        }
        positions[Body::Mercury.index()] = None;
        let partial = NatalChart::new(
            positions,
            full.ascendant_deg(),
            *full.cusps(),
            full.birth_jd(),
        );
        let periods = PeriodTable::new(vec![SubPeriod::new(
            Body::Saturn,
            Body::Mercury,
            2_460_100.0,
            2_460_300.0,
        )])
        .unwrap();
        let analysis =
            LordshipMethod.analyze(&ctx(&partial, &periods, EventCategory::Career)).unwrap();
        assert_eq!(analysis.missing_bodies, vec![Body::Mercury]);
        assert_eq!(analysis.windows.len(), 1);
    }

    #[test]
    fn enemy_pair_scores_below_friend_pair() {
        let chart = chart();
        // Same Saturn major, neither minor marriage-relevant: Saturn
        // regards the Sun as an enemy and Mercury as a friend, a
        // three-point swing the remaining factors cannot overturn here.
        let enemy = PeriodTable::new(vec![SubPeriod::new(
            Body::Saturn,
            Body::Sun,
            2_460_100.0,
            2_460_300.0,
        )])
        .unwrap();
        let friend = PeriodTable::new(vec![SubPeriod::new(
            Body::Saturn,
            Body::Mercury,
            2_460_100.0,
            2_460_300.0,
        )])
        .unwrap();
        let e = LordshipMethod
            .analyze(&ctx(&chart, &enemy, EventCategory::Marriage))
            .unwrap();
        let f = LordshipMethod
            .analyze(&ctx(&chart, &friend, EventCategory::Marriage))
            .unwrap();
        assert!(e.windows[0].score < f.windows[0].score);
    }

    #[test]
    fn periods_outside_range_produce_no_windows() {
        let chart = chart();
        let periods = PeriodTable::new(vec![SubPeriod::new(
            Body::Venus,
            Body::Moon,
            2_400_000.0,
            2_400_100.0,
        )])
        .unwrap();
        let analysis =
            LordshipMethod.analyze(&ctx(&chart, &periods, EventCategory::Marriage)).unwrap();
        assert!(analysis.windows.is_empty());
    }
}
