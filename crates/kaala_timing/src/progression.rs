//! Progression analyzer (day-for-a-year).
//!
//! Quarterly buckets; each bucket midpoint maps an age in years onto a
//! progressed instant that many days after birth. Progressed positions
//! are scored for sign change, sign relevance, house relevance, and
//! aspects to the natal chart, with a solar-arc cross-check against
//! the natal ascendant.

use kaala_chart::{Sign, find_aspect};
use kaala_ephem::{Body, longitude_of, normalize_360};
use kaala_time::TimeInstant;

use crate::error::TimingError;
use crate::method::{AnalysisContext, TimingMethod};
use crate::scale::clamp_score;
use crate::types::{AnalysisWindow, Influence, MethodAnalysis, MethodId};

pub const DAYS_PER_QUARTER: f64 = 91.3125;

const FAVORABLE_FLOOR: f64 = 6.5;
const UNFAVORABLE_CEILING: f64 = 4.0;

pub struct ProgressionMethod;

impl TimingMethod for ProgressionMethod {
    fn id(&self) -> MethodId {
        MethodId::Progression
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<MethodAnalysis, TimingError> {
        let weight = self.weight(ctx.event);
        let mut windows = Vec::new();
        let mut missing = Vec::new();

        let mut bucket_start = ctx.start_jd;
        while bucket_start < ctx.end_jd {
            let bucket_end = (bucket_start + DAYS_PER_QUARTER).min(ctx.end_jd);
            let mid_jd = (bucket_start + bucket_end) / 2.0;
            let age_years = (mid_jd - ctx.chart.birth_jd()) / 365.25;
            // Spans before birth have no progression.
            if age_years < 0.0 {
                bucket_start += DAYS_PER_QUARTER;
                continue;
            }
            let progressed = TimeInstant::from_jd(ctx.chart.birth_jd() + age_years);

            let solar_arc = solar_arc_deg(ctx, &progressed, &mut missing)?;

            let mut total = 0.0;
            let mut counted = 0usize;
            for &body in ctx.event.relevant_bodies() {
                let Some(natal) = ctx.chart.position(body) else {
                    if !missing.contains(&body) {
                        missing.push(body);
                    }
                    continue;
                };
                let prog = longitude_of(body, &progressed)?;
                total += body_score(ctx, body, natal.longitude, natal.sign_index, &prog, solar_arc);
                counted += 1;
            }

            if counted > 0 {
                let score = clamp_score(total / counted as f64);
                let influence = if score >= FAVORABLE_FLOOR {
                    Influence::Favorable
                } else if score <= UNFAVORABLE_CEILING {
                    Influence::Unfavorable
                } else {
                    Influence::Neutral
                };
                windows.push(AnalysisWindow::new(
                    bucket_start,
                    bucket_end,
                    MethodId::Progression,
                    influence,
                    score,
                    weight,
                ));
            }

            bucket_start += DAYS_PER_QUARTER;
        }

        missing.sort();
        missing.dedup();
        Ok(MethodAnalysis {
            method: MethodId::Progression,
            weight,
            windows,
            missing_bodies: missing,
        })
    }
}

/// The progressed-Sun arc, the directed-chart offset. `None` without a
/// natal Sun.
fn solar_arc_deg(
    ctx: &AnalysisContext<'_>,
    progressed: &TimeInstant,
    missing: &mut Vec<Body>,
) -> Result<Option<f64>, TimingError> {
    match ctx.chart.position(Body::Sun) {
        Some(natal_sun) => {
            let prog_sun = longitude_of(Body::Sun, progressed)?;
            Ok(Some(normalize_360(prog_sun.longitude - natal_sun.longitude)))
        }
        None => {
            if !missing.contains(&Body::Sun) {
                missing.push(Body::Sun);
            }
            Ok(None)
        }
    }
}

fn body_score(
    ctx: &AnalysisContext<'_>,
    body: Body,
    natal_longitude: f64,
    natal_sign_index: u8,
    prog: &kaala_ephem::Position,
    solar_arc: Option<f64>,
) -> f64 {
    let mut score = 5.0;

    if prog.sign_index != natal_sign_index {
        score += 0.5;
    }
    if ctx.event.relevant_bodies().contains(&Sign::from_index(prog.sign_index).ruler()) {
        score += 1.0;
    }
    let house = ctx.chart.house_of_longitude(prog.longitude);
    if ctx.event.relevant_houses().contains(&house) {
        score += 1.0;
    }

    for other in ctx.chart.bodies_present() {
        if other == body {
            continue;
        }
        let Some(natal_other) = ctx.chart.position(other) else { continue };
        if let Some(a) = find_aspect(prog.longitude, natal_other.longitude, body, other) {
            if a.kind.is_harmonious() {
                score += 0.5;
            } else if a.kind.is_challenging() {
                score -= 0.3;
            }
        }
    }

    // Solar-arc cross-check: the directed natal point against the
    // ascendant degree.
    if let Some(arc) = solar_arc {
        let directed = normalize_360(natal_longitude + arc);
        if let Some(a) = find_aspect(directed, ctx.chart.ascendant_deg(), body, body) {
            if a.kind.is_harmonious() {
                score += 0.5;
            }
        }
    }

    clamp_score(score)
}
