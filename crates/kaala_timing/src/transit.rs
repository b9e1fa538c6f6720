//! Transit analyzer.
//!
//! Walks the query range in monthly buckets and scores each bucket
//! midpoint for the event's transit bodies: sign strength, retrograde
//! emphasis, gandanta edges, house influence through the natal cusps,
//! and the mean aspect pressure against the natal positions.

use kaala_ephem::{ALL_BODIES, Body, longitude_of, Position};
use kaala_chart::{Sign, find_aspect, max_orb_deg, sign_strength};
use kaala_time::TimeInstant;

use crate::error::TimingError;
use crate::method::{AnalysisContext, TimingMethod};
use crate::scale::clamp_score;
use crate::types::{AnalysisWindow, Influence, MethodAnalysis, MethodId};

pub const DAYS_PER_MONTH: f64 = 30.4375;

const FAVORABLE_FLOOR: f64 = 5.5;
const UNFAVORABLE_CEILING: f64 = 4.5;

/// Degrees at either sign edge counted as gandanta.
const GANDANTA_BAND_DEG: f64 = 3.0;

pub struct TransitMethod;

impl TimingMethod for TransitMethod {
    fn id(&self) -> MethodId {
        MethodId::Transit
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<MethodAnalysis, TimingError> {
        let weight = self.weight(ctx.event);
        let mut windows = Vec::new();

        let missing: Vec<Body> =
            ALL_BODIES.into_iter().filter(|b| ctx.chart.position(*b).is_none()).collect();

        let mut bucket_start = ctx.start_jd;
        while bucket_start < ctx.end_jd {
            let bucket_end = (bucket_start + DAYS_PER_MONTH).min(ctx.end_jd);
            let midpoint = TimeInstant::from_jd((bucket_start + bucket_end) / 2.0);

            let bodies = ctx.event.relevant_bodies();
            let mut total = 0.0;
            for &body in bodies {
                let pos = longitude_of(body, &midpoint)?;
                total += body_score(ctx, body, &pos);
            }
            let score = clamp_score(total / bodies.len() as f64);

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
                MethodId::Transit,
                influence,
                score,
                weight,
            ));

            bucket_start += DAYS_PER_MONTH;
        }

        Ok(MethodAnalysis { method: MethodId::Transit, weight, windows, missing_bodies: missing })
    }
}

fn body_score(ctx: &AnalysisContext<'_>, body: Body, pos: &Position) -> f64 {
    let sign = Sign::from_index(pos.sign_index);
    let mut strength = 5.0 + sign_strength(body, sign);
    if pos.retrograde {
        strength += 1.0;
    }
    if pos.degree_in_sign <= GANDANTA_BAND_DEG
        || pos.degree_in_sign >= 30.0 - GANDANTA_BAND_DEG
    {
        strength -= 0.5;
    }

    let house = ctx.chart.house_of_longitude(pos.longitude);
    let house_influence = house_influence(body, house);

    // Mean aspect pressure against every natal body present: ±1 scaled
    // by orb tightness, harmonious positive, challenging negative.
    let mut aspect_sum = 0.0;
    let mut aspect_count = 0u32;
    for natal_body in ctx.chart.bodies_present() {
        let Some(natal) = ctx.chart.position(natal_body) else { continue };
        if let Some(a) = find_aspect(pos.longitude, natal.longitude, body, natal_body) {
            let tightness = 1.0 - a.orb / max_orb_deg(body, natal_body, a.kind);
            if a.kind.is_harmonious() {
                aspect_sum += tightness;
            } else if a.kind.is_challenging() {
                aspect_sum -= tightness;
            } else {
                aspect_sum += 0.25 * tightness;
            }
            aspect_count += 1;
        }
    }
    let aspect_mean =
        if aspect_count == 0 { 0.0 } else { aspect_sum / f64::from(aspect_count) };

    let retro_emphasis = if pos.retrograde { retrograde_emphasis(body) } else { 0.0 };

    clamp_score(strength + house_influence + aspect_mean + retro_emphasis)
}

/// Transit house emphasis per body: angular dignity plus the upachaya
/// growth houses each body favors.
fn house_influence(body: Body, house: u8) -> f64 {
    let table: &[(u8, f64)] = match body {
        Body::Sun => &[(1, 3.0), (5, 2.0), (9, 2.0), (10, 3.0), (11, 2.0)],
        Body::Moon => &[(1, 2.0), (4, 3.0), (7, 2.0), (10, 1.0)],
        Body::Mars => &[(1, 2.0), (3, 3.0), (6, 2.0), (10, 2.0), (11, 2.0)],
        Body::Mercury => &[(1, 2.0), (3, 2.0), (6, 2.0), (10, 2.0), (11, 2.0)],
        Body::Jupiter => &[(1, 3.0), (2, 2.0), (5, 3.0), (9, 3.0), (11, 3.0)],
        Body::Venus => &[(1, 2.0), (2, 3.0), (4, 2.0), (7, 3.0), (11, 2.0)],
        Body::Saturn => &[(3, 3.0), (6, 3.0), (10, 2.0), (11, 3.0)],
        Body::Rahu | Body::Ketu => &[],
    };
    table.iter().find(|(h, _)| *h == house).map_or(0.0, |(_, v)| *v)
}

/// Retrograde emphasis on top of the flat +1 strength bump.
const fn retrograde_emphasis(body: Body) -> f64 {
    match body {
        Body::Mercury => 2.0,
        Body::Venus => 1.5,
        Body::Mars => 2.5,
        Body::Jupiter => 3.0,
        Body::Saturn => 2.0,
        _ => 1.0,
    }
}
