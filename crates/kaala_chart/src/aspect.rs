//! The aspect engine.
//!
//! Nine standard angles with per-body orb limits and a 0–10 strength
//! model, plus the directional Vedic special aspects of Mars, Jupiter
//! and Saturn and the mutual-aspect test.

use kaala_ephem::{Body, normalize_360, separation_deg};

use crate::relations::{Nature, nature};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectKind {
    Conjunction,
    SemiSextile,
    SemiSquare,
    Sextile,
    Square,
    Trine,
    Sesquiquadrate,
    Quincunx,
    Opposition,
}

/// All kinds in ascending angle order, the order candidate angles are
/// tried in.
pub const ALL_ASPECT_KINDS: [AspectKind; 9] = [
    AspectKind::Conjunction,
    AspectKind::SemiSextile,
    AspectKind::SemiSquare,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Sesquiquadrate,
    AspectKind::Quincunx,
    AspectKind::Opposition,
];

impl AspectKind {
    pub const fn angle_deg(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::SemiSextile => 30.0,
            AspectKind::SemiSquare => 45.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Sesquiquadrate => 135.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::SemiSextile => "Semi-sextile",
            AspectKind::SemiSquare => "Semi-square",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Sesquiquadrate => "Sesquiquadrate",
            AspectKind::Quincunx => "Quincunx",
            AspectKind::Opposition => "Opposition",
        }
    }

    pub const fn is_harmonious(&self) -> bool {
        matches!(self, AspectKind::Conjunction | AspectKind::Sextile | AspectKind::Trine)
    }

    pub const fn is_challenging(&self) -> bool {
        matches!(self, AspectKind::Square | AspectKind::Opposition)
    }
}

/// A standard aspect between two longitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    pub kind: AspectKind,
    pub orb: f64,
    pub strength: f64,
}

/// A directional special aspect cast by Mars, Jupiter or Saturn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialAspect {
    pub angle_deg: f64,
    pub orb: f64,
    pub strength: f64,
}

/// Both directions of a mutual aspect. Mutual aspects are always
/// treated as significant regardless of individual strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutualAspect {
    pub forward: Aspect,
    pub reverse: Aspect,
}

const SPECIAL_ORB_DEG: f64 = 8.0;

fn body_orb(body: Body, kind: AspectKind) -> f64 {
    let wide = matches!(body, Body::Sun | Body::Moon | Body::Jupiter | Body::Saturn);
    match kind {
        AspectKind::Conjunction | AspectKind::Opposition => {
            if wide { 8.0 } else { 6.0 }
        }
        AspectKind::Square | AspectKind::Trine => {
            if wide { 7.0 } else { 5.0 }
        }
        _ => 4.0,
    }
}

/// The orb limit for a pair at a given angle: the wider of the two
/// bodies' individual limits.
pub fn max_orb_deg(a: Body, b: Body, kind: AspectKind) -> f64 {
    body_orb(a, kind).max(body_orb(b, kind))
}

/// Orb used when scanning for natal conjunctions.
pub fn conjunction_orb_deg(a: Body, b: Body) -> f64 {
    if a.is_luminary() && b.is_luminary() {
        10.0
    } else if matches!(a, Body::Jupiter | Body::Saturn) && matches!(b, Body::Jupiter | Body::Saturn)
    {
        8.0
    } else if matches!(a, Body::Mercury | Body::Venus | Body::Mars)
        && matches!(b, Body::Mercury | Body::Venus | Body::Mars)
    {
        6.0
    } else {
        5.0
    }
}

/// Strength of an aspect on the 0–10 scale.
///
/// Base falls linearly from 5 with the orb fraction; harmonious and
/// challenging angles add their emphasis, and benefic or malefic pair
/// chemistry tops it off.
pub fn aspect_strength(a: Body, b: Body, kind: AspectKind, orb: f64, max_orb: f64) -> f64 {
    let mut s = 5.0 - (orb / max_orb) * 3.0;
    if kind.is_harmonious() {
        s += 1.5;
    } else if kind.is_challenging() {
        s += 1.0;
    }
    match (nature(a), nature(b)) {
        (Nature::Benefic, Nature::Benefic) => s += 1.0,
        (Nature::Malefic, Nature::Malefic) => s += 0.5,
        _ => {}
    }
    s.clamp(0.0, 10.0)
}

/// The first qualifying aspect between two longitudes, trying angles
/// in ascending order. `None` when no angle is within orb.
pub fn find_aspect(lon_a: f64, lon_b: f64, a: Body, b: Body) -> Option<Aspect> {
    let sep = separation_deg(lon_a, lon_b);
    for kind in ALL_ASPECT_KINDS {
        let orb = (sep - kind.angle_deg()).abs();
        let max_orb = max_orb_deg(a, b, kind);
        if orb <= max_orb {
            return Some(Aspect { kind, orb, strength: aspect_strength(a, b, kind, orb, max_orb) });
        }
    }
    None
}

/// The directional special-aspect angles a body casts, empty for
/// bodies without them.
pub const fn special_angles(body: Body) -> &'static [f64] {
    match body {
        Body::Mars => &[90.0, 210.0, 240.0],
        Body::Jupiter => &[120.0, 150.0, 240.0],
        Body::Saturn => &[90.0, 210.0, 270.0],
        _ => &[],
    }
}

/// Special aspects cast from `from_lon` onto `to_lon`, measured along
/// the forward arc so the 210°/240°/270° casts are reachable.
pub fn special_aspects(body: Body, from_lon: f64, to_lon: f64) -> Vec<SpecialAspect> {
    let forward = normalize_360(to_lon - from_lon);
    special_angles(body)
        .iter()
        .filter_map(|&angle| {
            let orb = (forward - angle).abs();
            (orb <= SPECIAL_ORB_DEG).then_some(SpecialAspect {
                angle_deg: angle,
                orb,
                strength: SPECIAL_ORB_DEG - orb,
            })
        })
        .collect()
}

/// Whether `from` casts any aspect (standard or special) onto `to`.
pub fn casts_aspect(from: Body, from_lon: f64, to: Body, to_lon: f64) -> bool {
    find_aspect(from_lon, to_lon, from, to).is_some()
        || !special_aspects(from, from_lon, to_lon).is_empty()
}

/// A mutual aspect: each body's aspect set includes the other. Returns
/// the standard aspect seen from each side when both directions hold.
pub fn mutual_aspect(a: Body, lon_a: f64, b: Body, lon_b: f64) -> Option<MutualAspect> {
    if !casts_aspect(a, lon_a, b, lon_b) || !casts_aspect(b, lon_b, a, lon_a) {
        return None;
    }
    let forward = find_aspect(lon_a, lon_b, a, b)?;
    let reverse = find_aspect(lon_b, lon_a, b, a)?;
    Some(MutualAspect { forward, reverse })
}
