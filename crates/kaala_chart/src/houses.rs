//! Ascendant, midheaven, and house cusps.
//!
//! The four angles come from the standard spherical forms on local
//! sidereal time and the obliquity; the intermediate cusps trisect each
//! quadrant between them. Geometry that degenerates (polar latitudes,
//! collapsed quadrants) is a hard [`ChartError::DegenerateHouseSystem`];
//! there is no fallback house system.

use kaala_time::{TimeInstant, centuries_since_j2000, gmst_deg, local_sidereal_time_deg,
    mean_obliquity_deg};
use kaala_ephem::normalize_360;

use crate::error::ChartError;

/// Above this latitude the ascendant/midheaven geometry is rejected.
pub const POLAR_LATITUDE_LIMIT_DEG: f64 = 66.5;

/// An observer location. East longitude positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self { latitude_deg, longitude_deg }
    }
}

fn lst_rad(instant: &TimeInstant, location: &GeoLocation) -> f64 {
    local_sidereal_time_deg(gmst_deg(instant.jd()), location.longitude_deg).to_radians()
}

fn obliquity_rad(instant: &TimeInstant) -> f64 {
    mean_obliquity_deg(centuries_since_j2000(instant.jd())).to_radians()
}

/// Ecliptic longitude of the ascendant, degrees in [0, 360).
///
/// λ_asc = atan2(cos LST, −(sin LST·cos ε + tan φ·sin ε)).
pub fn ascendant_deg(instant: &TimeInstant, location: &GeoLocation) -> Result<f64, ChartError> {
    if location.latitude_deg.abs() > POLAR_LATITUDE_LIMIT_DEG {
        return Err(ChartError::DegenerateHouseSystem { latitude_deg: location.latitude_deg });
    }
    let lst = lst_rad(instant, location);
    let eps = obliquity_rad(instant);
    let phi = location.latitude_deg.to_radians();
    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    Ok(normalize_360(asc.to_degrees()))
}

/// Ecliptic longitude of the midheaven at the location's LST,
/// degrees in [0, 360). λ_mc = atan2(sin LST, cos LST·cos ε).
pub fn midheaven_deg(instant: &TimeInstant, location: &GeoLocation) -> f64 {
    let lst = lst_rad(instant, location);
    let eps = obliquity_rad(instant);
    normalize_360(f64::atan2(lst.sin(), lst.cos() * eps.cos()).to_degrees())
}

/// Twelve house cusps, index 0 = first house. Cusps 1/4/7/10 are the
/// ascendant, IC, descendant, and midheaven; the rest trisect the
/// quadrants, so the array is strictly ordered around the ecliptic.
pub fn house_cusps(
    instant: &TimeInstant,
    location: &GeoLocation,
) -> Result<[f64; 12], ChartError> {
    let asc = ascendant_deg(instant, location)?;
    let mc = midheaven_deg(instant, location);

    // Arc from MC forward to the ascendant; its complement spans the
    // ascendant-to-IC quadrant. Either collapsing means the geometry
    // is unusable.
    let q_mc = normalize_360(asc - mc);
    if !(1.0..=179.0).contains(&q_mc) {
        return Err(ChartError::DegenerateHouseSystem { latitude_deg: location.latitude_deg });
    }
    let q_asc = 180.0 - q_mc;

    let ic = normalize_360(mc + 180.0);
    let dsc = normalize_360(asc + 180.0);

    Ok([
        asc,
        normalize_360(asc + q_asc / 3.0),
        normalize_360(asc + 2.0 * q_asc / 3.0),
        ic,
        normalize_360(ic + q_mc / 3.0),
        normalize_360(ic + 2.0 * q_mc / 3.0),
        dsc,
        normalize_360(dsc + q_asc / 3.0),
        normalize_360(dsc + 2.0 * q_asc / 3.0),
        mc,
        normalize_360(mc + q_mc / 3.0),
        normalize_360(mc + 2.0 * q_mc / 3.0),
    ])
}

/// The house (1..=12) containing a longitude: the house whose cusp was
/// most recently crossed moving forward around the ecliptic.
pub fn house_of(longitude_deg: f64, cusps: &[f64; 12]) -> u8 {
    let mut house = 1u8;
    let mut best_gap = f64::INFINITY;
    for (i, cusp) in cusps.iter().enumerate() {
        let gap = normalize_360(longitude_deg - cusp);
        if gap < best_gap {
            best_gap = gap;
            house = (i + 1) as u8;
        }
    }
    house
}
