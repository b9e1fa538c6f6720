//! Ecliptic longitude of a body at an instant.

use kaala_time::{TimeInstant, centuries_since_j2000};

use crate::angle::normalize_360;
use crate::body::Body;
use crate::elements::{mean_elements, mean_node_deg};
use crate::error::EphemError;
use crate::kepler::{solve_kepler, true_anomaly_rad};
use crate::motion;
use crate::perturb::{nutation_aberration_deg, periodic_terms_deg};

/// A geocentric ecliptic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Ecliptic longitude in [0, 360).
    pub longitude: f64,
    /// Zodiac sign index, 0 = Aries … 11 = Pisces.
    pub sign_index: u8,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
    pub retrograde: bool,
}

impl Position {
    pub fn from_longitude(longitude: f64, retrograde: bool) -> Self {
        let lon = normalize_360(longitude);
        Self {
            longitude: lon,
            sign_index: ((lon / 30.0) as u8) % 12,
            degree_in_sign: lon % 30.0,
            retrograde,
        }
    }
}

/// Longitude only, without the motion sampling. Shared with the motion
/// sampler so the two never recurse into each other.
pub(crate) fn raw_longitude(body: Body, jd: f64) -> Result<f64, EphemError> {
    let t = centuries_since_j2000(jd);

    let Some(el) = mean_elements(body) else {
        let node = mean_node_deg(t);
        return Ok(match body {
            Body::Ketu => normalize_360(node + 180.0),
            _ => node,
        });
    };

    let m_rad = normalize_360(el.mean_anomaly.eval(t)).to_radians();
    let ecc = el.eccentricity.eval(t);
    let e_anom = solve_kepler(body, m_rad, ecc)?;
    let v = true_anomaly_rad(e_anom, ecc);

    // Equation of center applied to the mean longitude, then the
    // periodic and nutation/aberration corrections.
    let mut lon = el.mean_longitude.eval(t) + (v - m_rad).to_degrees();
    lon += periodic_terms_deg(body, t, m_rad);
    lon += nutation_aberration_deg(t);
    Ok(normalize_360(lon))
}

/// The position of a body at an instant.
///
/// The retrograde flag comes from the same ±1-day sampling as
/// [`crate::motion_state`].
pub fn longitude_of(body: Body, instant: &TimeInstant) -> Result<Position, EphemError> {
    let jd = instant.jd();
    let lon = raw_longitude(body, jd)?;
    let state = motion::motion_state_at_jd(body, jd)?;
    Ok(Position::from_longitude(lon, state.retrograde))
}
