//! Apparent motion sampling: daily rate, retrograde, stationary.

use kaala_time::TimeInstant;

use crate::angle::signed_delta_deg;
use crate::body::Body;
use crate::error::EphemError;
use crate::position::raw_longitude;

/// Below this apparent rate a body counts as stationary, °/day.
pub const STATIONARY_LIMIT_DEG_PER_DAY: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Wrap-corrected forward difference over one day, °/day.
    /// Negative while retrograde.
    pub daily_motion_deg: f64,
    pub retrograde: bool,
    pub stationary: bool,
}

/// Samples longitudes one day either side of the instant.
///
/// Retrograde iff the forward difference is negative; stationary iff
/// either one-day difference falls under the limit, which catches the
/// station on whichever side of the turn the instant lands.
pub fn motion_state(body: Body, instant: &TimeInstant) -> Result<MotionState, EphemError> {
    motion_state_at_jd(body, instant.jd())
}

pub(crate) fn motion_state_at_jd(body: Body, jd: f64) -> Result<MotionState, EphemError> {
    if body.is_node() {
        // The mean node regresses at a constant rate; it never stations.
        return Ok(MotionState {
            daily_motion_deg: -body.mean_daily_motion_deg(),
            retrograde: true,
            stationary: false,
        });
    }

    let prev = raw_longitude(body, jd - 1.0)?;
    let here = raw_longitude(body, jd)?;
    let next = raw_longitude(body, jd + 1.0)?;

    let forward = signed_delta_deg(here, next);
    let back = signed_delta_deg(prev, here);

    Ok(MotionState {
        daily_motion_deg: forward,
        retrograde: forward < 0.0,
        stationary: forward.abs() < STATIONARY_LIMIT_DEG_PER_DAY
            || back.abs() < STATIONARY_LIMIT_DEG_PER_DAY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaala_time::CivilTime;

    fn instant(year: i32, month: u8, day: u8) -> TimeInstant {
        TimeInstant::new(CivilTime::new(year, month, day, 0, 0, 0.0))
    }

    #[test]
    fn sun_direct_at_about_one_degree_per_day() {
        let s = motion_state(Body::Sun, &instant(2024, 4, 10)).unwrap();
        assert!(!s.retrograde);
        assert!(!s.stationary);
        assert!((0.95..1.05).contains(&s.daily_motion_deg), "{}", s.daily_motion_deg);
    }

    #[test]
    fn moon_fast_and_direct() {
        let s = motion_state(Body::Moon, &instant(2024, 4, 10)).unwrap();
        assert!(!s.retrograde);
        assert!((9.0..18.0).contains(&s.daily_motion_deg), "{}", s.daily_motion_deg);
    }

    #[test]
    fn saturn_slow() {
        let s = motion_state(Body::Saturn, &instant(2024, 4, 10)).unwrap();
        assert!(s.daily_motion_deg.abs() < 0.2, "{}", s.daily_motion_deg);
    }

    #[test]
    fn nodes_always_retrograde_never_stationary() {
        for body in [Body::Rahu, Body::Ketu] {
            let s = motion_state(body, &instant(2024, 4, 10)).unwrap();
            assert!(s.retrograde);
            assert!(!s.stationary);
            assert!(s.daily_motion_deg < 0.0);
        }
    }

    #[test]
    fn wrap_at_pisces_aries_boundary_reads_forward() {
        // The Sun crosses 360° → 0° around the March equinox; the
        // forward difference must stay near +1, not −359.
        let s = motion_state(Body::Sun, &instant(2024, 3, 20)).unwrap();
        assert!((0.9..1.1).contains(&s.daily_motion_deg), "{}", s.daily_motion_deg);
    }
}
