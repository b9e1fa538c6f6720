//! Greenwich Mean Sidereal Time, local sidereal time, and mean obliquity.
//!
//! The GMST polynomial is the low-precision expression in degrees on
//! days/centuries from J2000 (Meeus ch. 12 truncation); the obliquity is
//! a linear truncation of the Laskar series. Both are adequate for the
//! arcminute-level house and aspect work built on top of them.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

fn wrap_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Greenwich Mean Sidereal Time in degrees at a UT Julian Date.
///
/// GMST = 280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000
/// with d days and T centuries from J2000. Returns [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    wrap_360(
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Local sidereal time from GMST and observer east longitude, degrees.
///
/// LST = GMST + longitude_east. Returns [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, east_longitude_deg: f64) -> f64 {
    wrap_360(gmst_deg + east_longitude_deg)
}

/// Mean obliquity of the ecliptic in degrees at T Julian centuries
/// from J2000.
pub fn mean_obliquity_deg(t_centuries: f64) -> f64 {
    23.4393 - 0.0130 * t_centuries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 51s ≈ 99.96°.
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.96).abs() < 0.05, "GMST = {g}°, expected ~99.96°");
    }

    #[test]
    fn gmst_advances_about_361_degrees_per_day() {
        let g1 = gmst_deg(J2000_JD);
        let g2 = gmst_deg(J2000_JD + 1.0);
        let advance = wrap_360(g2 - g1);
        assert!((advance - 0.9856).abs() < 0.01, "daily drift = {advance}°");
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_415_020.5, 2_451_544.5, 2_451_545.0, 2_460_000.5, 2_488_070.0] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range at {jd}: {g}");
        }
    }

    #[test]
    fn lst_east_offset_wraps() {
        let lst = local_sidereal_time_deg(350.0, 77.2);
        assert!((lst - 67.2).abs() < 1e-9);
    }

    #[test]
    fn lst_west_longitude_is_negative_offset() {
        let lst = local_sidereal_time_deg(10.0, -74.0);
        assert!((lst - 296.0).abs() < 1e-9);
    }

    #[test]
    fn obliquity_near_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.4393).abs() < 1e-9);
        // Slowly decreasing.
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
    }
}
