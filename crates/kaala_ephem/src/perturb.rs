//! Periodic longitude corrections.
//!
//! Each body gets a small documented term set keyed on its mean
//! anomaly: the Moon the four classical inequalities (evection,
//! variation, annual equation, reduction to the ecliptic), the planets
//! a single long-period term apiece. The Sun carries no terms here —
//! its equation of center already falls out of the Kepler solution,
//! and adding the 1.915°/0.020° series again would count it twice. The
//! lunar elongation and latitude arguments are the coarse
//! approximations D ≈ 2M and F ≈ 0.9·M.

use crate::body::Body;

/// Periodic correction to the ecliptic longitude, degrees.
///
/// `t` is Julian centuries from J2000; `mean_anomaly_rad` the body's
/// own mean anomaly. Zero for the Sun and the nodes.
pub fn periodic_terms_deg(body: Body, t: f64, mean_anomaly_rad: f64) -> f64 {
    let m = mean_anomaly_rad;
    match body {
        Body::Sun => 0.0,
        Body::Moon => {
            let d = 2.0 * m;
            let f = 0.9 * m;
            6.289 * m.sin() + 1.274 * (d - m).sin() + 0.658 * d.sin() + 0.213 * (2.0 * f).sin()
        }
        Body::Mercury => 0.0001 * (100.0 + 100.0 * t).to_radians().sin(),
        Body::Venus => 0.00005 * (50.0 + 50.0 * t).to_radians().sin(),
        Body::Mars => 0.00002 * (200.0 + 20.0 * t).to_radians().sin(),
        Body::Jupiter => 0.00001 * (300.0 + 10.0 * t).to_radians().sin(),
        Body::Saturn => 0.000005 * (150.0 + 5.0 * t).to_radians().sin(),
        Body::Rahu | Body::Ketu => 0.0,
    }
}

/// Combined nutation-in-longitude and annual-aberration correction,
/// degrees: `0.0048·sin Ω − 0.0057·sin L☉` with the mean node and mean
/// solar longitude arguments.
pub fn nutation_aberration_deg(t: f64) -> f64 {
    let nutation = 0.0048 * (125.0 - 1_934.1 * t).to_radians().sin();
    let aberration = -0.0057 * (280.5 + 36_000.8 * t).to_radians().sin();
    nutation + aberration
}
