//! Kepler's equation, solved by Newton–Raphson.
//!
//! `E − e·sin E = M` for the eccentric anomaly E. Non-convergence is a
//! hard error; there is no silent fallback to the mean anomaly.

use std::f64::consts::PI;

use crate::body::Body;
use crate::error::EphemError;

/// Convergence tolerance on the residual `E − e·sin E − M`, radians.
pub const KEPLER_TOLERANCE_RAD: f64 = 1e-6;

/// Iteration cap before the solver reports failure.
pub const KEPLER_MAX_ITERATIONS: u32 = 100;

/// Solves Kepler's equation for the eccentric anomaly, radians.
///
/// Seeds with M for small eccentricity, π otherwise (the standard guard
/// against the slow-convergence region near perihelion).
pub fn solve_kepler(
    body: Body,
    mean_anomaly_rad: f64,
    eccentricity: f64,
) -> Result<f64, EphemError> {
    let mut e_anom = if eccentricity < 0.8 { mean_anomaly_rad } else { PI };

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let residual = e_anom - eccentricity * e_anom.sin() - mean_anomaly_rad;
        if residual.abs() < KEPLER_TOLERANCE_RAD {
            return Ok(e_anom);
        }
        e_anom -= residual / (1.0 - eccentricity * e_anom.cos());
    }

    Err(EphemError::KeplerNoConvergence {
        body: body.name(),
        mean_anomaly_deg: mean_anomaly_rad.to_degrees(),
        eccentricity,
    })
}

/// True anomaly from eccentric anomaly via the half-angle form,
/// radians. Quadrant-correct through `atan2`.
pub fn true_anomaly_rad(eccentric_anomaly_rad: f64, eccentricity: f64) -> f64 {
    2.0 * f64::atan2(
        (1.0 + eccentricity).sqrt() * (eccentric_anomaly_rad / 2.0).sin(),
        (1.0 - eccentricity).sqrt() * (eccentric_anomaly_rad / 2.0).cos(),
    )
}
