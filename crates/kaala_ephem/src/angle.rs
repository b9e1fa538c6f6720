//! Angle normalization and wrap-aware differences, degrees.

/// Normalizes an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest angular separation between two longitudes, in [0, 180].
pub fn separation_deg(a: f64, b: f64) -> f64 {
    let d = (normalize_360(a) - normalize_360(b)).abs();
    if d > 180.0 { 360.0 - d } else { d }
}

/// Signed wrap-aware delta `to − from`, in (−180, 180].
///
/// A 359.9° → 0.1° crossing reads as +0.2, never −359.8.
pub fn signed_delta_deg(from: f64, to: f64) -> f64 {
    let d = normalize_360(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}
