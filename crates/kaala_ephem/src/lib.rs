//! Analytic ecliptic longitudes for the nine classical bodies.
//!
//! Mean orbital elements (quadratic/cubic polynomials on Julian
//! centuries from J2000) feed a Newton–Raphson Kepler solver; the
//! equation of center is applied to the mean longitude, followed by a
//! small per-body set of periodic terms and a combined nutation +
//! aberration correction. Rahu and Ketu are the mean lunar node pair
//! and bypass the Kepler path entirely.
//!
//! Accuracy is at the arcminute-to-degree level, which is sufficient
//! for sign placement, house placement, and orb-based aspect work.
//! This is not an ephemeris-grade theory.

pub mod angle;
pub mod body;
pub mod elements;
pub mod error;
pub mod kepler;
pub mod motion;
pub mod perturb;
pub mod position;

pub use angle::{normalize_360, separation_deg, signed_delta_deg};
pub use body::{ALL_BODIES, Body, ELEMENT_BODIES};
pub use elements::{MeanElements, mean_elements, mean_node_deg};
pub use error::EphemError;
pub use kepler::{KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE_RAD, solve_kepler, true_anomaly_rad};
pub use motion::{MotionState, STATIONARY_LIMIT_DEG_PER_DAY, motion_state};
pub use perturb::{nutation_aberration_deg, periodic_terms_deg};
pub use position::{Position, longitude_of};
