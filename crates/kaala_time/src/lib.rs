//! Temporal foundation: civil timestamps, Julian Day conversion, and
//! sidereal time.
//!
//! Everything above this crate speaks Julian Days. Civil input enters
//! through [`CivilTime`], is converted once, and travels as a
//! [`TimeInstant`] with the JD cached alongside it.

pub mod julian;
pub mod sidereal;

pub use julian::{
    CivilTime, DAYS_PER_CENTURY, DAYS_PER_YEAR, J2000_JD, TimeInstant, calendar_to_jd,
    centuries_since_j2000, days_since_j2000, jd_to_calendar,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg, mean_obliquity_deg};
