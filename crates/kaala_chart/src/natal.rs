//! The frozen natal chart snapshot.
//!
//! Positions are captured once at the birth instant and never mutated;
//! every analyzer reads from this snapshot. Bodies may be absent (a
//! caller with partial data), and readers degrade per missing body.

use kaala_time::TimeInstant;
use kaala_ephem::{ALL_BODIES, Body, Position, longitude_of};

use crate::error::ChartError;
use crate::houses::{GeoLocation, ascendant_deg, house_cusps, house_of};
use crate::sign::Sign;

#[derive(Debug, Clone, PartialEq)]
pub struct NatalChart {
    positions: [Option<Position>; 9],
    ascendant_deg: f64,
    cusps: [f64; 12],
    birth_jd: f64,
}

impl NatalChart {
    /// Assembles a chart from caller-supplied parts. Positions are
    /// indexed by [`Body::index`]; `None` marks a body the caller could
    /// not supply.
    pub fn new(
        positions: [Option<Position>; 9],
        ascendant_deg: f64,
        cusps: [f64; 12],
        birth_jd: f64,
    ) -> Self {
        Self { positions, ascendant_deg, cusps, birth_jd }
    }

    /// Builds the full nine-body chart at a birth instant and location.
    pub fn for_instant(
        instant: &TimeInstant,
        location: &GeoLocation,
    ) -> Result<Self, ChartError> {
        let mut positions: [Option<Position>; 9] = [None; 9];
        for body in ALL_BODIES {
            positions[body.index()] = Some(longitude_of(body, instant)?);
        }
        Ok(Self {
            positions,
            ascendant_deg: ascendant_deg(instant, location)?,
            cusps: house_cusps(instant, location)?,
            birth_jd: instant.jd(),
        })
    }

    pub fn position(&self, body: Body) -> Option<Position> {
        self.positions[body.index()]
    }

    pub const fn ascendant_deg(&self) -> f64 {
        self.ascendant_deg
    }

    pub fn ascendant_sign(&self) -> Sign {
        Sign::from_longitude(self.ascendant_deg)
    }

    pub const fn cusps(&self) -> &[f64; 12] {
        &self.cusps
    }

    pub const fn birth_jd(&self) -> f64 {
        self.birth_jd
    }

    pub fn house_of_longitude(&self, longitude_deg: f64) -> u8 {
        house_of(longitude_deg, &self.cusps)
    }

    /// Whole-sign houses (counted from the ascendant sign) whose sign
    /// this body rules. Empty for the nodes.
    pub fn lordships(&self, body: Body) -> Vec<u8> {
        let first = self.ascendant_sign();
        (1..=12).filter(|&h| first.nth_from(h).ruler() == body).collect()
    }

    pub fn bodies_present(&self) -> impl Iterator<Item = Body> + '_ {
        ALL_BODIES.into_iter().filter(|b| self.positions[b.index()].is_some())
    }
}
