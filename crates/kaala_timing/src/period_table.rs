//! The caller-supplied major/minor period table.
//!
//! Generating the table (proportional-years systems and their nested
//! sub-division) is a collaborator's job; this module validates and
//! queries one. Validation happens once at construction, so every
//! consumer can assume sorted, non-overlapping, forward-running
//! periods.

use kaala_ephem::Body;

use crate::error::TimingError;

/// One major/minor period pair over a JD span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubPeriod {
    pub major: Body,
    pub minor: Body,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl SubPeriod {
    pub const fn new(major: Body, minor: Body, start_jd: f64, end_jd: f64) -> Self {
        Self { major, minor, start_jd, end_jd }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTable {
    periods: Vec<SubPeriod>,
}

impl PeriodTable {
    /// Validates and sorts. Periods must each run forward and must not
    /// overlap one another (touching endpoints are fine).
    pub fn new(mut periods: Vec<SubPeriod>) -> Result<Self, TimingError> {
        periods.sort_by(|a, b| a.start_jd.total_cmp(&b.start_jd));
        for p in &periods {
            if p.end_jd <= p.start_jd {
                return Err(TimingError::InvalidPeriodTable {
                    reason: "a sub-period must start before it ends",
                });
            }
        }
        for pair in periods.windows(2) {
            if pair[0].end_jd > pair[1].start_jd + 1e-9 {
                return Err(TimingError::InvalidPeriodTable {
                    reason: "sub-periods must not overlap",
                });
            }
        }
        Ok(Self { periods })
    }

    pub fn periods(&self) -> &[SubPeriod] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Sub-periods intersecting [start_jd, end_jd].
    pub fn overlapping(&self, start_jd: f64, end_jd: f64) -> impl Iterator<Item = &SubPeriod> {
        self.periods
            .iter()
            .filter(move |p| p.start_jd <= end_jd && start_jd <= p.end_jd)
    }
}
