//! Gregorian calendar ↔ Julian Day conversion.
//!
//! Source: Meeus, *Astronomical Algorithms* 2nd ed., ch. 7. The proleptic
//! Gregorian calendar is assumed for all dates; no Julian-calendar branch.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days per Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// A civil timestamp in Universal Time, proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl CivilTime {
    pub const fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        Self { year, month, day, hour, minute, second }
    }

    /// Fraction of the civil day elapsed, in [0, 1).
    pub fn day_fraction(&self) -> f64 {
        (f64::from(self.hour) + f64::from(self.minute) / 60.0 + self.second / 3600.0) / 24.0
    }
}

/// A civil timestamp with its Julian Day cached at construction.
///
/// The JD is the canonical temporal coordinate for every layer above
/// this crate; the civil fields survive only for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInstant {
    civil: CivilTime,
    jd: f64,
}

impl TimeInstant {
    pub fn new(civil: CivilTime) -> Self {
        Self { civil, jd: calendar_to_jd(&civil) }
    }

    /// Reconstructs the civil fields from a Julian Day.
    pub fn from_jd(jd: f64) -> Self {
        Self { civil: jd_to_calendar(jd), jd }
    }

    pub const fn jd(&self) -> f64 {
        self.jd
    }

    pub const fn civil(&self) -> &CivilTime {
        &self.civil
    }

    /// A new instant offset by `days` (fractional days allowed).
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_jd(self.jd + days)
    }
}

/// Gregorian calendar date → Julian Day.
///
/// Meeus eq. 7.1 with the Gregorian correction term applied
/// unconditionally.
pub fn calendar_to_jd(ct: &CivilTime) -> f64 {
    let mut y = f64::from(ct.year);
    let mut m = f64::from(ct.month);
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let day = f64::from(ct.day) + ct.day_fraction();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian Day → Gregorian calendar date.
///
/// Meeus ch. 7, inverse algorithm. Sub-second residue from the floating
/// split stays in the `second` field.
pub fn jd_to_calendar(jd: f64) -> CivilTime {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor()) as u8;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u8;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

    // Split the day fraction, guarding against 86400 from float rounding.
    let mut secs = f * 86_400.0;
    if secs >= 86_400.0 {
        secs = 86_400.0 - 1e-6;
    }
    let hour = (secs / 3600.0).floor();
    let minute = ((secs - hour * 3600.0) / 60.0).floor();
    let second = secs - hour * 3600.0 - minute * 60.0;

    CivilTime { year, month, day, hour: hour as u8, minute: minute as u8, second }
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Days elapsed since J2000.0.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let ct = CivilTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((calendar_to_jd(&ct) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_reference_date() {
        // Meeus example 7.a adjusted to Gregorian: 1957 Oct 4.81 TD.
        let ct = CivilTime::new(1957, 10, 4, 19, 26, 24.0);
        let jd = calendar_to_jd(&ct);
        assert!((jd - 2_436_116.31).abs() < 1e-4, "jd = {jd}");
    }

    #[test]
    fn midnight_is_half_day_before_noon() {
        let noon = calendar_to_jd(&CivilTime::new(2024, 3, 20, 12, 0, 0.0));
        let midnight = calendar_to_jd(&CivilTime::new(2024, 3, 20, 0, 0, 0.0));
        assert!((noon - midnight - 0.5).abs() < 1e-9);
    }

    #[test]
    fn round_trip_within_a_second() {
        let samples = [
            CivilTime::new(1900, 1, 1, 0, 0, 0.0),
            CivilTime::new(1987, 6, 19, 12, 0, 0.0),
            CivilTime::new(2000, 2, 29, 23, 59, 30.0),
            CivilTime::new(2024, 12, 31, 6, 30, 15.0),
            CivilTime::new(2150, 7, 4, 18, 45, 0.0),
        ];
        for ct in samples {
            let back = jd_to_calendar(calendar_to_jd(&ct));
            assert_eq!((back.year, back.month, back.day), (ct.year, ct.month, ct.day));
            let orig_s =
                f64::from(ct.hour) * 3600.0 + f64::from(ct.minute) * 60.0 + ct.second;
            let back_s =
                f64::from(back.hour) * 3600.0 + f64::from(back.minute) * 60.0 + back.second;
            assert!((orig_s - back_s).abs() < 1.0, "drift for {ct:?}: {back:?}");
        }
    }

    #[test]
    fn instant_caches_jd() {
        let instant = TimeInstant::new(CivilTime::new(2000, 1, 1, 12, 0, 0.0));
        assert!((instant.jd() - J2000_JD).abs() < 1e-9);
        assert_eq!(instant.civil().year, 2000);
    }

    #[test]
    fn add_days_shifts_calendar() {
        let instant = TimeInstant::new(CivilTime::new(2024, 1, 31, 0, 0, 0.0));
        let next = instant.add_days(1.0);
        assert_eq!(next.civil().month, 2);
        assert_eq!(next.civil().day, 1);
    }

    #[test]
    fn centuries_at_epoch_and_one_century_on() {
        assert_eq!(centuries_since_j2000(J2000_JD), 0.0);
        assert!((centuries_since_j2000(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-12);
    }
}
