//! Timing-layer error type.

use std::error::Error;
use std::fmt;

use kaala_chart::ChartError;
use kaala_ephem::EphemError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimingError {
    /// The query range is empty or reversed.
    InvalidQueryRange { start_jd: f64, end_jd: f64 },
    /// The caller-supplied period table failed validation.
    InvalidPeriodTable { reason: &'static str },
    /// Every registered method failed; no report can be assembled.
    AllMethodsFailed,
    Ephem(EphemError),
    Chart(ChartError),
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingError::InvalidQueryRange { start_jd, end_jd } => {
                write!(f, "query range is empty: start JD {start_jd} to end JD {end_jd}")
            }
            TimingError::InvalidPeriodTable { reason } => {
                write!(f, "invalid period table: {reason}")
            }
            TimingError::AllMethodsFailed => {
                write!(f, "every timing method failed; no report assembled")
            }
            TimingError::Ephem(e) => write!(f, "ephemeris failure: {e}"),
            TimingError::Chart(e) => write!(f, "chart failure: {e}"),
        }
    }
}

impl Error for TimingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TimingError::Ephem(e) => Some(e),
            TimingError::Chart(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemError> for TimingError {
    fn from(e: EphemError) -> Self {
        TimingError::Ephem(e)
    }
}

impl From<ChartError> for TimingError {
    fn from(e: ChartError) -> Self {
        TimingError::Chart(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = TimingError::InvalidQueryRange { start_jd: 2_460_000.0, end_jd: 2_459_000.0 };
        assert!(err.to_string().contains("query range is empty"));
        assert!(TimingError::AllMethodsFailed.to_string().contains("every timing method"));
    }

    #[test]
    fn wraps_lower_layers() {
        let inner = EphemError::KeplerNoConvergence {
            body: "Moon",
            mean_anomaly_deg: 1.0,
            eccentricity: 0.0549,
        };
        let err: TimingError = inner.into();
        assert!(matches!(err, TimingError::Ephem(_)));
    }
}
