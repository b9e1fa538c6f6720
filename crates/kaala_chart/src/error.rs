//! Chart-layer error type.

use std::error::Error;
use std::fmt;

use kaala_ephem::EphemError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The house geometry degenerates at this latitude (polar region or
    /// collapsed quadrant). There is no fallback house system.
    DegenerateHouseSystem { latitude_deg: f64 },
    /// A position solve failed while building the chart.
    Ephem(EphemError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::DegenerateHouseSystem { latitude_deg } => {
                write!(
                    f,
                    "house geometry degenerates at latitude {latitude_deg:.4}°; no fallback system is applied"
                )
            }
            ChartError::Ephem(e) => write!(f, "position solve failed: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChartError::Ephem(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        ChartError::Ephem(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_latitude() {
        let err = ChartError::DegenerateHouseSystem { latitude_deg: 78.25 };
        assert!(err.to_string().contains("78.25"));
    }

    #[test]
    fn wraps_ephem_error() {
        let inner = EphemError::KeplerNoConvergence {
            body: "Mars",
            mean_anomaly_deg: 10.0,
            eccentricity: 0.09,
        };
        let err: ChartError = inner.clone().into();
        assert_eq!(err, ChartError::Ephem(inner));
    }
}
