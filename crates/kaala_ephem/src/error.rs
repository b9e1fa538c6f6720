//! Solver error type.

use std::error::Error;
use std::fmt;

/// Errors from the position solver.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Newton–Raphson failed to reach tolerance within the iteration
    /// cap. Carries the inputs so the caller can see what diverged.
    KeplerNoConvergence {
        body: &'static str,
        mean_anomaly_deg: f64,
        eccentricity: f64,
    },
}

impl fmt::Display for EphemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EphemError::KeplerNoConvergence { body, mean_anomaly_deg, eccentricity } => {
                write!(
                    f,
                    "Kepler solver did not converge for {body} (M = {mean_anomaly_deg:.6}°, e = {eccentricity:.6})"
                )
            }
        }
    }
}

impl Error for EphemError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_body() {
        let err = EphemError::KeplerNoConvergence {
            body: "Mercury",
            mean_anomaly_deg: 123.4,
            eccentricity: 0.2056,
        };
        let msg = err.to_string();
        assert!(msg.contains("Mercury"));
        assert!(msg.contains("did not converge"));
    }
}
