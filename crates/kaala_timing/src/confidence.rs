//! Overall confidence and per-granularity precision.

use crate::types::{ALL_GRANULARITIES, ConfidenceLevel, ConsensusWindow, PrecisionEntry};

/// Method count at which the method factor saturates.
const OPTIMAL_METHODS: f64 = 4.0;

/// Consensus-window count at which the window factor saturates.
const OPTIMAL_WINDOWS: f64 = 3.0;

/// Blends method coverage, consensus-window count and mean consensus
/// quality into one unit-scale confidence.
pub fn overall_confidence(methods_run: usize, windows: &[ConsensusWindow]) -> f64 {
    let methods_factor = (methods_run as f64 / OPTIMAL_METHODS).min(1.0);
    let windows_factor = (windows.len() as f64 / OPTIMAL_WINDOWS).min(1.0);
    let quality_factor = if windows.is_empty() {
        0.0
    } else {
        windows.iter().map(|w| w.consensus).sum::<f64>() / windows.len() as f64
    };

    (0.3 * methods_factor + 0.3 * windows_factor + 0.4 * quality_factor).clamp(0.0, 1.0)
}

/// The achievable precision at every granularity, given how much
/// agreement the analysis produced.
pub fn precision_entries(methods_run: usize, consensus_count: usize) -> Vec<PrecisionEntry> {
    let consensus_bonus = if consensus_count > 0 { 0.1 } else { 0.0 };
    let method_bonus = if methods_run >= 3 { 0.1 } else { 0.0 };

    ALL_GRANULARITIES
        .into_iter()
        .map(|granularity| {
            let precision =
                (granularity.base_precision() + consensus_bonus + method_bonus).min(1.0);
            PrecisionEntry {
                granularity,
                precision,
                level: ConfidenceLevel::from_unit(precision),
            }
        })
        .collect()
}
