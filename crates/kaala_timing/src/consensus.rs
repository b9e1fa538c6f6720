//! Cross-method consensus grouping.
//!
//! Favorable windows from every method are pooled, sorted, and swept
//! into connected overlap components; each component scores on the
//! unit scale from its weighted member strengths plus an agreement
//! bonus per extra member. Sorting before the sweep makes the grouping
//! a function of the window set alone, not of method iteration order.

use crate::types::{AnalysisWindow, ConsensusWindow, MethodAnalysis};

/// Minimum unit-scale score for a component to become a window.
pub const CONSENSUS_THRESHOLD: f64 = 0.6;

/// Agreement bonus per member beyond the first.
const AGREEMENT_BONUS: f64 = 0.1;

/// Groups the analyses' favorable windows into consensus windows.
///
/// Output is sorted by consensus score descending, ties by start.
pub fn consensus_windows(analyses: &[MethodAnalysis]) -> Vec<ConsensusWindow> {
    let mut pool: Vec<&AnalysisWindow> =
        analyses.iter().flat_map(MethodAnalysis::favorable).collect();
    pool.sort_by(|a, b| {
        a.start_jd
            .total_cmp(&b.start_jd)
            .then(a.end_jd.total_cmp(&b.end_jd))
            .then(a.method.cmp(&b.method))
    });

    let mut windows = Vec::new();
    let mut group: Vec<&AnalysisWindow> = Vec::new();
    let mut group_end = f64::NEG_INFINITY;

    for w in pool {
        if !group.is_empty() && w.start_jd > group_end {
            if let Some(cw) = score_group(&group) {
                windows.push(cw);
            }
            group.clear();
        }
        group_end = group_end.max(w.end_jd);
        group.push(w);
    }
    if let Some(cw) = score_group(&group) {
        windows.push(cw);
    }

    windows.sort_by(|a, b| {
        b.consensus.total_cmp(&a.consensus).then(a.start_jd.total_cmp(&b.start_jd))
    });
    windows
}

fn score_group(group: &[&AnalysisWindow]) -> Option<ConsensusWindow> {
    if group.is_empty() {
        return None;
    }

    let total_weight: f64 = group.iter().map(|w| w.weight).sum();
    let weighted_score: f64 = group.iter().map(|w| w.score * w.weight).sum();
    let bonus = AGREEMENT_BONUS * (group.len() - 1) as f64;
    let consensus = (weighted_score / (total_weight * 10.0) + bonus).min(1.0);
    if consensus < CONSENSUS_THRESHOLD {
        return None;
    }

    let start_jd = group.iter().map(|w| w.start_jd).fold(f64::INFINITY, f64::min);
    let end_jd = group.iter().map(|w| w.end_jd).fold(f64::NEG_INFINITY, f64::max);
    let combined_score = group.iter().map(|w| w.score).sum::<f64>() / group.len() as f64;

    let mut methods: Vec<_> = group.iter().map(|w| w.method).collect();
    methods.sort();
    methods.dedup();

    Some(ConsensusWindow { start_jd, end_jd, consensus, methods, combined_score })
}
