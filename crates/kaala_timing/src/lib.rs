//! Multi-method event-timing consensus engine.
//!
//! Four independent analyzers score a query range for a life-event
//! category: period-lordship, transits, progressions, and the Saturn
//! cycle over the natal Moon. Their favorable windows are grouped into
//! consensus windows, enhanced by transit amplification and aspect
//! support, and assembled into a report with confidence and
//! per-granularity precision.
//!
//! This crate provides:
//! - The [`TimingMethod`] strategy trait and the standard registry
//! - Consensus grouping across methods with an agreement bonus
//! - Prediction enhancement: amplification, aspect support, narrowing
//! - Overall confidence, precision levels, and recommendation text

pub mod confidence;
pub mod consensus;
pub mod cycle;
pub mod error;
pub mod fusion;
pub mod lordship;
pub mod method;
pub mod period_table;
pub mod progression;
pub mod report;
pub mod scale;
pub mod transit;
pub mod types;

pub use confidence::{overall_confidence, precision_entries};
pub use consensus::{CONSENSUS_THRESHOLD, consensus_windows};
pub use cycle::CycleMethod;
pub use error::TimingError;
pub use fusion::enhance;
pub use lordship::LordshipMethod;
pub use method::{AnalysisContext, TimingMethod, default_methods};
pub use period_table::{PeriodTable, SubPeriod};
pub use progression::{DAYS_PER_QUARTER, ProgressionMethod};
pub use report::{timing_report, timing_report_with};
pub use scale::{clamp_score, clamp_strength, strength_to_unit, unit_to_strength};
pub use transit::{DAYS_PER_MONTH, TransitMethod};
pub use types::{
    ALL_EVENTS, ALL_GRANULARITIES, ALL_METHODS, AnalysisWindow, ConfidenceLevel, ConsensusWindow,
    EnhancedPrediction, EventCategory, Granularity, Influence, MethodAnalysis, MethodId,
    MethodSummary, PrecisionEntry, RefinedWindow, TimingReport,
};
