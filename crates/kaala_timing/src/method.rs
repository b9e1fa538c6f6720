//! The timing-method strategy seam.
//!
//! Each analyzer implements [`TimingMethod`] and the report runner
//! iterates a registry of boxed strategies; adding a method means
//! adding it to [`default_methods`].

use kaala_chart::NatalChart;

use crate::cycle::CycleMethod;
use crate::error::TimingError;
use crate::lordship::LordshipMethod;
use crate::period_table::PeriodTable;
use crate::progression::ProgressionMethod;
use crate::transit::TransitMethod;
use crate::types::{EventCategory, MethodAnalysis, MethodId};

/// Shared read-only inputs for one analysis run.
pub struct AnalysisContext<'a> {
    pub chart: &'a NatalChart,
    pub periods: &'a PeriodTable,
    pub event: EventCategory,
    pub start_jd: f64,
    pub end_jd: f64,
}

pub trait TimingMethod {
    fn id(&self) -> MethodId;

    fn weight(&self, event: EventCategory) -> f64 {
        self.id().weight_for(event)
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<MethodAnalysis, TimingError>;
}

/// The four standard analyzers.
pub fn default_methods() -> Vec<Box<dyn TimingMethod>> {
    vec![
        Box::new(LordshipMethod),
        Box::new(TransitMethod),
        Box::new(ProgressionMethod),
        Box::new(CycleMethod),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_METHODS;

    #[test]
    fn registry_covers_every_method_id_once() {
        let methods = default_methods();
        assert_eq!(methods.len(), ALL_METHODS.len());
        for id in ALL_METHODS {
            assert_eq!(methods.iter().filter(|m| m.id() == id).count(), 1, "{}", id.name());
        }
    }

    #[test]
    fn default_weight_comes_from_the_id_table() {
        for m in default_methods() {
            for event in crate::types::ALL_EVENTS {
                assert_eq!(m.weight(event), m.id().weight_for(event));
            }
        }
    }
}
