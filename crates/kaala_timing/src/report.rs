//! The report runner: validates the query, runs the method registry,
//! groups consensus, enhances predictions, and renders the
//! recommendation lines.
//!
//! A method that fails is reported as degraded rather than aborting
//! the run; only when every method fails does the report itself fail.

use kaala_chart::NatalChart;
use kaala_time::jd_to_calendar;

use crate::confidence::{overall_confidence, precision_entries};
use crate::consensus::consensus_windows;
use crate::error::TimingError;
use crate::fusion::enhance;
use crate::method::{AnalysisContext, TimingMethod, default_methods};
use crate::period_table::PeriodTable;
use crate::types::{
    EnhancedPrediction, EventCategory, Influence, MethodAnalysis, MethodId, MethodSummary,
    TimingReport,
};

/// Runs the standard four-method registry over the query range.
pub fn timing_report(
    chart: &NatalChart,
    periods: &PeriodTable,
    event: EventCategory,
    start_jd: f64,
    end_jd: f64,
) -> Result<TimingReport, TimingError> {
    timing_report_with(&default_methods(), chart, periods, event, start_jd, end_jd)
}

/// Runs a caller-supplied method registry over the query range.
pub fn timing_report_with(
    methods: &[Box<dyn TimingMethod>],
    chart: &NatalChart,
    periods: &PeriodTable,
    event: EventCategory,
    start_jd: f64,
    end_jd: f64,
) -> Result<TimingReport, TimingError> {
    if !(end_jd > start_jd) {
        return Err(TimingError::InvalidQueryRange { start_jd, end_jd });
    }

    let ctx = AnalysisContext { chart, periods, event, start_jd, end_jd };

    let mut analyses: Vec<MethodAnalysis> = Vec::with_capacity(methods.len());
    let mut summaries: Vec<MethodSummary> = Vec::with_capacity(methods.len());
    for method in methods {
        match method.analyze(&ctx) {
            Ok(analysis) => {
                summaries.push(summarize(&analysis));
                analyses.push(analysis);
            }
            Err(_) => summaries.push(MethodSummary {
                method: method.id(),
                weight: method.weight(event),
                favorable: 0,
                unfavorable: 0,
                neutral: 0,
                degraded: true,
                missing_bodies: Vec::new(),
            }),
        }
    }
    if analyses.is_empty() {
        return Err(TimingError::AllMethodsFailed);
    }

    let windows = consensus_windows(&analyses);
    let transit = analyses.iter().find(|a| a.method == MethodId::Transit);
    let predictions = enhance(&windows, transit, chart)?;

    let confidence = overall_confidence(analyses.len(), &windows);
    let precision = precision_entries(analyses.len(), windows.len());
    let recommendations = recommendations(&predictions, confidence, event);

    Ok(TimingReport {
        event,
        start_jd,
        end_jd,
        method_summaries: summaries,
        consensus_windows: windows,
        predictions,
        confidence,
        precision,
        recommendations,
    })
}

fn summarize(analysis: &MethodAnalysis) -> MethodSummary {
    MethodSummary {
        method: analysis.method,
        weight: analysis.weight,
        favorable: analysis.count(Influence::Favorable),
        unfavorable: analysis.count(Influence::Unfavorable),
        neutral: analysis.count(Influence::Neutral),
        degraded: false,
        missing_bodies: analysis.missing_bodies.clone(),
    }
}

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "May 1990" style month-and-year label for a Julian Day.
fn month_year(jd: f64) -> String {
    let civil = jd_to_calendar(jd);
    let month = MONTH_ABBREV[usize::from(civil.month - 1)];
    format!("{month} {}", civil.year)
}

fn date_range(start_jd: f64, end_jd: f64) -> String {
    format!("{} - {}", month_year(start_jd), month_year(end_jd))
}

fn recommendations(
    predictions: &[EnhancedPrediction],
    confidence: f64,
    event: EventCategory,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(
        if confidence >= 0.8 {
            "High confidence in timing predictions - multiple methods agree"
        } else if confidence >= 0.6 {
            "Good confidence in timing predictions - reasonable method consensus"
        } else if confidence >= 0.4 {
            "Moderate confidence - some methods agree, exercise caution"
        } else {
            "Low confidence - conflicting timing indications, seek additional analysis"
        }
        .to_string(),
    );

    if let Some(top) = predictions.first() {
        lines.push(format!(
            "Best timing window: {} (Score: {:.2})",
            date_range(top.window.start_jd, top.window.end_jd),
            top.final_score,
        ));
        if let Some(second) = predictions.get(1) {
            lines.push(format!(
                "Alternative window: {} (Score: {:.2})",
                date_range(second.window.start_jd, second.window.end_jd),
                second.final_score,
            ));
        }
    }

    match event {
        EventCategory::Marriage => {
            lines.push("Consider Venus and Jupiter transit periods for marriage timing".into());
            lines.push("Check 7th house lord dasha periods for additional confirmation".into());
            if !predictions.is_empty() {
                lines.push("Perform Muhurta analysis for final date selection".into());
            }
        }
        EventCategory::Career => {
            lines.push("Saturn transits often bring career changes - monitor closely".into());
            lines.push("10th house lord dasha periods are most significant for career".into());
            lines.push("Consider Sun transits for leadership opportunities".into());
        }
        EventCategory::Health => {
            lines.push("Mars and Saturn transits require health precautions".into());
            lines.push("Monitor 6th house activations for health issues".into());
            lines.push("Practice preventive care during challenging periods".into());
        }
        EventCategory::Finance => {
            lines.push("Jupiter transits are highly favorable for wealth accumulation".into());
            lines.push("2nd and 11th house lord periods support financial growth".into());
            lines.push("Avoid major investments during malefic transit periods".into());
        }
        EventCategory::Spirituality => {
            lines.push("Jupiter periods are excellent for spiritual practices".into());
            lines.push("Ketu transits can bring spiritual awakening experiences".into());
            lines.push("9th house activations support dharmic pursuits".into());
        }
    }

    lines
}
