//! Event categories, method identities, analysis windows, and the
//! report structures shared across the timing pipeline.

use kaala_ephem::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Marriage,
    Career,
    Health,
    Finance,
    Spirituality,
}

pub const ALL_EVENTS: [EventCategory; 5] = [
    EventCategory::Marriage,
    EventCategory::Career,
    EventCategory::Health,
    EventCategory::Finance,
    EventCategory::Spirituality,
];

impl EventCategory {
    pub const fn name(&self) -> &'static str {
        match self {
            EventCategory::Marriage => "marriage",
            EventCategory::Career => "career",
            EventCategory::Health => "health",
            EventCategory::Finance => "finance",
            EventCategory::Spirituality => "spirituality",
        }
    }

    /// Houses whose lordship and activation bear on this event.
    pub const fn relevant_houses(&self) -> &'static [u8] {
        match self {
            EventCategory::Marriage => &[7, 2, 8, 12],
            EventCategory::Career => &[10, 6, 2, 11],
            EventCategory::Health => &[6, 8, 12, 1],
            EventCategory::Finance => &[2, 11, 5, 9],
            EventCategory::Spirituality => &[9, 12, 5, 8],
        }
    }

    /// The bodies whose transits and periods carry this event.
    pub const fn relevant_bodies(&self) -> &'static [Body] {
        match self {
            EventCategory::Marriage => &[Body::Venus, Body::Jupiter, Body::Moon],
            EventCategory::Career => &[Body::Saturn, Body::Sun, Body::Mars, Body::Mercury],
            EventCategory::Health => &[Body::Mars, Body::Saturn, Body::Moon],
            EventCategory::Finance => &[Body::Jupiter, Body::Venus, Body::Mercury],
            EventCategory::Spirituality => &[Body::Jupiter, Body::Ketu, Body::Saturn],
        }
    }
}

/// Identity of a registered timing method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MethodId {
    Lordship,
    Transit,
    Progression,
    Cycle,
}

pub const ALL_METHODS: [MethodId; 4] =
    [MethodId::Lordship, MethodId::Transit, MethodId::Progression, MethodId::Cycle];

impl MethodId {
    pub const fn name(&self) -> &'static str {
        match self {
            MethodId::Lordship => "lordship",
            MethodId::Transit => "transit",
            MethodId::Progression => "progression",
            MethodId::Cycle => "cycle",
        }
    }

    /// Per-event blend weight. Each event's four weights sum to 1.
    pub const fn weight_for(&self, event: EventCategory) -> f64 {
        match event {
            EventCategory::Marriage => match self {
                MethodId::Lordship => 0.50,
                MethodId::Transit => 0.25,
                MethodId::Progression => 0.15,
                MethodId::Cycle => 0.10,
            },
            EventCategory::Career => match self {
                MethodId::Lordship => 0.45,
                MethodId::Transit => 0.25,
                MethodId::Progression => 0.20,
                MethodId::Cycle => 0.10,
            },
            EventCategory::Health => match self {
                MethodId::Lordship => 0.35,
                MethodId::Transit => 0.35,
                MethodId::Progression => 0.10,
                MethodId::Cycle => 0.20,
            },
            EventCategory::Finance => match self {
                MethodId::Lordship => 0.45,
                MethodId::Transit => 0.30,
                MethodId::Progression => 0.20,
                MethodId::Cycle => 0.05,
            },
            EventCategory::Spirituality => match self {
                MethodId::Lordship => 0.55,
                MethodId::Transit => 0.20,
                MethodId::Progression => 0.20,
                MethodId::Cycle => 0.05,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Influence {
    Favorable,
    Unfavorable,
    Neutral,
}

/// One scored stretch of time from one method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisWindow {
    pub start_jd: f64,
    pub end_jd: f64,
    pub method: MethodId,
    pub influence: Influence,
    /// Strength scale, 1–10.
    pub score: f64,
    /// The method's blend weight for the queried event.
    pub weight: f64,
}

impl AnalysisWindow {
    /// Normalizes so `start_jd <= end_jd` always holds.
    pub fn new(
        start_jd: f64,
        end_jd: f64,
        method: MethodId,
        influence: Influence,
        score: f64,
        weight: f64,
    ) -> Self {
        let (start_jd, end_jd) =
            if end_jd < start_jd { (end_jd, start_jd) } else { (start_jd, end_jd) };
        Self { start_jd, end_jd, method, influence, score, weight }
    }

    pub fn overlaps(&self, start_jd: f64, end_jd: f64) -> bool {
        self.start_jd <= end_jd && start_jd <= self.end_jd
    }
}

/// The raw output of one analyzer over the query range.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodAnalysis {
    pub method: MethodId,
    pub weight: f64,
    pub windows: Vec<AnalysisWindow>,
    /// Bodies whose absence from the natal chart degraded scoring.
    pub missing_bodies: Vec<Body>,
}

impl MethodAnalysis {
    pub fn count(&self, influence: Influence) -> usize {
        self.windows.iter().filter(|w| w.influence == influence).count()
    }

    pub fn favorable(&self) -> impl Iterator<Item = &AnalysisWindow> {
        self.windows.iter().filter(|w| w.influence == Influence::Favorable)
    }
}

/// Per-method report line.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSummary {
    pub method: MethodId,
    pub weight: f64,
    pub favorable: usize,
    pub unfavorable: usize,
    pub neutral: usize,
    /// True when the analyzer itself failed and produced nothing.
    pub degraded: bool,
    pub missing_bodies: Vec<Body>,
}

/// A span where several methods' favorable windows overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsensusWindow {
    pub start_jd: f64,
    pub end_jd: f64,
    /// Unit scale, 0–1.
    pub consensus: f64,
    /// Distinct supporting methods, sorted.
    pub methods: Vec<MethodId>,
    /// Mean member strength, 1–10.
    pub combined_score: f64,
}

impl ConsensusWindow {
    pub fn midpoint_jd(&self) -> f64 {
        (self.start_jd + self.end_jd) / 2.0
    }
}

/// A consensus span narrowed toward its opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinedWindow {
    pub start_jd: f64,
    pub end_jd: f64,
    pub narrowing_factor: f64,
}

/// A consensus window after cross-method fusion.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancedPrediction {
    pub window: ConsensusWindow,
    pub amplification: f64,
    /// Net transit aspect support at the window midpoint, −1..1.
    pub aspect_support: f64,
    pub refined: RefinedWindow,
    /// Unclamped rank key; may exceed the 0-10 strength scale.
    pub final_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Year,
    Season,
    Month,
    Week,
    Day,
}

pub const ALL_GRANULARITIES: [Granularity; 5] = [
    Granularity::Year,
    Granularity::Season,
    Granularity::Month,
    Granularity::Week,
    Granularity::Day,
];

impl Granularity {
    pub const fn name(&self) -> &'static str {
        match self {
            Granularity::Year => "year",
            Granularity::Season => "season",
            Granularity::Month => "month",
            Granularity::Week => "week",
            Granularity::Day => "day",
        }
    }

    /// Base achievable precision at this granularity, unit scale.
    pub const fn base_precision(&self) -> f64 {
        match self {
            Granularity::Year => 0.4,
            Granularity::Season => 0.6,
            Granularity::Month => 0.8,
            Granularity::Week => 0.9,
            Granularity::Day => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    pub fn from_unit(value: f64) -> Self {
        if value >= 0.9 {
            ConfidenceLevel::VeryHigh
        } else if value >= 0.7 {
            ConfidenceLevel::High
        } else if value >= 0.5 {
            ConfidenceLevel::Medium
        } else if value >= 0.3 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryLow => "very low",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::VeryHigh => "very high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionEntry {
    pub granularity: Granularity,
    /// Unit scale, 0–1.
    pub precision: f64,
    pub level: ConfidenceLevel,
}

/// The assembled multi-method timing report.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingReport {
    pub event: EventCategory,
    pub start_jd: f64,
    pub end_jd: f64,
    pub method_summaries: Vec<MethodSummary>,
    pub consensus_windows: Vec<ConsensusWindow>,
    pub predictions: Vec<EnhancedPrediction>,
    /// Unit scale, 0–1.
    pub confidence: f64,
    pub precision: Vec<PrecisionEntry>,
    pub recommendations: Vec<String>,
}
