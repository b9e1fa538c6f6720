//! The nine classical bodies of the jyotish planetary set.

/// A body whose ecliptic longitude the solver can produce.
///
/// The seven from Sun through Saturn carry mean orbital elements;
/// Rahu and Ketu are the ascending/descending mean lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine bodies in traditional order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

/// The seven bodies with mean orbital element rows.
pub const ELEMENT_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    pub const fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
        }
    }

    pub const fn index(&self) -> usize {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Rahu => 7,
            Body::Ketu => 8,
        }
    }

    /// True for the shadow bodies (mean lunar nodes).
    pub const fn is_node(&self) -> bool {
        matches!(self, Body::Rahu | Body::Ketu)
    }

    pub const fn is_luminary(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }

    /// Mean geocentric daily motion in degrees per day.
    ///
    /// The nodes regress; their rate is quoted unsigned here and the
    /// motion sampler reports them retrograde.
    pub const fn mean_daily_motion_deg(&self) -> f64 {
        match self {
            Body::Sun => 0.9856,
            Body::Moon => 13.176,
            Body::Mercury => 4.09,
            Body::Venus => 1.602,
            Body::Mars => 0.524,
            Body::Jupiter => 0.083,
            Body::Saturn => 0.033,
            Body::Rahu | Body::Ketu => 0.053,
        }
    }
}
