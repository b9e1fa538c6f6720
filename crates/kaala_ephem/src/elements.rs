//! Mean orbital elements at epoch J2000.0.
//!
//! Low-precision polynomial rows in Julian centuries T: mean longitude,
//! mean anomaly, and eccentricity per body. Values follow the compact
//! series tradition of Meeus ch. 31/47 truncations; the Moon carries
//! cubic terms, the planets linear ones.

use crate::angle::normalize_360;
use crate::body::Body;

/// Cubic polynomial `c0 + c1·T + c2·T² + c3·T³`.
#[derive(Debug, Clone, Copy)]
pub struct Poly3 {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
}

impl Poly3 {
    pub const fn new(c0: f64, c1: f64, c2: f64, c3: f64) -> Self {
        Self { c0, c1, c2, c3 }
    }

    pub fn eval(&self, t: f64) -> f64 {
        ((self.c3 * t + self.c2) * t + self.c1) * t + self.c0
    }
}

/// One body's mean-element row. Angles in degrees.
#[derive(Debug, Clone, Copy)]
pub struct MeanElements {
    pub mean_longitude: Poly3,
    pub mean_anomaly: Poly3,
    pub eccentricity: Poly3,
}

static SUN: MeanElements = MeanElements {
    mean_longitude: Poly3::new(280.46646, 36_000.76983, 0.0003032, 0.0),
    mean_anomaly: Poly3::new(357.52772, 35_999.05034, -0.0001603, 0.0),
    eccentricity: Poly3::new(0.016708634, -0.000042037, -0.0000001267, 0.0),
};

static MOON: MeanElements = MeanElements {
    mean_longitude: Poly3::new(
        218.3164477,
        481_267.88123421,
        -0.0015786,
        1.0 / 54_586_000.0,
    ),
    mean_anomaly: Poly3::new(134.96340251, 477_198.867398, 0.0086972, 1.0 / 699_000.0),
    eccentricity: Poly3::new(0.0549, 0.0, 0.0, 0.0),
};

static MERCURY: MeanElements = MeanElements {
    mean_longitude: Poly3::new(252.25094, 149_472.67491, 0.0, 0.0),
    mean_anomaly: Poly3::new(174.79485, 149_472.67491, 0.0, 0.0),
    eccentricity: Poly3::new(0.20563175, 0.000020406, 0.0, 0.0),
};

static VENUS: MeanElements = MeanElements {
    mean_longitude: Poly3::new(181.97980, 58_517.81601, 0.0, 0.0),
    mean_anomaly: Poly3::new(50.1152, 58_517.81601, 0.0, 0.0),
    eccentricity: Poly3::new(0.00677323, 0.000001302, 0.0, 0.0),
};

static MARS: MeanElements = MeanElements {
    mean_longitude: Poly3::new(355.43300, 19_140.30270, 0.0, 0.0),
    mean_anomaly: Poly3::new(19.37395, 19_140.30270, 0.0, 0.0),
    eccentricity: Poly3::new(0.09340065, 0.0, 0.0, 0.0),
};

static JUPITER: MeanElements = MeanElements {
    mean_longitude: Poly3::new(34.39644, 3_034.74612, 0.0, 0.0),
    mean_anomaly: Poly3::new(19.89484, 3_034.74612, 0.0, 0.0),
    eccentricity: Poly3::new(0.0484979, 0.0, 0.0, 0.0),
};

static SATURN: MeanElements = MeanElements {
    mean_longitude: Poly3::new(49.95424, 1_222.49362, 0.0, 0.0),
    mean_anomaly: Poly3::new(316.96692, 1_222.49362, 0.0, 0.0),
    eccentricity: Poly3::new(0.0541506, 0.0, 0.0, 0.0),
};

/// The mean-element row for a body, `None` for the node pair.
pub const fn mean_elements(body: Body) -> Option<&'static MeanElements> {
    match body {
        Body::Sun => Some(&SUN),
        Body::Moon => Some(&MOON),
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Rahu | Body::Ketu => None,
    }
}

/// Mean longitude of the ascending lunar node (Rahu), degrees in
/// [0, 360). Ketu is this plus 180°.
///
/// Source: Meeus ch. 47 mean node polynomial.
pub fn mean_node_deg(t: f64) -> f64 {
    normalize_360(
        125.0445479 - 1_934.1362891 * t + 0.0020754 * t * t + t * t * t / 467_441.0,
    )
}
