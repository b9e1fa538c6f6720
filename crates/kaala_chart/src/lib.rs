//! Chart geometry and relational tables.
//!
//! Zodiac signs with Vedic rulership, planetary dignity and the
//! classical friendship table, ascendant and house-cusp geometry, the
//! frozen natal chart snapshot, and the aspect engine.

pub mod aspect;
pub mod dignity;
pub mod error;
pub mod houses;
pub mod natal;
pub mod relations;
pub mod sign;

pub use aspect::{
    ALL_ASPECT_KINDS, Aspect, AspectKind, MutualAspect, SpecialAspect, aspect_strength,
    casts_aspect, conjunction_orb_deg, find_aspect, max_orb_deg, mutual_aspect, special_angles,
    special_aspects,
};
pub use dignity::{Dignity, dignity, sign_strength};
pub use error::ChartError;
pub use houses::{
    GeoLocation, POLAR_LATITUDE_LIMIT_DEG, ascendant_deg, house_cusps, house_of, midheaven_deg,
};
pub use natal::NatalChart;
pub use relations::{Nature, Relation, nature, relation};
pub use sign::{ALL_SIGNS, Sign};
