//! Planetary dignity by sign placement.
//!
//! Exaltation, own sign and debilitation are explicit tables; every
//! other placement derives from the body's natural relation to the
//! sign's ruler, so the full body × sign grid is defined.

use kaala_ephem::Body;

use crate::relations::{Relation, relation};
use crate::sign::Sign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dignity {
    Debilitated,
    Enemy,
    Neutral,
    Friendly,
    Exalted,
    OwnSign,
}

const fn exaltation_sign(body: Body) -> Option<Sign> {
    match body {
        Body::Sun => Some(Sign::Aries),
        Body::Moon => Some(Sign::Taurus),
        Body::Mars => Some(Sign::Capricorn),
        Body::Mercury => Some(Sign::Virgo),
        Body::Jupiter => Some(Sign::Cancer),
        Body::Venus => Some(Sign::Pisces),
        Body::Saturn => Some(Sign::Libra),
        Body::Rahu | Body::Ketu => None,
    }
}

const fn debilitation_sign(body: Body) -> Option<Sign> {
    // Opposite the exaltation sign.
    match body {
        Body::Sun => Some(Sign::Libra),
        Body::Moon => Some(Sign::Scorpio),
        Body::Mars => Some(Sign::Cancer),
        Body::Mercury => Some(Sign::Pisces),
        Body::Jupiter => Some(Sign::Capricorn),
        Body::Venus => Some(Sign::Virgo),
        Body::Saturn => Some(Sign::Aries),
        Body::Rahu | Body::Ketu => None,
    }
}

/// The dignity of a body placed in a sign. Nodes are neutral
/// everywhere.
pub fn dignity(body: Body, sign: Sign) -> Dignity {
    if body.is_node() {
        return Dignity::Neutral;
    }
    if exaltation_sign(body) == Some(sign) {
        return Dignity::Exalted;
    }
    if debilitation_sign(body) == Some(sign) {
        return Dignity::Debilitated;
    }
    if sign.ruler() == body {
        return Dignity::OwnSign;
    }
    match relation(body, sign.ruler()) {
        Relation::Friend => Dignity::Friendly,
        Relation::Neutral => Dignity::Neutral,
        Relation::Enemy => Dignity::Enemy,
    }
}

/// Dignity mapped onto the transit strength adjustment, −2..+3.
pub fn sign_strength(body: Body, sign: Sign) -> f64 {
    match dignity(body, sign) {
        Dignity::OwnSign => 3.0,
        Dignity::Exalted => 2.0,
        Dignity::Friendly => 1.0,
        Dignity::Neutral => 0.0,
        Dignity::Enemy => -1.0,
        Dignity::Debilitated => -2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::ALL_SIGNS;
    use kaala_ephem::ELEMENT_BODIES;

    #[test]
    fn classical_exaltations() {
        assert_eq!(dignity(Body::Sun, Sign::Aries), Dignity::Exalted);
        assert_eq!(dignity(Body::Moon, Sign::Taurus), Dignity::Exalted);
        assert_eq!(dignity(Body::Saturn, Sign::Libra), Dignity::Exalted);
        assert_eq!(dignity(Body::Jupiter, Sign::Cancer), Dignity::Exalted);
    }

    #[test]
    fn debilitation_opposes_exaltation() {
        assert_eq!(dignity(Body::Sun, Sign::Libra), Dignity::Debilitated);
        assert_eq!(dignity(Body::Mars, Sign::Cancer), Dignity::Debilitated);
        assert_eq!(dignity(Body::Venus, Sign::Virgo), Dignity::Debilitated);
    }

    #[test]
    fn own_sign_placements() {
        assert_eq!(dignity(Body::Mars, Sign::Aries), Dignity::OwnSign);
        assert_eq!(dignity(Body::Mars, Sign::Scorpio), Dignity::OwnSign);
        assert_eq!(dignity(Body::Sun, Sign::Leo), Dignity::OwnSign);
        assert_eq!(dignity(Body::Moon, Sign::Cancer), Dignity::OwnSign);
    }

    #[test]
    fn exaltation_overrides_rulership_relation() {
        // Saturn rules Libra's ruler-relation chain would read Venus as
        // a friend, but the exaltation entry must win.
        assert_eq!(dignity(Body::Saturn, Sign::Libra), Dignity::Exalted);
        // Sun in Libra: debilitation beats the Venus-enemy derivation.
        assert_eq!(dignity(Body::Sun, Sign::Libra), Dignity::Debilitated);
    }

    #[test]
    fn derived_friendly_and_enemy_placements() {
        // Sun in Sagittarius: Jupiter is the Sun's friend.
        assert_eq!(dignity(Body::Sun, Sign::Sagittarius), Dignity::Friendly);
        // Sun in Taurus: Venus is the Sun's enemy.
        assert_eq!(dignity(Body::Sun, Sign::Taurus), Dignity::Enemy);
    }

    #[test]
    fn nodes_neutral_everywhere() {
        for sign in ALL_SIGNS {
            assert_eq!(dignity(Body::Rahu, sign), Dignity::Neutral);
            assert_eq!(sign_strength(Body::Ketu, sign), 0.0);
        }
    }

    #[test]
    fn strength_bounds() {
        for body in ELEMENT_BODIES {
            for sign in ALL_SIGNS {
                let s = sign_strength(body, sign);
                assert!((-2.0..=3.0).contains(&s), "{} in {}: {s}", body.name(), sign.name());
            }
        }
    }
}
