//! Natural planetary friendship (naisargika maitri) and benefic/malefic
//! classification.

use kaala_ephem::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nature {
    Benefic,
    Malefic,
    Neutral,
}

/// The classical one-way friendship table: how `from` regards `to`.
///
/// The nodes sit outside the table and read as neutral both ways.
pub fn relation(from: Body, to: Body) -> Relation {
    use Body::*;
    let friends: &[Body] = match from {
        Sun => &[Moon, Mars, Jupiter],
        Moon => &[Sun, Mercury],
        Mars => &[Sun, Moon, Jupiter],
        Mercury => &[Sun, Venus],
        Jupiter => &[Sun, Moon, Mars],
        Venus => &[Mercury, Saturn],
        Saturn => &[Mercury, Venus],
        Rahu | Ketu => &[],
    };
    let enemies: &[Body] = match from {
        Sun => &[Venus, Saturn],
        Moon => &[],
        Mars => &[Mercury],
        Mercury => &[Moon],
        Jupiter => &[Mercury, Venus],
        Venus => &[Sun, Moon],
        Saturn => &[Sun, Moon, Mars],
        Rahu | Ketu => &[],
    };
    if friends.contains(&to) {
        Relation::Friend
    } else if enemies.contains(&to) {
        Relation::Enemy
    } else {
        Relation::Neutral
    }
}

/// Benefics are Jupiter, Venus and the Moon; malefics Mars, Saturn and
/// the Sun. Mercury and the nodes stay neutral in this scoring model.
pub const fn nature(body: Body) -> Nature {
    match body {
        Body::Jupiter | Body::Venus | Body::Moon => Nature::Benefic,
        Body::Mars | Body::Saturn | Body::Sun => Nature::Malefic,
        Body::Mercury | Body::Rahu | Body::Ketu => Nature::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaala_ephem::ALL_BODIES;

    #[test]
    fn sun_regards_moon_as_friend() {
        assert_eq!(relation(Body::Sun, Body::Moon), Relation::Friend);
    }

    #[test]
    fn friendship_is_not_symmetric() {
        // Venus counts Saturn a friend; Mercury counts the Moon an
        // enemy while the Moon counts Mercury a friend.
        assert_eq!(relation(Body::Venus, Body::Saturn), Relation::Friend);
        assert_eq!(relation(Body::Mercury, Body::Moon), Relation::Enemy);
        assert_eq!(relation(Body::Moon, Body::Mercury), Relation::Friend);
    }

    #[test]
    fn moon_has_no_enemies() {
        for body in ALL_BODIES {
            assert_ne!(relation(Body::Moon, body), Relation::Enemy, "{}", body.name());
        }
    }

    #[test]
    fn nodes_are_neutral_both_ways() {
        for body in ALL_BODIES {
            assert_eq!(relation(Body::Rahu, body), Relation::Neutral);
            assert_eq!(relation(body, Body::Ketu), Relation::Neutral);
        }
    }

    #[test]
    fn three_benefics_three_malefics() {
        let benefics = ALL_BODIES.iter().filter(|b| nature(**b) == Nature::Benefic).count();
        let malefics = ALL_BODIES.iter().filter(|b| nature(**b) == Nature::Malefic).count();
        assert_eq!(benefics, 3);
        assert_eq!(malefics, 3);
    }
}
