//! The twelve zodiac signs and their Vedic rulers.

use kaala_ephem::{Body, normalize_360};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub const fn index(&self) -> u8 {
        *self as u8
    }

    pub const fn from_index(index: u8) -> Sign {
        ALL_SIGNS[(index % 12) as usize]
    }

    pub fn from_longitude(longitude_deg: f64) -> Sign {
        Self::from_index((normalize_360(longitude_deg) / 30.0) as u8)
    }

    /// The nth sign counted inclusively from this one (1 = itself).
    pub const fn nth_from(&self, n: u8) -> Sign {
        Self::from_index(self.index() + n - 1)
    }

    /// Vedic sign rulership.
    pub const fn ruler(&self) -> Body {
        match self {
            Sign::Aries | Sign::Scorpio => Body::Mars,
            Sign::Taurus | Sign::Libra => Body::Venus,
            Sign::Gemini | Sign::Virgo => Body::Mercury,
            Sign::Cancer => Body::Moon,
            Sign::Leo => Body::Sun,
            Sign::Sagittarius | Sign::Pisces => Body::Jupiter,
            Sign::Capricorn | Sign::Aquarius => Body::Saturn,
        }
    }
}
