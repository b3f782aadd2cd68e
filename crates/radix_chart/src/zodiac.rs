//! Zodiac sign resolution.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given an ecliptic longitude, we identify which sign the point falls in
//! and express the position as degrees-minutes-seconds within that sign.

use radix_math::{Dms, deg_to_dms, normalize_360};

/// The 12 zodiac signs in ecliptic order, starting from Aries at 0 deg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

/// All 12 signs in order (0 = Aries, 11 = Pisces).
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
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Three-letter abbreviation used when glyphs are unavailable.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Aries => "Ari",
            Self::Taurus => "Tau",
            Self::Gemini => "Gem",
            Self::Cancer => "Can",
            Self::Leo => "Leo",
            Self::Virgo => "Vir",
            Self::Libra => "Lib",
            Self::Scorpio => "Sco",
            Self::Sagittarius => "Sag",
            Self::Capricorn => "Cap",
            Self::Aquarius => "Aqu",
            Self::Pisces => "Pis",
        }
    }

    /// Unicode zodiac glyph.
    pub const fn glyph(self) -> char {
        match self {
            Self::Aries => '\u{2648}',
            Self::Taurus => '\u{2649}',
            Self::Gemini => '\u{264A}',
            Self::Cancer => '\u{264B}',
            Self::Leo => '\u{264C}',
            Self::Virgo => '\u{264D}',
            Self::Libra => '\u{264E}',
            Self::Scorpio => '\u{264F}',
            Self::Sagittarius => '\u{2650}',
            Self::Capricorn => '\u{2651}',
            Self::Aquarius => '\u{2652}',
            Self::Pisces => '\u{2653}',
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

/// Full sign position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    /// The zodiac sign.
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degree_in_sign: f64,
    /// Position within the sign as DMS.
    pub dms: Dms,
}

/// Determine the zodiac sign from an ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60),
/// etc. Input of any real value is normalized first.
pub fn sign_position(longitude_deg: f64) -> SignPosition {
    let lon = normalize_360(longitude_deg);
    let sign_idx = (lon / 30.0).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_idx = sign_idx.min(11);
    let degree_in_sign = lon - (sign_idx as f64) * 30.0;
    let sign = ALL_SIGNS[sign_idx as usize];
    let dms = deg_to_dms(degree_in_sign);

    SignPosition {
        sign,
        sign_index: sign_idx,
        degree_in_sign,
        dms,
    }
}
