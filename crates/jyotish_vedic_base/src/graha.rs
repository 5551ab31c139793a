//! Graha facts: rashi lordship and natural benefic/malefic nature.

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
];

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika: Mars
/// - Vrishabha/Tula: Venus
/// - Mithuna/Kanya: Mercury
/// - Karka: Moon
/// - Simha: Sun
/// - Dhanu/Meena: Jupiter
/// - Makara/Kumbha: Saturn
pub const fn rashi_lord(rashi: Rashi) -> Body {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Body::Mars,
        Rashi::Vrishabha | Rashi::Tula => Body::Venus,
        Rashi::Mithuna | Rashi::Kanya => Body::Mercury,
        Rashi::Karka => Body::Moon,
        Rashi::Simha => Body::Sun,
        Rashi::Dhanu | Rashi::Meena => Body::Jupiter,
        Rashi::Makara | Rashi::Kumbha => Body::Saturn,
    }
}

/// Jaimini co-lord of the two signs with dual lordship.
///
/// Vrischika is co-ruled by Ketu, Kumbha by Rahu.
pub const fn rashi_co_lord(rashi: Rashi) -> Option<Body> {
    match rashi {
        Rashi::Vrischika => Some(Body::Ketu),
        Rashi::Kumbha => Some(Body::Rahu),
        _ => None,
    }
}

/// Compute the n-th rashi from a given rashi (0-based indices, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 2)` = 1 (next rashi).
pub const fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}

/// Natural benefic or malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Natural nature of a graha: Jupiter, Venus, Moon and Mercury are benefic.
pub const fn natural_nature(body: Body) -> BeneficNature {
    match body {
        Body::Jupiter | Body::Venus | Body::Moon | Body::Mercury => BeneficNature::Benefic,
        _ => BeneficNature::Malefic,
    }
}
