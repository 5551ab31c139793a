//! Panchang: the five limbs of the day derived from Sun and Moon longitudes.
//!
//! Longitude retrieval happens upstream. Each limb records whether its
//! inputs were available instead of falling back to a default number.

use std::fmt::Display;

use jyotish_core::Body;
use serde::Serialize;

use crate::karana::{KaranaInfo, karana_from_longitudes};
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::tithi::{TithiInfo, tithi_from_longitudes};
use crate::vaar::Vaar;
use crate::yoga::{YogaInfo, yoga_from_longitudes};

/// A panchang limb that is either computed or explicitly unavailable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element<T> {
    Available(T),
    Unavailable { reason: String },
}

impl<T> Element<T> {
    pub fn available(&self) -> Option<&T> {
        match self {
            Self::Available(v) => Some(v),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Element<U> {
        match self {
            Self::Available(v) => Element::Available(f(v)),
            Self::Unavailable { reason } => Element::Unavailable { reason },
        }
    }
}

/// Tithi, nakshatra, yoga, karana and vaar for one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panchang {
    pub tithi: Element<TithiInfo>,
    pub nakshatra: Element<NakshatraInfo>,
    pub yoga: Element<YogaInfo>,
    pub karana: Element<KaranaInfo>,
    pub vaar: Vaar,
    pub vaar_lord: Body,
}

impl Panchang {
    /// True when every limb was computed.
    pub fn is_complete(&self) -> bool {
        self.tithi.is_available()
            && self.nakshatra.is_available()
            && self.yoga.is_available()
            && self.karana.is_available()
    }
}

/// Derive the panchang from Sun and Moon longitude lookups.
///
/// The nakshatra only needs the Moon; tithi, yoga and karana need both.
/// `weekday` is 0-based from Sunday and comes from the civil date.
pub fn derive_panchang<E: Display>(
    sun: Result<f64, E>,
    moon: Result<f64, E>,
    weekday: u8,
) -> Panchang {
    let sun = sun.map_err(|e| format!("sun longitude unavailable: {e}"));
    let moon = moon.map_err(|e| format!("moon longitude unavailable: {e}"));

    let both = match (&sun, &moon) {
        (Ok(s), Ok(m)) => Ok((*s, *m)),
        (Err(e), _) | (_, Err(e)) => Err(e.clone()),
    };

    let nakshatra = match &moon {
        Ok(m) => Element::Available(nakshatra_from_longitude(*m)),
        Err(reason) => Element::Unavailable {
            reason: reason.clone(),
        },
    };

    let (tithi, yoga, karana) = match both {
        Ok((s, m)) => (
            Element::Available(tithi_from_longitudes(m, s)),
            Element::Available(yoga_from_longitudes(s, m)),
            Element::Available(karana_from_longitudes(m, s)),
        ),
        Err(reason) => {
            tracing::warn!(%reason, "panchang limbs unavailable");
            (
                Element::Unavailable {
                    reason: reason.clone(),
                },
                Element::Unavailable {
                    reason: reason.clone(),
                },
                Element::Unavailable { reason },
            )
        }
    };

    let vaar = Vaar::from_index(weekday);
    Panchang {
        tithi,
        nakshatra,
        yoga,
        karana,
        vaar,
        vaar_lord: vaar.lord(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::Nakshatra;

    #[test]
    fn all_limbs_available() {
        let p = derive_panchang::<String>(Ok(10.0), Ok(130.0), 1);
        assert!(p.is_complete());
        assert_eq!(p.tithi.available().map(|t| t.number), Some(11));
        assert_eq!(
            p.nakshatra.available().map(|n| n.nakshatra),
            Some(Nakshatra::Magha)
        );
        assert_eq!(p.vaar, Vaar::Somavaar);
        assert_eq!(p.vaar_lord, Body::Moon);
    }

    #[test]
    fn sun_failure_keeps_nakshatra() {
        let p = derive_panchang(Err("out of range"), Ok(200.0), 0);
        assert!(!p.is_complete());
        assert!(p.nakshatra.is_available());
        assert!(!p.tithi.is_available());
        assert!(!p.yoga.is_available());
        assert!(!p.karana.is_available());
        assert!(
            p.tithi
                .unavailable_reason()
                .is_some_and(|r| r.contains("out of range"))
        );
    }

    #[test]
    fn moon_failure_marks_everything_but_vaar() {
        let p = derive_panchang(Ok(10.0), Err("no moon"), 6);
        assert!(!p.nakshatra.is_available());
        assert!(!p.tithi.is_available());
        assert_eq!(p.vaar_lord, Body::Saturn);
    }

    #[test]
    fn element_map() {
        let e: Element<u8> = Element::Available(3);
        assert_eq!(e.map(|v| v * 2), Element::Available(6));
    }
}
