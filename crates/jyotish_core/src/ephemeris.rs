//! The ephemeris adapter contract.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ayanamsa::Ayanamsa;
use crate::body::Body;
use crate::error::EphemerisError;
use crate::houses::{HouseCusps, HouseSystem};

/// Zodiac selection for a call.
///
/// `ayanamsa` is ignored when `sidereal` is false, but still takes part in
/// equality so cache keys stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalcFlags {
    pub sidereal: bool,
    pub ayanamsa: Ayanamsa,
}

impl CalcFlags {
    pub const fn sidereal(ayanamsa: Ayanamsa) -> Self {
        Self {
            sidereal: true,
            ayanamsa,
        }
    }

    pub const fn tropical() -> Self {
        Self {
            sidereal: false,
            ayanamsa: Ayanamsa::Lahiri,
        }
    }

    /// Offset to subtract from a tropical longitude at `jd`.
    pub fn offset_deg(&self, jd: f64) -> f64 {
        if self.sidereal {
            self.ayanamsa.value_at(jd)
        } else {
            0.0
        }
    }
}

impl Default for CalcFlags {
    fn default() -> Self {
        Self::sidereal(Ayanamsa::default())
    }
}

/// Ecliptic longitude and its rate for one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Longitude in degrees, `[0, 360)`.
    pub longitude_deg: f64,
    pub speed_deg_per_day: f64,
}

impl BodyState {
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// Boundary to an ephemeris computation.
///
/// Implementations must be pure functions of their arguments and safe to
/// call from several threads at once.
pub trait Ephemeris: Send + Sync {
    /// Longitude and speed of `body` at Julian Day (UT) `jd`.
    fn calc(&self, jd: f64, body: Body, flags: CalcFlags) -> Result<BodyState, EphemerisError>;

    /// Ascendant, MC and house cusps for an observer.
    ///
    /// `flags` selects the zodiac the angles are reported in.
    fn houses(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
        flags: CalcFlags,
    ) -> Result<HouseCusps, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for Arc<E> {
    fn calc(&self, jd: f64, body: Body, flags: CalcFlags) -> Result<BodyState, EphemerisError> {
        (**self).calc(jd, body, flags)
    }

    fn houses(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
        flags: CalcFlags,
    ) -> Result<HouseCusps, EphemerisError> {
        (**self).houses(jd, latitude_deg, longitude_deg, system, flags)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn calc(&self, jd: f64, body: Body, flags: CalcFlags) -> Result<BodyState, EphemerisError> {
        (**self).calc(jd, body, flags)
    }

    fn houses(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
        flags: CalcFlags,
    ) -> Result<HouseCusps, EphemerisError> {
        (**self).houses(jd, latitude_deg, longitude_deg, system, flags)
    }
}

/// Reject non-finite inputs before they reach an adapter.
pub fn check_jd(jd: f64) -> Result<(), EphemerisError> {
    if jd.is_finite() {
        Ok(())
    } else {
        Err(EphemerisError::InvalidQuery("julian day must be finite"))
    }
}
