//! Ephemeris boundary for the jyotish engine.
//!
//! This crate defines the [`Ephemeris`] contract every computation goes
//! through, the reference types it speaks ([`Body`], [`Ayanamsa`],
//! [`HouseSystem`]), two decorators ([`CachedEphemeris`] and
//! [`TimedEphemeris`]) and an approximate built-in adapter
//! ([`MeanElementsEphemeris`]).
//!
//! ```rust,ignore
//! let eph = CachedEphemeris::new(
//!     TimedEphemeris::new(MeanElementsEphemeris::new(), Duration::from_secs(2))?,
//!     4096,
//! );
//! let moon = eph.calc(jd, Body::Moon, CalcFlags::sidereal(Ayanamsa::Lahiri))?;
//! ```

pub mod angle;
pub mod ayanamsa;
pub mod body;
pub mod cache;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod lookup;
pub mod mean_elements;
pub mod timeout;

pub use angle::{arc_forward, normalize_deg, separation_deg};
pub use ayanamsa::{Ayanamsa, general_precession_longitude_deg};
pub use body::Body;
pub use cache::{CachedEphemeris, QueryStats};
pub use ephemeris::{BodyState, CalcFlags, Ephemeris};
pub use error::{EphemerisError, LookupError};
pub use houses::{HouseCusps, HouseSystem};
pub use lookup::{FixedUtcOffset, Geocoder, UtcOffsetResolver};
pub use mean_elements::MeanElementsEphemeris;
pub use timeout::TimedEphemeris;

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time assertion: adapters and decorators must be Send + Sync.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<MeanElementsEphemeris>();
            assert_send_sync::<CachedEphemeris<MeanElementsEphemeris>>();
            assert_send_sync::<TimedEphemeris<MeanElementsEphemeris>>();
        }
    };
}
