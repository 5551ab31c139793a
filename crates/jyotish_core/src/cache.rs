//! Memoizing decorator for any [`Ephemeris`].
//!
//! Keys use `jd.to_bits()`: the same Julian Day requested by the panchang,
//! chart and muhurta paths for one moment is bit-identical, so exact keys
//! are enough.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::body::Body;
use crate::ephemeris::{BodyState, CalcFlags, Ephemeris};
use crate::error::EphemerisError;
use crate::houses::{HouseCusps, HouseSystem};

type CalcKey = (u64, Body, CalcFlags);
type HouseKey = (u64, u64, u64, HouseSystem, CalcFlags);

/// Telemetry from a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryStats {
    /// Calls forwarded to the inner adapter.
    pub evaluations: u64,
    pub cache_hits: u64,
}

/// Caches successful adapter results up to `capacity` entries per table.
///
/// Errors are not cached. When a table is full it is cleared before the
/// next insert, which keeps memory bounded without per-entry bookkeeping.
#[derive(Debug)]
pub struct CachedEphemeris<E> {
    inner: E,
    capacity: usize,
    calc_cache: RwLock<HashMap<CalcKey, BodyState>>,
    house_cache: RwLock<HashMap<HouseKey, HouseCusps>>,
    evaluations: AtomicU64,
    cache_hits: AtomicU64,
}

impl<E: Ephemeris> CachedEphemeris<E> {
    /// Wrap `inner`. A zero capacity is treated as one.
    pub fn new(inner: E, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner,
            capacity,
            calc_cache: RwLock::new(HashMap::with_capacity(capacity.min(1024))),
            house_cache: RwLock::new(HashMap::new()),
            evaluations: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> QueryStats {
        QueryStats {
            evaluations: self.evaluations.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }

    /// Number of cached body states.
    pub fn len(&self) -> usize {
        self.calc_cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.calc_cache.write().clear();
        self.house_cache.write().clear();
    }

    fn hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    fn miss(&self) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
    }
}

fn insert_bounded<K: std::hash::Hash + Eq, V>(
    table: &RwLock<HashMap<K, V>>,
    capacity: usize,
    key: K,
    value: V,
) {
    let mut guard = table.write();
    if guard.len() >= capacity {
        tracing::debug!(capacity, "ephemeris cache full, clearing");
        guard.clear();
    }
    guard.insert(key, value);
}

impl<E: Ephemeris> Ephemeris for CachedEphemeris<E> {
    fn calc(&self, jd: f64, body: Body, flags: CalcFlags) -> Result<BodyState, EphemerisError> {
        let key = (jd.to_bits(), body, flags);
        if let Some(state) = self.calc_cache.read().get(&key) {
            self.hit();
            return Ok(*state);
        }
        self.miss();
        let state = self.inner.calc(jd, body, flags)?;
        insert_bounded(&self.calc_cache, self.capacity, key, state);
        Ok(state)
    }

    fn houses(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
        flags: CalcFlags,
    ) -> Result<HouseCusps, EphemerisError> {
        let key = (
            jd.to_bits(),
            latitude_deg.to_bits(),
            longitude_deg.to_bits(),
            system,
            flags,
        );
        if let Some(cusps) = self.house_cache.read().get(&key) {
            self.hit();
            return Ok(*cusps);
        }
        self.miss();
        let cusps = self
            .inner
            .houses(jd, latitude_deg, longitude_deg, system, flags)?;
        insert_bounded(&self.house_cache, self.capacity, key, cusps);
        Ok(cusps)
    }
}
