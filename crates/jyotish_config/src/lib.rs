//! Engine settings for the jyotish workspace.
//!
//! Every key has a default, so an empty file (or no file at all) is a valid
//! configuration. Unknown keys are rejected to catch typos early.
//!
//! ```toml
//! ayanamsa = "lahiri"
//! house_system = "whole_sign"
//! aspect_orb_deg = 8.0
//!
//! [muhurta]
//! slot_hours = 2.0
//! alternative_days = 7
//! max_results = 10
//! min_rating = "good"
//!
//! [ephemeris]
//! timeout_ms = 2000
//! cache_capacity = 4096
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use jyotish_core::{Ayanamsa, CalcFlags, HouseSystem};
use jyotish_vedic_base::{MAX_ALTERNATIVE_DAYS, MAX_SLOT_HOURS, MIN_SLOT_HOURS, Rating};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load or validate settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("cannot parse settings: {0}")]
    Parse(String),
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Root settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    pub ayanamsa: Ayanamsa,
    pub house_system: HouseSystem,
    pub aspect_orb_deg: f64,
    pub muhurta: MuhurtaSettings,
    pub ephemeris: EphemerisSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ayanamsa: Ayanamsa::Lahiri,
            house_system: HouseSystem::WholeSign,
            aspect_orb_deg: jyotish_vedic_base::DEFAULT_ORB_DEG,
            muhurta: MuhurtaSettings::default(),
            ephemeris: EphemerisSettings::default(),
        }
    }
}

/// Multi-day muhurta scan settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MuhurtaSettings {
    /// Width of each scanned slot.
    pub slot_hours: f64,
    /// Days scanned forward when the requested range has no acceptable slot.
    pub alternative_days: u32,
    pub max_results: usize,
    /// Lowest rating a slot must reach to count as acceptable.
    pub min_rating: Rating,
}

impl Default for MuhurtaSettings {
    fn default() -> Self {
        Self {
            slot_hours: 2.0,
            alternative_days: 7,
            max_results: 10,
            min_rating: Rating::Good,
        }
    }
}

/// Ephemeris adapter decorator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisSettings {
    pub timeout_ms: u64,
    pub cache_capacity: usize,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 2000,
            cache_capacity: 4096,
        }
    }
}

impl EphemerisSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl EngineSettings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded engine settings");
        Ok(settings)
    }

    /// Settings from `path` when given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject values no computation can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let orb = self.aspect_orb_deg;
        if !orb.is_finite() || orb <= 0.0 || orb > 30.0 {
            return Err(ConfigError::invalid(
                "aspect_orb_deg",
                format!("{orb} is not in (0, 30]"),
            ));
        }
        let slot = self.muhurta.slot_hours;
        if !slot.is_finite() || !(MIN_SLOT_HOURS..=MAX_SLOT_HOURS).contains(&slot) {
            return Err(ConfigError::invalid(
                "muhurta.slot_hours",
                format!("{slot} is not in [{MIN_SLOT_HOURS}, {MAX_SLOT_HOURS}]"),
            ));
        }
        if self.muhurta.alternative_days > MAX_ALTERNATIVE_DAYS {
            return Err(ConfigError::invalid(
                "muhurta.alternative_days",
                format!(
                    "{} exceeds {MAX_ALTERNATIVE_DAYS}",
                    self.muhurta.alternative_days
                ),
            ));
        }
        if self.muhurta.max_results == 0 {
            return Err(ConfigError::invalid("muhurta.max_results", "must be positive"));
        }
        if self.ephemeris.timeout_ms == 0 {
            return Err(ConfigError::invalid("ephemeris.timeout_ms", "must be positive"));
        }
        if self.ephemeris.cache_capacity == 0 {
            return Err(ConfigError::invalid(
                "ephemeris.cache_capacity",
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Zodiac flags for ephemeris calls.
    pub fn calc_flags(&self) -> CalcFlags {
        CalcFlags::sidereal(self.ayanamsa)
    }
}
