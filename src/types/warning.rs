//! Weather warnings issued independently of the forecast feed.
//!
//! A [`Warning`] is read-only once built. Hourly and daily records hold it behind an
//! [`std::sync::Arc`], so the same warning can be attached to many records at once.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal severity of a warning, reported by the service as 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low = 1,
    Moderate = 2,
    Severe = 3,
    Dangerous = 4,
}

impl Severity {
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Severity::Low),
            2 => Some(Severity::Moderate),
            3 => Some(Severity::Severe),
            4 => Some(Severity::Dangerous),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Dangerous => "dangerous",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the warning is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningType {
    Wind,
    Rain,
    Snow,
    Ice,
    Thunder,
    Fog,
    Heat,
    Cold,
    StormSurge,
    Other(String),
}

impl WarningType {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "wind" | "storm" | "gale" => WarningType::Wind,
            "rain" | "cloudburst" => WarningType::Rain,
            "snow" | "snowstorm" => WarningType::Snow,
            "ice" | "glaze" | "slippery" => WarningType::Ice,
            "thunder" | "thunderstorm" => WarningType::Thunder,
            "fog" => WarningType::Fog,
            "heat" | "heatwave" => WarningType::Heat,
            "cold" | "frost" => WarningType::Cold,
            "storm-surge" | "stormsurge" | "high-water" => WarningType::StormSurge,
            _ => WarningType::Other(normalized),
        }
    }
}

/// A weather warning with its validity window.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub title: String,
    pub description: String,
    pub note: Option<String>,
    pub area: Option<String>,
    pub kind: WarningType,
    pub severity: Severity,
    pub issued_at: DateTime<Tz>,
    pub valid_from: DateTime<Tz>,
    pub valid_to: DateTime<Tz>,
}

impl Warning {
    /// Whether `instant` lies within `[valid_from, valid_to]`.
    pub fn is_active_at(&self, instant: &DateTime<Tz>) -> bool {
        self.valid_from <= *instant && *instant <= self.valid_to
    }
}
