use crate::types::measurement::Measurement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form of the forecasted precipitation, as reported by the `precipType` field.
///
/// Unrecognised values are kept verbatim in [`PrecipitationType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecipitationType {
    Rain,
    Drizzle,
    Sleet,
    Snow,
    Hail,
    FreezingRain,
    Other(String),
}

impl PrecipitationType {
    /// Parses a raw type string. Matching ignores case and surrounding whitespace.
    /// Returns `None` for an empty string.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        let kind = match normalized.as_str() {
            "" => return None,
            "rain" => PrecipitationType::Rain,
            "drizzle" => PrecipitationType::Drizzle,
            "sleet" => PrecipitationType::Sleet,
            "snow" => PrecipitationType::Snow,
            "hail" => PrecipitationType::Hail,
            "freezing-rain" | "freezing rain" | "freezingrain" => PrecipitationType::FreezingRain,
            _ => PrecipitationType::Other(normalized),
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PrecipitationType::Rain => "rain",
            PrecipitationType::Drizzle => "drizzle",
            PrecipitationType::Sleet => "sleet",
            PrecipitationType::Snow => "snow",
            PrecipitationType::Hail => "hail",
            PrecipitationType::FreezingRain => "freezing-rain",
            PrecipitationType::Other(other) => other,
        }
    }
}

impl fmt::Display for PrecipitationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Precipitation amount for one hour or one day, plus its form when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    pub amount: Measurement,
    pub kind: Option<PrecipitationType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown_types() {
        assert_eq!(PrecipitationType::parse("Rain"), Some(PrecipitationType::Rain));
        assert_eq!(
            PrecipitationType::parse(" freezing rain "),
            Some(PrecipitationType::FreezingRain)
        );
        assert_eq!(PrecipitationType::parse(""), None);
        assert_eq!(
            PrecipitationType::parse("Graupel"),
            Some(PrecipitationType::Other("graupel".to_string()))
        );
    }

    #[test]
    fn test_as_str_parses_back() {
        for kind in [
            PrecipitationType::Rain,
            PrecipitationType::Snow,
            PrecipitationType::FreezingRain,
            PrecipitationType::Other("graupel".to_string()),
        ] {
            assert_eq!(PrecipitationType::parse(kind.as_str()), Some(kind));
        }
    }
}
