//! Defines the `WeatherCondition` enum, mapping the service's numeric weather symbol
//! codes to descriptive variants and to the icon strings carried on hourly records.

/// Suffix appended to an icon string for the night variant of a symbol.
pub const NIGHT_SUFFIX: &str = "-night";
/// Suffix some feeds append to the day variant of an icon.
pub const DAY_SUFFIX: &str = "-day";

/// Offset between a day symbol code and its night variant.
const NIGHT_OFFSET: i64 = 100;

/// Represents the weather symbol reported for a forecast hour.
///
/// The `symbol` field of a timeserie entry holds a code below 100 for daytime and the
/// same code plus 100 for night. Use [`WeatherCondition::from_symbol`] to decode both
/// the condition and the day/night variant.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCondition {
    /// Code 1: Clear sky.
    Clear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Cloudy.
    Cloudy = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 60: Light rain.
    LightRain = 60,
    /// Code 63: Rain.
    Rain = 63,
    /// Code 68: Sleet.
    Sleet = 68,
    /// Code 70: Snow.
    Snow = 70,
    /// Code 80: Rain showers.
    RainShowers = 80,
    /// Code 81: Heavy rain showers.
    HeavyRainShowers = 81,
    /// Code 83: Sleet showers.
    SleetShowers = 83,
    /// Code 85: Snow showers.
    SnowShowers = 85,
    /// Code 95: Thunderstorm.
    Thunderstorm = 95,
}

impl WeatherCondition {
    /// Attempts to decode a symbol code into a condition and a night flag.
    ///
    /// # Returns
    ///
    /// * `Some((condition, is_night))` for a known day code or its night variant.
    /// * `None` for any other code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dmi::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_symbol(2), Some((WeatherCondition::PartlyCloudy, false)));
    /// assert_eq!(WeatherCondition::from_symbol(102), Some((WeatherCondition::PartlyCloudy, true)));
    /// assert_eq!(WeatherCondition::from_symbol(99), None);
    /// ```
    pub fn from_symbol(code: i64) -> Option<(Self, bool)> {
        let (base, night) = if code > NIGHT_OFFSET {
            (code - NIGHT_OFFSET, true)
        } else {
            (code, false)
        };
        let condition = match base {
            1 => WeatherCondition::Clear,
            2 => WeatherCondition::PartlyCloudy,
            3 => WeatherCondition::Cloudy,
            45 => WeatherCondition::Fog,
            60 => WeatherCondition::LightRain,
            63 => WeatherCondition::Rain,
            68 => WeatherCondition::Sleet,
            70 => WeatherCondition::Snow,
            80 => WeatherCondition::RainShowers,
            81 => WeatherCondition::HeavyRainShowers,
            83 => WeatherCondition::SleetShowers,
            85 => WeatherCondition::SnowShowers,
            95 => WeatherCondition::Thunderstorm,
            _ => return None,
        };
        Some((condition, night))
    }

    /// The day-variant icon name for this condition.
    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::PartlyCloudy => "partly-cloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Fog => "fog",
            WeatherCondition::LightRain => "light-rain",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Sleet => "sleet",
            WeatherCondition::Snow => "snow",
            WeatherCondition::RainShowers => "rain-showers",
            WeatherCondition::HeavyRainShowers => "heavy-rain-showers",
            WeatherCondition::SleetShowers => "sleet-showers",
            WeatherCondition::SnowShowers => "snow-showers",
            WeatherCondition::Thunderstorm => "thunderstorm",
        }
    }
}

/// Decodes a raw symbol code into the icon string of an hourly record,
/// e.g. `102` becomes `partly-cloudy-night`.
pub fn icon_for_symbol(code: i64) -> Option<String> {
    WeatherCondition::from_symbol(code).map(|(condition, night)| {
        if night {
            format!("{}{}", condition.icon(), NIGHT_SUFFIX)
        } else {
            condition.icon().to_string()
        }
    })
}

/// Strips a trailing `-night` or `-day` variant from an icon string.
pub fn strip_variant(icon: &str) -> &str {
    icon.strip_suffix(NIGHT_SUFFIX)
        .or_else(|| icon.strip_suffix(DAY_SUFFIX))
        .unwrap_or(icon)
}
