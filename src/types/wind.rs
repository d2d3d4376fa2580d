use crate::types::measurement::Measurement;
use serde::{Deserialize, Serialize};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Wind for one hour or one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Mean wind speed.
    pub speed: Measurement,
    /// Gust speed, if forecasted.
    pub gust: Option<Measurement>,
    /// Bearing the wind blows from, in degrees. `0` means calm.
    pub direction: Option<f64>,
}

impl Wind {
    /// Returns the 16-point compass abbreviation of [`Wind::direction`].
    ///
    /// A bearing of exactly `0` (or no bearing at all) is reported as `"calm"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dmi::{Measurement, Unit, Wind};
    ///
    /// let speed = Measurement::new(4.0, None, None, Unit::MetresPerSecond);
    /// let wind = Wind { speed, gust: None, direction: Some(225.0) };
    /// assert_eq!(wind.compass(), "SW");
    /// ```
    pub fn compass(&self) -> &'static str {
        match self.direction {
            None => "calm",
            Some(degrees) if degrees == 0.0 => "calm",
            Some(degrees) => {
                let index = (degrees.rem_euclid(360.0) / 22.5).round() as usize % 16;
                COMPASS_POINTS[index]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::measurement::Unit;

    fn wind(direction: Option<f64>) -> Wind {
        Wind {
            speed: Measurement::new(3.0, None, None, Unit::MetresPerSecond),
            gust: None,
            direction,
        }
    }

    #[test]
    fn test_compass_points() {
        assert_eq!(wind(Some(0.0)).compass(), "calm");
        assert_eq!(wind(None).compass(), "calm");
        assert_eq!(wind(Some(360.0)).compass(), "N");
        assert_eq!(wind(Some(10.0)).compass(), "N");
        assert_eq!(wind(Some(90.0)).compass(), "E");
        assert_eq!(wind(Some(200.0)).compass(), "SSW");
        assert_eq!(wind(Some(350.0)).compass(), "N");
        assert_eq!(wind(Some(337.5)).compass(), "NNW");
    }
}
