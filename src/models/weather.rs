//! Weather sample model and display methods

use serde::{Deserialize, Serialize};

/// Categorical sky condition reported by the weather provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    Clear,
    PartlyCloudy,
    Clouds,
    Rain,
    Storm,
    Snow,
    Fog,
    Unknown,
}

impl SkyCondition {
    /// Whether this condition counts as precipitation for scoring purposes
    #[must_use]
    pub fn is_wet(self) -> bool {
        matches!(self, SkyCondition::Rain | SkyCondition::Storm | SkyCondition::Snow)
    }
}

/// One instantaneous weather observation, supplied by the caller
///
/// The engine never fetches weather itself; the host obtains a sample from
/// its provider and passes it in. Missing readings are `None`, which the
/// classifiers map to sentinel results rather than errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Air temperature in Celsius
    pub temperature: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed_ms: Option<f64>,
    /// Relative humidity percentage (0-100); classifiers default to 50
    pub humidity_pct: Option<f64>,
    /// Categorical sky condition
    pub condition: SkyCondition,
}

impl WeatherSample {
    /// Create a fully-populated sample
    #[must_use]
    pub fn new(temperature: f64, wind_speed_ms: f64, humidity_pct: f64, condition: SkyCondition) -> Self {
        Self {
            temperature: Some(temperature),
            wind_speed_ms: Some(wind_speed_ms),
            humidity_pct: Some(humidity_pct),
            condition,
        }
    }

    /// Format temperature with unit, or a placeholder when missing
    #[must_use]
    pub fn format_temperature(&self) -> String {
        match self.temperature {
            Some(t) => format!("{t:.1}°C"),
            None => "--°C".to_string(),
        }
    }

    /// Format wind speed with unit, or a placeholder when missing
    #[must_use]
    pub fn format_wind(&self) -> String {
        match self.wind_speed_ms {
            Some(w) => format!("{w:.1} m/s"),
            None => "-- m/s".to_string(),
        }
    }
}
