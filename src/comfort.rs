//! Apparent-Temperature Calculator and Comfort Classifier
//!
//! Computes a feels-like temperature from a raw observation using the
//! Australian Bureau of Meteorology apparent-temperature model, then buckets
//! it into one of seven ordered comfort tiers. Every other part of the engine
//! judges thermal comfort through the apparent temperature produced here,
//! never through raw temperature and wind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative humidity assumed when the sample carries no reading
pub const DEFAULT_HUMIDITY_PCT: f64 = 50.0;

/// Ordered comfort tiers for an apparent temperature
///
/// `Unknown` is the sentinel for missing input, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortTier {
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
    Extreme,
    Unknown,
}

impl ComfortTier {
    /// Fixed advisory message for this tier
    #[must_use]
    pub fn advisory(self) -> &'static str {
        match self {
            ComfortTier::Cold => "Bundle up, heaters recommended",
            ComfortTier::Cool => "Light jacket weather",
            ComfortTier::Mild => "Pleasant for most",
            ComfortTier::Warm => "Great conditions for sitting outside",
            ComfortTier::Hot => "Seek shade and hydrate",
            ComfortTier::Extreme => "Dangerously hot, consider indoors",
            ComfortTier::Unknown => "Conditions unknown",
        }
    }
}

impl fmt::Display for ComfortTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComfortTier::Cold => "Cold",
            ComfortTier::Cool => "Cool",
            ComfortTier::Mild => "Mild",
            ComfortTier::Warm => "Warm",
            ComfortTier::Hot => "Hot",
            ComfortTier::Extreme => "Extreme",
            ComfortTier::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}

/// Compute the apparent (feels-like) temperature in °C, rounded to 1 decimal
///
/// Australian BoM model:
/// `e = (h/100) * 6.105 * exp(17.27*T / (237.7+T))` (vapour pressure, hPa),
/// wind is attenuated by the venue's shelter before it cools the body:
/// `w_eff = wind * (1 - shelter_factor)`, then
/// `AT = T + 0.33*e - 0.70*w_eff - 4.00`.
///
/// Humidity defaults to [`DEFAULT_HUMIDITY_PCT`] when absent. Returns `None`
/// when temperature or wind is missing. Outputs are deliberately not clamped
/// to a physically plausible range; the reference formula is reproduced
/// as-is.
#[must_use]
pub fn apparent_temperature(
    temp_c: Option<f64>,
    wind_ms: Option<f64>,
    humidity_pct: Option<f64>,
    shelter_factor: f64,
) -> Option<f64> {
    let temp = temp_c?;
    let wind = wind_ms?;
    let humidity = humidity_pct.unwrap_or(DEFAULT_HUMIDITY_PCT);

    let vapour_pressure = (humidity / 100.0) * 6.105 * (17.27 * temp / (237.7 + temp)).exp();
    let effective_wind = wind * (1.0 - shelter_factor);
    let apparent = temp + 0.33 * vapour_pressure - 0.70 * effective_wind - 4.00;

    Some((apparent * 10.0).round() / 10.0)
}

/// Bucket an apparent temperature into a comfort tier
///
/// Boundary values belong to the upper tier: 21.99 °C is `Mild`, exactly
/// 22.0 is `Warm`. Off-by-one drift at a boundary is a regression, not a
/// judgment call.
#[must_use]
pub fn classify_comfort(apparent_temp_c: Option<f64>) -> ComfortTier {
    let Some(at) = apparent_temp_c else {
        return ComfortTier::Unknown;
    };

    match at {
        t if t < 10.0 => ComfortTier::Cold,
        t if t < 16.0 => ComfortTier::Cool,
        t if t < 22.0 => ComfortTier::Mild,
        t if t < 28.0 => ComfortTier::Warm,
        t if t < 34.0 => ComfortTier::Hot,
        _ => ComfortTier::Extreme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_apparent_temperature_reference_case() {
        // Rooftop end-to-end reference: 24°C, 10 m/s, 50%, shelter 0.05
        let at = apparent_temperature(Some(24.0), Some(10.0), Some(50.0), 0.05).unwrap();
        assert!((at - 24.4).abs() < 0.15, "expected ~24.4, got {at}");
    }

    #[test]
    fn test_missing_inputs_yield_none() {
        assert_eq!(apparent_temperature(None, Some(5.0), Some(50.0), 0.5), None);
        assert_eq!(apparent_temperature(Some(20.0), None, Some(50.0), 0.5), None);
    }

    #[test]
    fn test_humidity_defaults_to_fifty() {
        let defaulted = apparent_temperature(Some(20.0), Some(3.0), None, 0.5);
        let explicit = apparent_temperature(Some(20.0), Some(3.0), Some(50.0), 0.5);
        assert_eq!(defaulted, explicit);
    }

    #[test]
    fn test_calm_and_negative_wind_are_valid() {
        assert!(apparent_temperature(Some(20.0), Some(0.0), Some(50.0), 0.5).is_some());
        // Negative wind is nonsensical upstream but the formula accepts it
        assert!(apparent_temperature(Some(20.0), Some(-1.0), Some(50.0), 0.5).is_some());
    }

    #[test]
    fn test_full_shelter_removes_wind_chill() {
        let sheltered = apparent_temperature(Some(18.0), Some(12.0), Some(50.0), 1.0).unwrap();
        let exposed = apparent_temperature(Some(18.0), Some(12.0), Some(50.0), 0.0).unwrap();
        assert!(sheltered > exposed);
        // With shelter_factor 1.0 wind contributes nothing
        let calm = apparent_temperature(Some(18.0), Some(0.0), Some(50.0), 0.0).unwrap();
        assert_eq!(sheltered, calm);
    }

    #[rstest]
    #[case(9.99, ComfortTier::Cold)]
    #[case(10.0, ComfortTier::Cool)]
    #[case(15.99, ComfortTier::Cool)]
    #[case(16.0, ComfortTier::Mild)]
    #[case(21.99, ComfortTier::Mild)]
    #[case(22.0, ComfortTier::Warm)]
    #[case(27.99, ComfortTier::Warm)]
    #[case(28.0, ComfortTier::Hot)]
    #[case(33.99, ComfortTier::Hot)]
    #[case(34.0, ComfortTier::Extreme)]
    #[case(-5.0, ComfortTier::Cold)]
    #[case(45.0, ComfortTier::Extreme)]
    fn test_comfort_boundaries(#[case] at: f64, #[case] expected: ComfortTier) {
        assert_eq!(classify_comfort(Some(at)), expected);
    }

    #[test]
    fn test_missing_apparent_temperature_is_unknown() {
        assert_eq!(classify_comfort(None), ComfortTier::Unknown);
    }
}
