//! Diurnal Forecast Generator
//!
//! Synthesizes a 24-point hourly series from a single live weather sample
//! and two fixed diurnal shape curves. The curves are normalized against the
//! live sample so the synthesized "now" point reproduces the input exactly
//! (modulo rounding); every other hour is extrapolated from shape alone, not
//! from any external forecast.

use crate::comfort::{apparent_temperature, classify_comfort, ComfortTier};
use crate::error::EngineError;
use crate::exposure::resolve_exposure;
use crate::models::VenueDescriptor;
use crate::wind::{classify_wind, WindTier};
use crate::Result;
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Relative wind strength through the day, indexed by hour
///
/// Low overnight, building through the morning to a mid-afternoon peak at
/// hour 16, easing again by evening.
const WIND_MULTIPLIER: [f64; 24] = [
    0.30, 0.25, 0.20, 0.20, 0.20, 0.25, // 00-05
    0.30, 0.40, 0.50, 0.60, 0.70, 0.80, // 06-11
    0.90, 1.00, 1.10, 1.20, 1.30, 1.25, // 12-17
    1.10, 0.90, 0.70, 0.50, 0.40, 0.35, // 18-23
];

/// Temperature deviation from the current reading, °C, indexed by hour
///
/// Trough of −4 around 3am, peak of +4 around hour 14.
const TEMP_OFFSET: [f64; 24] = [
    -2.5, -3.0, -3.5, -4.0, -3.8, -3.5, // 00-05
    -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, // 06-11
    3.0, 3.5, 4.0, 3.8, 3.5, 3.0, // 12-17
    2.0, 1.0, 0.0, -1.0, -1.5, -2.0, // 18-23
];

/// One synthesized hour of venue weather
///
/// Regenerated fresh from the latest sample on every call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Hour of day, 0-23
    pub hour_of_day: u32,
    /// Display label: "Now" for the live point, otherwise e.g. "3pm"
    pub label: String,
    /// Synthesized temperature, rounded to a whole °C
    pub temperature: f64,
    /// Synthesized wind speed, m/s (unrounded, feeds the trend analyzer)
    pub wind_ms: f64,
    /// Wind speed converted for display, km/h (rounded)
    pub wind_speed_kmh: i64,
    /// Feels-like temperature at this hour
    pub apparent_temperature: Option<f64>,
    /// Comfort tier for the feels-like temperature
    pub comfort: ComfortTier,
    /// Wind danger tier for the effective wind
    pub wind_tier: WindTier,
    /// Whether this is the live sample rather than an extrapolated hour
    pub is_current: bool,
}

/// Format an hour of day as a 12-hour label ("12am", "1pm", ...)
pub(crate) fn hour_label(hour: u32) -> String {
    let (h12, suffix) = match hour {
        0 => (12, "am"),
        1..=11 => (hour, "am"),
        12 => (12, "pm"),
        _ => (hour - 12, "pm"),
    };
    format!("{h12}{suffix}")
}

/// Generate the 24-hour synthetic series starting at the given hour
///
/// The current wind is divided by its hour's multiplier and the current
/// temperature has its hour's offset subtracted, recovering implied "base"
/// values; each hour is then regenerated as `base * multiplier[h]` and
/// `base + offset[h]`. Index 0 is the anchored live point. Fails only for
/// `current_hour > 23`.
pub fn generate_hourly_forecast_at(
    temp_c: f64,
    wind_ms: f64,
    humidity_pct: Option<f64>,
    venue: &VenueDescriptor,
    current_hour: u32,
) -> Result<Vec<HourlyPoint>> {
    if current_hour > 23 {
        return Err(EngineError::validation(format!(
            "current_hour must be 0-23, got {current_hour}"
        )));
    }

    let profile = resolve_exposure(venue);
    let base_wind = wind_ms / WIND_MULTIPLIER[current_hour as usize];
    let base_temp = temp_c - TEMP_OFFSET[current_hour as usize];

    debug!(
        venue = %venue.id,
        current_hour,
        base_wind,
        base_temp,
        "generating diurnal forecast"
    );

    let mut series = Vec::with_capacity(24);
    for i in 0..24u32 {
        let hour = (current_hour + i) % 24;
        let temperature = base_temp + TEMP_OFFSET[hour as usize];
        let wind = base_wind * WIND_MULTIPLIER[hour as usize];

        let apparent =
            apparent_temperature(Some(temperature), Some(wind), humidity_pct, profile.shelter_factor);
        let assessment = classify_wind(wind, &profile);

        series.push(HourlyPoint {
            hour_of_day: hour,
            label: if i == 0 { "Now".to_string() } else { hour_label(hour) },
            temperature: temperature.round(),
            wind_ms: wind,
            wind_speed_kmh: (wind * 3.6).round() as i64,
            apparent_temperature: apparent,
            comfort: classify_comfort(apparent),
            wind_tier: assessment.tier,
            is_current: i == 0,
        });
    }

    Ok(series)
}

/// Generate the 24-hour series anchored at the local wall-clock hour
pub fn generate_hourly_forecast(
    temp_c: f64,
    wind_ms: f64,
    humidity_pct: Option<f64>,
    venue: &VenueDescriptor,
) -> Result<Vec<HourlyPoint>> {
    generate_hourly_forecast_at(temp_c, wind_ms, humidity_pct, venue, Local::now().hour())
}
