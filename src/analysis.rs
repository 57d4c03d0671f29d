//! Trend & Window Analyzer
//!
//! Summary judgments over an hourly series: which way the wind is heading,
//! and the best contiguous multi-hour window for sitting outside. The
//! sliding-window maximizer is generic over the per-hour scoring function,
//! so the comfort-series window and the provider-data window share one
//! implementation instead of two subtly divergent copies.

use crate::comfort::ComfortTier;
use crate::exposure::ExposureProfile;
use crate::forecast::HourlyPoint;
use crate::models::SkyCondition;
use crate::wind::{classify_wind, WindTier};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Direction the wind is heading over the next few hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindTrend {
    Building,
    Calming,
    Steady,
}

impl fmt::Display for WindTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindTrend::Building => "Building",
            WindTrend::Calming => "Calming",
            WindTrend::Steady => "Steady",
        };
        write!(f, "{name}")
    }
}

/// Recommended booking window within an hourly series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingWindow {
    /// Hour of day the window starts
    pub start_hour: u32,
    /// Hour of day the window ends (exclusive)
    pub end_hour: u32,
    /// Display label of the first hour
    pub start_label: String,
    /// Display label of the hour after the window
    pub end_label: String,
    /// Mean feels-like temperature across the window's points
    pub average_apparent_temperature: Option<f64>,
    /// Wind tier of the window's first hour
    pub wind_tier: WindTier,
    /// Generated human-readable justification
    pub justification: String,
}

/// Width of the recommended booking window, in hours
pub const BOOKING_WINDOW_HOURS: usize = 3;

/// Classify the wind trend at the start of a series
///
/// Compares the live point against the point four hours out. Fewer than
/// five points yields `Steady` (insufficient-data default, not an error).
#[must_use]
pub fn wind_trend(series: &[HourlyPoint]) -> WindTrend {
    let (Some(first), Some(later)) = (series.first(), series.get(4)) else {
        return WindTrend::Steady;
    };

    let delta = later.wind_ms - first.wind_ms;
    let ratio = if first.wind_ms == 0.0 {
        delta
    } else {
        delta / first.wind_ms
    };

    if ratio > 0.3 || delta > 3.0 {
        WindTrend::Building
    } else if ratio < -0.3 || delta < -3.0 {
        WindTrend::Calming
    } else {
        WindTrend::Steady
    }
}

/// Find the fixed-width contiguous window with the highest summed score
///
/// Returns the start index and total score of the winning window, or `None`
/// when the series is shorter than the window (or the width is zero). Ties
/// go to the earliest start: the scan only replaces the incumbent on a
/// strictly greater sum.
pub fn best_window<T, F>(series: &[T], score: F, width: usize) -> Option<(usize, f64)>
where
    F: Fn(&T) -> f64,
{
    if width == 0 || series.len() < width {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for start in 0..=(series.len() - width) {
        let total: f64 = series[start..start + width].iter().map(&score).sum();
        match best {
            Some((_, best_total)) if total > best_total => best = Some((start, total)),
            None => best = Some((start, total)),
            _ => {}
        }
    }
    best
}

/// Per-hour comfort score for the booking-window search
///
/// Warm and mild hours dominate, calm wind adds, severe wind subtracts, and
/// sociable daytime hours get a small bonus (a further one inside the
/// 10am-4pm core).
fn comfort_hour_score(point: &HourlyPoint) -> f64 {
    let comfort = match point.comfort {
        ComfortTier::Warm => 5.0,
        ComfortTier::Mild => 4.0,
        ComfortTier::Cool => 2.0,
        ComfortTier::Hot => 1.0,
        _ => 0.0,
    };
    let wind = match point.wind_tier {
        WindTier::Calm => 3.0,
        WindTier::Breezy => 1.0,
        WindTier::Windy => -1.0,
        WindTier::Severe => -3.0,
    };
    let mut daytime = 0.0;
    if (9..=21).contains(&point.hour_of_day) {
        daytime += 1.0;
    }
    if (10..=16).contains(&point.hour_of_day) {
        daytime += 1.0;
    }
    comfort + wind + daytime
}

/// Find the best three-hour booking window in a comfort series
///
/// `None` only when the series is shorter than the window.
#[must_use]
pub fn best_booking_window(series: &[HourlyPoint]) -> Option<BookingWindow> {
    let (start, total) = best_window(series, comfort_hour_score, BOOKING_WINDOW_HOURS)?;
    let points = &series[start..start + BOOKING_WINDOW_HOURS];
    debug!(start, total, "selected booking window");

    let known: Vec<f64> = points.iter().filter_map(|p| p.apparent_temperature).collect();
    let average_apparent = if known.is_empty() {
        None
    } else {
        let mean = known.iter().sum::<f64>() / known.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    };

    let wind_tier = points[0].wind_tier;
    let justification = match average_apparent {
        Some(at) => format!(
            "Feels like {at:.1}°C on average, {}",
            wind_tier.advisory().to_lowercase()
        ),
        None => format!(
            "Conditions unreadable, {}",
            wind_tier.advisory().to_lowercase()
        ),
    };

    let end_hour = (points[2].hour_of_day + 1) % 24;
    Some(BookingWindow {
        start_hour: points[0].hour_of_day,
        end_hour,
        start_label: points[0].label.clone(),
        end_label: crate::forecast::hour_label(end_hour),
        average_apparent_temperature: average_apparent,
        wind_tier,
        justification,
    })
}

/// One raw hourly data point from an external weather provider
///
/// Used by hosts that have real provider forecasts rather than the
/// synthetic diurnal series; scored independently but through the same
/// window maximizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderHourly {
    /// Hour of day, 0-23
    pub hour_of_day: u32,
    /// Forecast temperature, °C
    pub temperature_c: f64,
    /// Forecast wind speed, m/s
    pub wind_ms: f64,
    /// UV index (0-11+)
    pub uv_index: f64,
    /// Forecast sky condition
    pub condition: SkyCondition,
}

/// Per-hour 0-100 score for provider forecast data
///
/// Baseline 50; an 18-26 °C band earns +20 (+5 for the near bands, -15
/// outside), wind tier swings from +15 (calm) to -30 (severe), high UV
/// costs up to -10 unless the venue is shaded (shelter_factor >= 0.5), and
/// wet or overcast skies subtract. Clamped to 0-100.
fn provider_hour_score(hour: &ProviderHourly, profile: &ExposureProfile) -> f64 {
    let mut score: f64 = 50.0;

    score += match hour.temperature_c {
        t if (18.0..=26.0).contains(&t) => 20.0,
        t if (10.0..18.0).contains(&t) || (26.0..=30.0).contains(&t) => 5.0,
        _ => -15.0,
    };

    score += match classify_wind(hour.wind_ms, profile).tier {
        WindTier::Calm => 15.0,
        WindTier::Breezy => 5.0,
        WindTier::Windy => -10.0,
        WindTier::Severe => -30.0,
    };

    let shaded = profile.shelter_factor >= 0.5;
    if !shaded {
        if hour.uv_index >= 8.0 {
            score -= 10.0;
        } else if hour.uv_index >= 6.0 {
            score -= 5.0;
        }
    }

    if hour.condition.is_wet() {
        score -= 25.0;
    } else if hour.condition == SkyCondition::Clouds {
        score -= 5.0;
    }

    score.clamp(0.0, 100.0)
}

/// Find the best fixed-width window in raw provider data
///
/// Returns the start index and summed 0-100 score, first window winning
/// ties, mirroring [`best_booking_window`].
#[must_use]
pub fn best_provider_window(
    series: &[ProviderHourly],
    profile: &ExposureProfile,
    width: usize,
) -> Option<(usize, f64)> {
    best_window(series, |hour| provider_hour_score(hour, profile), width)
}
