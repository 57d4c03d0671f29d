//! Venue Comfort Report
//!
//! Composes the engine: resolve the venue's exposure once, assess the live
//! sample, synthesize the 24-hour series, then derive the wind trend and the
//! recommended booking window. Hosts that only need individual judgments can
//! call the component functions directly; this is the one-call surface.

use crate::analysis::{best_booking_window, wind_trend, BookingWindow, WindTrend};
use crate::comfort::{apparent_temperature, classify_comfort, ComfortTier};
use crate::exposure::{resolve_exposure, ExposureProfile};
use crate::forecast::{generate_hourly_forecast_at, HourlyPoint};
use crate::models::{VenueDescriptor, WeatherSample};
use crate::wind::{classify_wind, WindAssessment};
use crate::Result;
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Assessment of the live sample at a venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Feels-like temperature, if the sample was complete
    pub apparent_temperature: Option<f64>,
    /// Comfort tier for the feels-like temperature
    pub comfort: ComfortTier,
    /// Wind assessment, if the sample carried a wind reading
    pub wind: Option<WindAssessment>,
}

/// Full derived report for one venue and one weather sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueComfortReport {
    /// Venue the report describes
    pub venue_id: String,
    /// Resolved exposure profile
    pub profile: ExposureProfile,
    /// Live-sample assessment
    pub current: CurrentConditions,
    /// Synthetic 24-hour series, empty when the sample is incomplete
    pub hourly: Vec<HourlyPoint>,
    /// Wind trend over the next hours
    pub trend: WindTrend,
    /// Recommended booking window, when one could be derived
    pub best_window: Option<BookingWindow>,
}

impl VenueComfortReport {
    /// Build a report anchored at the local wall-clock hour
    pub fn build(venue: &VenueDescriptor, sample: &WeatherSample) -> Result<Self> {
        Self::build_at(venue, sample, Local::now().hour())
    }

    /// Build a report anchored at an explicit hour of day
    ///
    /// A sample missing temperature or wind still produces a report: the
    /// current conditions fall back to sentinels and the forecast-derived
    /// sections stay empty. Fails only for `current_hour > 23`.
    pub fn build_at(
        venue: &VenueDescriptor,
        sample: &WeatherSample,
        current_hour: u32,
    ) -> Result<Self> {
        info!(venue = %venue.id, current_hour, "building venue comfort report");

        let profile = resolve_exposure(venue);

        let apparent = apparent_temperature(
            sample.temperature,
            sample.wind_speed_ms,
            sample.humidity_pct,
            profile.shelter_factor,
        );
        let current = CurrentConditions {
            apparent_temperature: apparent,
            comfort: classify_comfort(apparent),
            wind: sample.wind_speed_ms.map(|w| classify_wind(w, &profile)),
        };

        let hourly = match (sample.temperature, sample.wind_speed_ms) {
            (Some(temp), Some(wind)) => {
                generate_hourly_forecast_at(temp, wind, sample.humidity_pct, venue, current_hour)?
            }
            _ => {
                debug!(venue = %venue.id, "incomplete sample, skipping forecast synthesis");
                Vec::new()
            }
        };

        let trend = wind_trend(&hourly);
        let best_window = best_booking_window(&hourly);

        Ok(Self {
            venue_id: venue.id.clone(),
            profile,
            current,
            hourly,
            trend,
            best_window,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::ExposureCategory;
    use crate::models::{Coordinates, SkyCondition};
    use crate::wind::WindTier;

    fn rooftop_venue() -> VenueDescriptor {
        VenueDescriptor::new(
            "v_rooftop",
            "Skyline Terrace",
            "rooftop beer garden with views",
            vec!["Rooftop".to_string()],
            Coordinates {
                latitude: -33.87,
                longitude: 151.21,
            },
        )
    }

    #[test]
    fn test_full_report() {
        let sample = WeatherSample::new(24.0, 10.0, 50.0, SkyCondition::Clear);
        let report = VenueComfortReport::build_at(&rooftop_venue(), &sample, 12).unwrap();

        assert_eq!(report.profile.category, ExposureCategory::Rooftop);
        assert_eq!(report.current.comfort, ComfortTier::Warm);
        assert_eq!(report.current.wind.unwrap().tier, WindTier::Windy);
        assert_eq!(report.hourly.len(), 24);
        assert!(report.best_window.is_some());
    }

    #[test]
    fn test_incomplete_sample_degrades_gracefully() {
        let sample = WeatherSample {
            temperature: None,
            wind_speed_ms: None,
            humidity_pct: None,
            condition: SkyCondition::Unknown,
        };
        let report = VenueComfortReport::build_at(&rooftop_venue(), &sample, 12).unwrap();

        assert_eq!(report.current.comfort, ComfortTier::Unknown);
        assert!(report.current.wind.is_none());
        assert!(report.hourly.is_empty());
        assert_eq!(report.trend, crate::analysis::WindTrend::Steady);
        assert!(report.best_window.is_none());
    }
}
