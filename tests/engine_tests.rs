//! Integration tests exercising the public engine API end to end

use patiocast::{
    best_booking_window, classify_comfort, classify_wind, generate_hourly_forecast_at,
    resolve_exposure, wind_trend, ComfortTier, Coordinates, ExposureCategory, SkyCondition,
    VenueComfortReport, VenueDescriptor, WeatherSample, WindTier, WindTrend,
};

fn venue(vibe: &str, tags: &[&str]) -> VenueDescriptor {
    VenueDescriptor::new(
        "venue_1",
        "The Test Spot",
        vibe,
        tags.iter().map(|t| (*t).to_string()).collect(),
        Coordinates {
            latitude: 48.21,
            longitude: 16.37,
        },
    )
}

/// Worked reference scenario: rooftop venue, 24 °C, 10 m/s, 50 % humidity.
/// Vapour pressure ≈ 14.47 hPa, so AT ≈ 24 + 4.78 − 0.35 − 4.00 ≈ 24.4 °C
/// (warm), and effective wind 10 × 0.95 = 9.5 m/s (windy).
#[test]
fn rooftop_reference_scenario() {
    let rooftop = venue("open-air drinks", &["Rooftop"]);
    let sample = WeatherSample::new(24.0, 10.0, 50.0, SkyCondition::Clear);

    let profile = resolve_exposure(&rooftop);
    assert_eq!(profile.category, ExposureCategory::Rooftop);
    assert_eq!(profile.exposure, 0.95);

    let report = VenueComfortReport::build_at(&rooftop, &sample, 15).unwrap();
    let at = report.current.apparent_temperature.unwrap();
    assert!((at - 24.4).abs() < 0.2, "expected ~24.4°C, got {at}");
    assert_eq!(report.current.comfort, ComfortTier::Warm);

    let wind = report.current.wind.unwrap();
    assert!((wind.effective_wind_ms - 9.5).abs() < 1e-9);
    assert_eq!(wind.tier, WindTier::Windy);
}

#[test]
fn exposure_priority_over_mixed_descriptors() {
    // Matches both rooftop and beer-garden vocabularies; rooftop wins
    let mixed = venue("rooftop beer garden", &[]);
    assert_eq!(resolve_exposure(&mixed).category, ExposureCategory::Rooftop);

    // And the resolution is referentially stable
    let again = resolve_exposure(&mixed);
    assert_eq!(resolve_exposure(&mixed), again);
}

#[test]
fn forecast_anchors_to_live_sample_for_every_hour() {
    let garden = venue("beer garden", &[]);
    for hour in 0..24 {
        let series = generate_hourly_forecast_at(17.3, 6.2, Some(40.0), &garden, hour).unwrap();
        let now = &series[0];
        assert!(now.is_current);
        assert_eq!(now.temperature, 17.3_f64.round());
        assert_eq!(now.wind_speed_kmh, (6.2_f64 * 3.6).round() as i64);
    }
}

#[test]
fn trend_follows_the_synthetic_curve_overnight() {
    // Anchored in the early morning, the diurnal wind curve builds toward
    // its afternoon peak
    let garden = venue("beer garden", &[]);
    let series = generate_hourly_forecast_at(20.0, 8.0, None, &garden, 7).unwrap();
    assert_eq!(wind_trend(&series), WindTrend::Building);
}

#[test]
fn booking_window_is_reported_with_labels_and_reasoning() {
    let garden = venue("beer garden", &[]);
    let series = generate_hourly_forecast_at(21.0, 3.0, Some(55.0), &garden, 8).unwrap();

    let window = best_booking_window(&series).expect("24-point series always yields a window");
    assert_eq!(
        (window.end_hour + 24 - window.start_hour) % 24,
        3,
        "window must span exactly three hours"
    );
    assert!(window.justification.contains("°C"));
    // The wind advisory is embedded lower-cased
    assert!(window
        .justification
        .contains(&window.wind_tier.advisory().to_lowercase()));
}

#[test]
fn classifiers_are_total_functions() {
    assert_eq!(classify_comfort(None), ComfortTier::Unknown);

    let unresolvable = venue("an unremarkable establishment", &[]);
    let profile = resolve_exposure(&unresolvable);
    assert_eq!(profile.category, ExposureCategory::BeerGarden);

    // Zero wind is valid input everywhere
    let assessment = classify_wind(0.0, &profile);
    assert_eq!(assessment.tier, WindTier::Calm);
    assert_eq!(assessment.effective_wind_kmh, 0);
}
