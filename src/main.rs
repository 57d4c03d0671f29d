//! Demo binary: read a venue + weather sample from a JSON file and print the
//! derived comfort report.

use anyhow::{Context, Result};
use patiocast::{VenueComfortReport, VenueDescriptor, WeatherSample};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct ReportInput {
    venue: VenueDescriptor,
    sample: WeatherSample,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: patiocast <input.json>")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read input file {path}"))?;
    let input: ReportInput =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {path}"))?;

    let report = VenueComfortReport::build(&input.venue, &input.sample)
        .context("Failed to build comfort report")?;

    println!(
        "{} ({}, exposure {:.2})",
        input.venue.name, report.profile.label, report.profile.exposure
    );
    match report.current.apparent_temperature {
        Some(at) => println!("  Feels like {at:.1}°C - {}", report.current.comfort.advisory()),
        None => println!("  Feels like: unknown - {}", report.current.comfort.advisory()),
    }
    if let Some(wind) = &report.current.wind {
        println!(
            "  Wind: {} ({} km/h effective) - {}",
            wind.tier,
            wind.effective_wind_kmh,
            wind.tier.advisory()
        );
    }
    println!("  Wind trend: {}", report.trend);

    if let Some(window) = &report.best_window {
        println!(
            "  Best booking window: {} - {} ({})",
            window.start_label, window.end_label, window.justification
        );
    }

    for point in report.hourly.iter().take(12) {
        println!(
            "    {:>4}  {:>3.0}°C  {:>3} km/h  {:<7} {}",
            point.label, point.temperature, point.wind_speed_kmh, point.comfort, point.wind_tier
        );
    }

    Ok(())
}
