//! `Patiocast` - Outdoor venue comfort analysis
//!
//! This library derives human-facing comfort and safety classifications from
//! a raw weather observation and static venue metadata: a feels-like
//! temperature, comfort and wind-danger tiers, a synthetic 24-hour forecast,
//! a wind trend, and a recommended booking window. Weather fetching,
//! persistence and rendering belong to the host application.

pub mod analysis;
pub mod comfort;
pub mod error;
pub mod exposure;
pub mod forecast;
pub mod models;
pub mod report;
pub mod wind;

// Re-export core types for public API
pub use analysis::{
    best_booking_window, best_provider_window, best_window, wind_trend, BookingWindow,
    ProviderHourly, WindTrend,
};
pub use comfort::{apparent_temperature, classify_comfort, ComfortTier, DEFAULT_HUMIDITY_PCT};
pub use error::EngineError;
pub use exposure::{resolve_exposure, ExposureCategory, ExposureProfile};
pub use forecast::{generate_hourly_forecast, generate_hourly_forecast_at, HourlyPoint};
pub use models::{Coordinates, SkyCondition, VenueDescriptor, WeatherSample};
pub use report::{CurrentConditions, VenueComfortReport};
pub use wind::{classify_wind, WindAssessment, WindTier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, EngineError>;
