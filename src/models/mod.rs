//! Data models shared across the engine

pub mod venue;
pub mod weather;

pub use venue::{Coordinates, VenueDescriptor};
pub use weather::{SkyCondition, WeatherSample};
