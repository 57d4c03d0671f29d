//! Venue descriptor model supplied by the host application's venue catalog

use serde::{Deserialize, Serialize};

/// Geographic coordinates (latitude/longitude in decimal degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Static metadata for a single outdoor venue
///
/// The engine never mutates a descriptor; it only reads the textual
/// descriptors (`name`, `vibe`, `tags`) to resolve an exposure profile.
/// Coordinates are carried for identity and display, not used in any
/// calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueDescriptor {
    /// Opaque venue identifier from the catalog
    pub id: String,
    /// Display name (e.g., "Skyline Terrace")
    pub name: String,
    /// Free-text vibe description (e.g., "rooftop beer garden with views")
    pub vibe: String,
    /// Ordered descriptive tags (e.g., ["Rooftop", "Cocktails"])
    pub tags: Vec<String>,
    /// Venue position, carried for identity only
    pub coordinates: Coordinates,
}

impl VenueDescriptor {
    /// Create a descriptor with the given textual fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vibe: impl Into<String>,
        tags: Vec<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vibe: vibe.into(),
            tags,
            coordinates,
        }
    }

    /// Lower-cased concatenation of name, vibe and tags, the text the
    /// exposure resolver matches its keyword rules against
    #[must_use]
    pub fn descriptor_text(&self) -> String {
        let mut text = format!("{} {}", self.name, self.vibe);
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }
}
