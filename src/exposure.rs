//! Venue Exposure Resolver
//!
//! Maps a venue's free-text descriptors to one of a fixed set of exposure
//! categories. Each category carries two complementary coefficients:
//! `exposure` (fraction of ambient wind that reaches the venue) and
//! `shelter_factor = 1 - exposure`. Downstream comfort and wind
//! classification are sensitive to these exact values.

use crate::models::VenueDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Closed set of venue exposure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureCategory {
    Rooftop,
    Floating,
    Waterfront,
    OpenPark,
    BeerGarden,
    Courtyard,
    Streetside,
    Indoor,
    Cafe,
    Hotel,
}

impl ExposureCategory {
    /// Fraction of ambient wind that reaches a venue of this category
    ///
    /// These ten values are a fixed contract; tier classification downstream
    /// depends on them exactly.
    #[must_use]
    pub fn exposure(self) -> f64 {
        match self {
            ExposureCategory::Rooftop => 0.95,
            ExposureCategory::Floating => 0.90,
            ExposureCategory::Waterfront => 0.85,
            ExposureCategory::OpenPark => 0.80,
            ExposureCategory::BeerGarden => 0.65,
            ExposureCategory::Streetside => 0.55,
            ExposureCategory::Courtyard => 0.45,
            ExposureCategory::Cafe => 0.35,
            ExposureCategory::Hotel => 0.25,
            ExposureCategory::Indoor => 0.05,
        }
    }

    /// Display label for this category
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExposureCategory::Rooftop => "Rooftop",
            ExposureCategory::Floating => "Floating",
            ExposureCategory::Waterfront => "Waterfront",
            ExposureCategory::OpenPark => "Open park",
            ExposureCategory::BeerGarden => "Beer garden",
            ExposureCategory::Streetside => "Streetside",
            ExposureCategory::Courtyard => "Courtyard",
            ExposureCategory::Cafe => "Cafe",
            ExposureCategory::Hotel => "Hotel",
            ExposureCategory::Indoor => "Indoor",
        }
    }

    /// Build the full profile for this category
    ///
    /// `shelter_factor` is always derived as `1 - exposure` here so the two
    /// coefficients cannot drift apart.
    #[must_use]
    pub fn profile(self) -> ExposureProfile {
        let exposure = self.exposure();
        ExposureProfile {
            category: self,
            exposure,
            shelter_factor: 1.0 - exposure,
            label: self.label().to_string(),
        }
    }
}

impl fmt::Display for ExposureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolved exposure profile for a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureProfile {
    /// Resolved category
    pub category: ExposureCategory,
    /// Fraction of ambient wind reaching the venue (0-1)
    pub exposure: f64,
    /// Fraction of ambient wind blocked by the venue (1 - exposure)
    pub shelter_factor: f64,
    /// Display label
    pub label: String,
}

/// One keyword rule: any keyword hit resolves to the category.
///
/// Rules are evaluated strictly in order; categories are not mutually
/// exclusive in raw venue text (a "rooftop beer garden" must resolve to
/// Rooftop), so the order of this table is load-bearing.
struct ExposureRule {
    keywords: &'static [&'static str],
    category: ExposureCategory,
}

const EXPOSURE_RULES: &[ExposureRule] = &[
    ExposureRule {
        keywords: &["rooftop", "roof terrace", "sky bar", "skybar"],
        category: ExposureCategory::Rooftop,
    },
    ExposureRule {
        keywords: &["floating", "boat", "barge", "pontoon"],
        category: ExposureCategory::Floating,
    },
    ExposureRule {
        keywords: &["waterfront", "riverside", "harbour", "harbor", "pier", "dock", "beach"],
        category: ExposureCategory::Waterfront,
    },
    ExposureRule {
        keywords: &["stadium", "pop-up", "popup", "food truck", "park"],
        category: ExposureCategory::OpenPark,
    },
    ExposureRule {
        keywords: &["beer garden", "biergarten", "garden"],
        category: ExposureCategory::BeerGarden,
    },
    ExposureRule {
        keywords: &["courtyard", "maze", "hidden"],
        category: ExposureCategory::Courtyard,
    },
    ExposureRule {
        keywords: &["street", "sidewalk", "pavement", "terrace"],
        category: ExposureCategory::Streetside,
    },
    ExposureRule {
        keywords: &["cafe", "café", "coffee", "espresso"],
        category: ExposureCategory::Cafe,
    },
    ExposureRule {
        keywords: &["hotel"],
        category: ExposureCategory::Hotel,
    },
    // Sheltered vibes without a structural keyword
    ExposureRule {
        keywords: &["lounge", "cocktail", "cozy", "cosy"],
        category: ExposureCategory::Courtyard,
    },
    ExposureRule {
        keywords: &["pub", "tavern", "warehouse"],
        category: ExposureCategory::BeerGarden,
    },
];

/// Resolve a venue's exposure profile from its textual descriptors
///
/// Total function: unresolvable text falls back to `BeerGarden`. Pure and
/// deterministic, so the result is safe to memoize per venue (and equally
/// safe to recompute).
#[must_use]
pub fn resolve_exposure(venue: &VenueDescriptor) -> ExposureProfile {
    let text = venue.descriptor_text();

    for rule in EXPOSURE_RULES {
        if rule.keywords.iter().any(|kw| text.contains(kw)) {
            debug!(
                venue = %venue.id,
                category = %rule.category,
                "resolved venue exposure"
            );
            return rule.category.profile();
        }
    }

    debug!(venue = %venue.id, "no exposure keyword matched, defaulting to beer garden");
    ExposureCategory::BeerGarden.profile()
}
