//! Wind Classifier
//!
//! Buckets the wind actually reaching a venue into one of four ordered
//! danger tiers. The classifier scales ambient wind by the venue's
//! `exposure` ("how much of the ambient wind is this open venue subject
//! to"), while the apparent-temperature formula scales by
//! `1 - shelter_factor` ("how much wind reaches the body"). With
//! `exposure = 1 - shelter_factor` the two quantities are numerically
//! identical today; the asymmetry in wording is intentional and the
//! coupling is tested, not assumed.

use crate::exposure::ExposureProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered wind danger tiers for effective wind at a venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindTier {
    Calm,
    Breezy,
    Windy,
    Severe,
}

impl WindTier {
    /// Fixed advisory message for this tier
    #[must_use]
    pub fn advisory(self) -> &'static str {
        match self {
            WindTier::Calm => "Barely a breeze",
            WindTier::Breezy => "Noticeable breeze, napkins may wander",
            WindTier::Windy => "Strong wind, secure loose items",
            WindTier::Severe => "Dangerous gusts, outdoor seating not advised",
        }
    }
}

impl fmt::Display for WindTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindTier::Calm => "Calm",
            WindTier::Breezy => "Breezy",
            WindTier::Windy => "Windy",
            WindTier::Severe => "Severe",
        };
        write!(f, "{name}")
    }
}

/// Wind classification result for one venue and one observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindAssessment {
    /// Danger tier for the effective wind
    pub tier: WindTier,
    /// Ambient wind scaled by venue exposure, m/s
    pub effective_wind_ms: f64,
    /// Effective wind converted for display, km/h (rounded)
    pub effective_wind_kmh: i64,
}

/// Classify the wind danger at a venue
///
/// `effective = wind * profile.exposure`; boundary values land in the upper
/// tier (exactly 5.0 m/s is `Breezy`, not `Calm`).
#[must_use]
pub fn classify_wind(wind_ms: f64, profile: &ExposureProfile) -> WindAssessment {
    let effective = wind_ms * profile.exposure;

    let tier = match effective {
        w if w < 5.0 => WindTier::Calm,
        w if w < 9.0 => WindTier::Breezy,
        w if w < 14.0 => WindTier::Windy,
        _ => WindTier::Severe,
    };

    WindAssessment {
        tier,
        effective_wind_ms: effective,
        effective_wind_kmh: (effective * 3.6).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::ExposureCategory;
    use rstest::rstest;

    #[rstest]
    #[case(4.99, WindTier::Calm)]
    #[case(5.0, WindTier::Breezy)]
    #[case(8.99, WindTier::Breezy)]
    #[case(9.0, WindTier::Windy)]
    #[case(13.99, WindTier::Windy)]
    #[case(14.0, WindTier::Severe)]
    #[case(0.0, WindTier::Calm)]
    fn test_wind_boundaries(#[case] effective_ms: f64, #[case] expected: WindTier) {
        // Synthetic fully-exposed profile so the ambient wind is the
        // effective wind exactly, with no floating-point scaling in between
        let profile = ExposureProfile {
            category: ExposureCategory::OpenPark,
            exposure: 1.0,
            shelter_factor: 0.0,
            label: "Open park".to_string(),
        };
        let assessment = classify_wind(effective_ms, &profile);
        assert_eq!(assessment.tier, expected);
    }

    #[test]
    fn test_exposure_scales_ambient_wind() {
        let rooftop = ExposureCategory::Rooftop.profile();
        let assessment = classify_wind(10.0, &rooftop);
        assert!((assessment.effective_wind_ms - 9.5).abs() < 1e-9);
        assert_eq!(assessment.tier, WindTier::Windy);
        assert_eq!(assessment.effective_wind_kmh, 34);

        // Same ambient wind inside a courtyard is merely calm
        let courtyard = ExposureCategory::Courtyard.profile();
        assert_eq!(classify_wind(10.0, &courtyard).tier, WindTier::Calm);
    }

    #[test]
    fn test_exposure_and_shelter_attenuation_agree() {
        // classify_wind scales by exposure, apparent_temperature by
        // 1 - shelter_factor; with complementary profile constants the two
        // effective winds must coincide for every category
        for category in [
            ExposureCategory::Rooftop,
            ExposureCategory::BeerGarden,
            ExposureCategory::Indoor,
        ] {
            let profile = category.profile();
            let via_exposure = 10.0 * profile.exposure;
            let via_shelter = 10.0 * (1.0 - profile.shelter_factor);
            assert!((via_exposure - via_shelter).abs() < 1e-9);
        }
    }
}
