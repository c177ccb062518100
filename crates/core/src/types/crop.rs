//! Crop types and per-crop carbon coefficients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of crop types the marketplace understands.
///
/// Each crop type carries a carbon-credit coefficient in credits per
/// hectare, used by the credit estimator at listing creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropType {
    Corn,
    Wheat,
    Soybeans,
    Rice,
    Coffee,
    Cocoa,
    Sugarcane,
    Cotton,
    Vegetables,
    Fruits,
    Barley,
    Oats,
}

impl CropType {
    /// All crop types, in display order.
    pub const ALL: [Self; 12] = [
        Self::Corn,
        Self::Wheat,
        Self::Soybeans,
        Self::Rice,
        Self::Coffee,
        Self::Cocoa,
        Self::Sugarcane,
        Self::Cotton,
        Self::Vegetables,
        Self::Fruits,
        Self::Barley,
        Self::Oats,
    ];

    /// Human-readable name, as shown in listings and crop summaries.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Corn => "Corn",
            Self::Wheat => "Wheat",
            Self::Soybeans => "Soybeans",
            Self::Rice => "Rice",
            Self::Coffee => "Coffee",
            Self::Cocoa => "Cocoa",
            Self::Sugarcane => "Sugarcane",
            Self::Cotton => "Cotton",
            Self::Vegetables => "Vegetables",
            Self::Fruits => "Fruits",
            Self::Barley => "Barley",
            Self::Oats => "Oats",
        }
    }

    /// Estimated carbon credits generated per hectare per season.
    #[must_use]
    pub const fn credits_per_hectare(self) -> f64 {
        match self {
            Self::Corn => 2.5,
            Self::Wheat => 2.8,
            Self::Soybeans => 3.2,
            Self::Rice => 2.0,
            Self::Coffee => 4.5,
            Self::Cocoa => 5.0,
            Self::Sugarcane => 2.3,
            Self::Cotton => 2.1,
            Self::Vegetables => 3.0,
            Self::Fruits => 3.5,
            Self::Barley => 2.6,
            Self::Oats => 2.7,
        }
    }
}

impl core::fmt::Display for CropType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A planted crop on a farmer's land.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    /// What is planted.
    pub crop_type: CropType,
    /// Planted area in hectares. Expected to be positive; non-positive
    /// areas contribute zero credits.
    pub area_hectares: f64,
    /// When the crop was planted.
    pub planted_at: DateTime<Utc>,
}

impl Crop {
    /// Create a crop planted now.
    #[must_use]
    pub fn new(crop_type: CropType, area_hectares: f64) -> Self {
        Self {
            crop_type,
            area_hectares,
            planted_at: Utc::now(),
        }
    }

    /// Summary fragment used in listing search, e.g. `"Corn (30ha)"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} ({}ha)", self.crop_type, self.area_hectares)
    }
}
