//! Farmers and their registration details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::crop::Crop;
use super::id::FarmerId;

/// A registered farmer.
///
/// Immutable after registration; owned by the catalog store. Registration
/// also creates the farmer's single paired [`CarbonCreditListing`].
///
/// [`CarbonCreditListing`]: super::listing::CarbonCreditListing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub id: FarmerId,
    pub name: String,
    /// Total farm size in hectares.
    pub farm_size_hectares: f64,
    /// Crops in planting order.
    pub crops: Vec<Crop>,
    pub location: String,
    pub email: String,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// Registration details for a new farmer.
///
/// The catalog store assigns the id and registration timestamp. No field
/// validation happens here or in the store; rejecting blank names, empty
/// crop lists, or non-positive sizes is the calling layer's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFarmer {
    pub name: String,
    pub farm_size_hectares: f64,
    pub crops: Vec<Crop>,
    pub location: String,
    pub email: String,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}

impl Farmer {
    /// Materialize a farmer from registration details, assigning a fresh id
    /// and the current timestamp.
    #[must_use]
    pub fn new(details: NewFarmer) -> Self {
        Self {
            id: FarmerId::new(),
            name: details.name,
            farm_size_hectares: details.farm_size_hectares,
            crops: details.crops,
            location: details.location,
            email: details.email,
            phone: details.phone,
            image_url: details.image_url,
            registered_at: Utc::now(),
        }
    }

    /// Search-facing crop summary, e.g. `"Corn (30ha), Wheat (20ha)"`.
    #[must_use]
    pub fn crop_summary(&self) -> String {
        self.crops
            .iter()
            .map(Crop::summary)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
