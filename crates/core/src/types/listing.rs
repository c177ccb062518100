//! Carbon-credit listings.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::farmer::Farmer;
use super::id::ListingId;

/// Default listing description, used when the farmer supplies none.
pub const DEFAULT_LISTING_DESCRIPTION: &str =
    "Certified carbon credits from sustainable farming practices";

/// A farmer's carbon credits offered for sale.
///
/// Paired 1:1 with a [`Farmer`] at registration time and immutable within
/// the core. Invariant: `available_credits <= total_credits`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonCreditListing {
    pub id: ListingId,
    /// The owning farmer. Shared with the catalog's farmer sequence.
    pub farmer: Arc<Farmer>,
    /// Credits estimated across all crops at creation time.
    pub total_credits: f64,
    /// Price per credit in USD.
    pub price_per_credit: f64,
    /// Credits still offered. Never exceeds `total_credits`. Cart
    /// operations do not decrement this; see `CartStore::add` in the
    /// market crate.
    pub available_credits: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl CarbonCreditListing {
    /// Create a listing with all estimated credits available.
    #[must_use]
    pub fn new(farmer: Arc<Farmer>, total_credits: f64, price_per_credit: f64) -> Self {
        Self {
            id: ListingId::new(),
            farmer,
            total_credits,
            price_per_credit,
            available_credits: total_credits,
            description: DEFAULT_LISTING_DESCRIPTION.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Price of the full available allotment.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.available_credits * self.price_per_credit
    }

    /// Whether a purchase of `credits` fits within the available allotment.
    ///
    /// Callers are expected to check this before adding to a cart; the cart
    /// store itself does not enforce it.
    #[must_use]
    pub fn can_fulfill(&self, credits: f64) -> bool {
        credits > 0.0 && credits <= self.available_credits
    }

    /// Search-facing crop summary, e.g. `"Corn (30ha), Wheat (20ha)"`.
    #[must_use]
    pub fn crop_summary(&self) -> String {
        self.farmer.crop_summary()
    }
}
