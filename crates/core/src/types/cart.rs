//! Cart line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CartItemId, ListingId};
use super::listing::CarbonCreditListing;

/// A pending purchase of credits from one listing.
///
/// References the listing by id rather than by value, so prices are always
/// resolved against the catalog's current listing snapshot. The cart holds
/// at most one item per listing id; repeated adds merge into the existing
/// item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub listing_id: ListingId,
    /// Credits in this line. Always positive.
    pub credits_purchased: f64,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Create a fresh line item added now.
    #[must_use]
    pub fn new(listing_id: ListingId, credits_purchased: f64) -> Self {
        Self {
            id: CartItemId::new(),
            listing_id,
            credits_purchased,
            added_at: Utc::now(),
        }
    }

    /// Line total against the resolved listing's current price.
    #[must_use]
    pub fn line_total(&self, listing: &CarbonCreditListing) -> f64 {
        self.credits_purchased * listing.price_per_credit
    }
}
