//! Substring search over listing snapshots.

use terracredit_core::CarbonCreditListing;

/// Filter listings by a free-text query.
///
/// A blank query (after trimming) returns the input unchanged. Otherwise a
/// listing matches when its farmer's name, farmer's location, or crop
/// summary (`"Corn (30ha), Wheat (20ha)"`) contains the query as a
/// case-insensitive substring. Pure filter: no ranking, input order
/// preserved.
#[must_use]
pub fn filter_listings(query: &str, listings: &[CarbonCreditListing]) -> Vec<CarbonCreditListing> {
    let needle = query.trim();
    if needle.is_empty() {
        return listings.to_vec();
    }
    let needle = needle.to_lowercase();
    listings
        .iter()
        .filter(|listing| {
            listing.farmer.name.to_lowercase().contains(&needle)
                || listing.farmer.location.to_lowercase().contains(&needle)
                || listing.crop_summary().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
