//! Catalog inspection commands.

use terracredit_market::Marketplace;
use tracing::info;

/// Print the current listings, either as a summary or as raw JSON.
pub fn listings(
    marketplace: &Marketplace,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = marketplace.listings();

    if json {
        #[allow(clippy::print_stdout)]
        {
            println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
        }
        return Ok(());
    }

    info!(count = snapshot.len(), "current listings");
    for listing in snapshot.iter() {
        info!(
            farmer = %listing.farmer.name,
            location = %listing.farmer.location,
            crops = %listing.crop_summary(),
            credits = %format!("{:.1}", listing.available_credits),
            price = %format!("${:.2}/credit", listing.price_per_credit),
            "listing"
        );
    }
    Ok(())
}

/// Run a search and print the hits.
pub fn search(marketplace: &Marketplace, query: &str) {
    let results = marketplace.search_listings(query);
    info!(query, hits = results.len(), "search results");
    for listing in results.iter() {
        info!(
            farmer = %listing.farmer.name,
            location = %listing.farmer.location,
            crops = %listing.crop_summary(),
            "hit"
        );
    }
}
