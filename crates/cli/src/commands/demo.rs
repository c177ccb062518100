//! Scripted marketplace flow with live snapshot observers.

use terracredit_core::{BuyerProfile, Crop, CropType, NewFarmer};
use terracredit_market::Marketplace;
use tracing::info;

/// Register a farmer, search, and walk the cart through a merge, an update,
/// and a removal, while observer tasks log every published snapshot.
pub async fn run(marketplace: Marketplace) -> Result<(), Box<dyn std::error::Error>> {
    let mut listings_rx = marketplace.subscribe_listings();
    let mut cart_rx = marketplace.subscribe_cart();

    // Observers live until the marketplace (the last sender) is dropped.
    let listings_observer = tokio::spawn(async move {
        while listings_rx.changed().await.is_ok() {
            let count = listings_rx.borrow_and_update().len();
            info!(count, "observed listings snapshot");
        }
    });
    let cart_observer = tokio::spawn(async move {
        while cart_rx.changed().await.is_ok() {
            let count = cart_rx.borrow_and_update().len();
            info!(count, "observed cart snapshot");
        }
    });

    info!("registering a new farmer");
    marketplace.register_farmer(NewFarmer {
        name: "Grace Njeri".to_string(),
        farm_size_hectares: 60.0,
        crops: vec![Crop::new(CropType::Barley, 35.0), Crop::new(CropType::Oats, 25.0)],
        location: "Eldoret, Kenya".to_string(),
        email: "grace.njeri@example.com".to_string(),
        phone: None,
        image_url: None,
    });

    let hits = marketplace.search_listings("Eldoret");
    info!(hits = hits.len(), "searched for the new farmer");

    let listing = hits
        .first()
        .cloned()
        .ok_or("seeded listing not found")?;

    info!("walking the cart through merge, update, remove");
    marketplace.add_to_cart(listing.id, 5.0)?;
    let item = marketplace.add_to_cart(listing.id, 3.0)?;
    info!(
        credits = item.credits_purchased,
        total = %format!("${:.2}", marketplace.cart_total()),
        "merged into one line"
    );

    marketplace.update_quantity(item.id, 10.0)?;
    info!(total = %format!("${:.2}", marketplace.cart_total()), "after update");

    marketplace.remove_from_cart(item.id);
    info!(count = marketplace.cart_count(), "after removal");

    marketplace.set_profile(BuyerProfile::new(
        "Amina Yusuf",
        "amina@greenco.example",
        "GreenCo Offsets",
        None,
    ));
    if let Some(profile) = marketplace.profile() {
        info!(buyer = %profile.name, company = %profile.company_name, "buyer profile saved");
    }

    // Dropping the marketplace closes the channels and ends the observers.
    drop(marketplace);
    listings_observer.await?;
    cart_observer.await?;

    Ok(())
}
