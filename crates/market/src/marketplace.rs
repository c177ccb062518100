//! Marketplace facade composing the stores.

use std::sync::Arc;

use terracredit_core::{
    BuyerProfile, CarbonCreditListing, CartItem, CartItemId, Farmer, ListingId, NewFarmer,
};
use tokio::sync::watch;
use tracing::debug;

use crate::cart::{CartSnapshot, CartStore};
use crate::catalog::{CatalogStore, FarmersSnapshot, ListingsSnapshot};
use crate::error::Result;
use crate::estimator::{CreditEstimator, RandomSource, ThreadRngSource};
use crate::profile::ProfileStore;
use crate::search::filter_listings;
use crate::seed::sample_farmers;

/// The current search query and its filtered results, published together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub results: ListingsSnapshot,
}

/// The single access point for marketplace state.
///
/// Composes the catalog, cart, and profile stores plus the search-state
/// channel. Cheaply cloneable via an inner `Arc`; construct one at your
/// composition root and hand clones to callers instead of reaching for a
/// global.
///
/// Every mutation is synchronous and atomic with respect to its publish
/// step: once a call returns, subscribers' `borrow()` sees the new
/// snapshot.
#[derive(Clone)]
pub struct Marketplace {
    inner: Arc<Inner>,
}

struct Inner {
    catalog: CatalogStore,
    cart: CartStore,
    profile: ProfileStore,
    search_tx: watch::Sender<SearchState>,
}

impl Marketplace {
    /// Create an empty marketplace drawing randomness from `rng`.
    #[must_use]
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        let (search_tx, _) = watch::channel(SearchState::default());
        Self {
            inner: Arc::new(Inner {
                catalog: CatalogStore::new(CreditEstimator::new(rng)),
                cart: CartStore::new(),
                profile: ProfileStore::new(),
                search_tx,
            }),
        }
    }

    /// Create a marketplace pre-seeded with the sample farmers.
    #[must_use]
    pub fn with_sample_data(rng: Arc<dyn RandomSource>) -> Self {
        let marketplace = Self::new(rng);
        for details in sample_farmers() {
            marketplace.register_farmer(details);
        }
        marketplace
    }

    // ---- Catalog ----

    /// Register a farmer, creating their paired listing.
    ///
    /// Re-runs the active search query afterwards so the filtered-results
    /// stream stays consistent with the catalog stream.
    pub fn register_farmer(&self, details: NewFarmer) -> Farmer {
        let farmer = self.inner.catalog.register_farmer(details);
        self.refresh_search();
        farmer
    }

    /// Current listings snapshot.
    #[must_use]
    pub fn listings(&self) -> ListingsSnapshot {
        self.inner.catalog.listings()
    }

    /// Current farmers snapshot.
    #[must_use]
    pub fn farmers(&self) -> FarmersSnapshot {
        self.inner.catalog.farmers()
    }

    /// Resolve a listing by id.
    #[must_use]
    pub fn listing(&self, id: ListingId) -> Option<CarbonCreditListing> {
        self.inner.catalog.listing(id)
    }

    // ---- Search ----

    /// Filter the current listings by `query`, publish the query/results
    /// pair, and return the results.
    #[must_use]
    pub fn search_listings(&self, query: &str) -> ListingsSnapshot {
        let listings = self.inner.catalog.listings();
        let results: ListingsSnapshot = filter_listings(query, &listings).into();
        debug!(query, hits = results.len(), "searched listings");
        self.inner.search_tx.send_replace(SearchState {
            query: query.to_string(),
            results: results.clone(),
        });
        results
    }

    fn refresh_search(&self) {
        let query = self.inner.search_tx.borrow().query.clone();
        let listings = self.inner.catalog.listings();
        let results: ListingsSnapshot = filter_listings(&query, &listings).into();
        self.inner.search_tx.send_replace(SearchState { query, results });
    }

    // ---- Cart ----

    /// Add credits for a listing to the cart, merging with any existing
    /// line for that listing.
    ///
    /// # Errors
    ///
    /// [`crate::MarketError::NonPositiveCredits`] if `credits <= 0`.
    pub fn add_to_cart(&self, listing_id: ListingId, credits: f64) -> Result<CartItem> {
        self.inner.cart.add(listing_id, credits)
    }

    /// Remove a cart line. No-op on unknown ids.
    pub fn remove_from_cart(&self, cart_item_id: CartItemId) {
        self.inner.cart.remove(cart_item_id);
    }

    /// Replace a cart line's quantity. No-op on unknown ids.
    ///
    /// # Errors
    ///
    /// [`crate::MarketError::NonPositiveCredits`] if `new_quantity <= 0`.
    pub fn update_quantity(&self, cart_item_id: CartItemId, new_quantity: f64) -> Result<()> {
        self.inner.cart.update_quantity(cart_item_id, new_quantity)
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.inner.cart.clear();
    }

    /// Current cart snapshot.
    #[must_use]
    pub fn cart_items(&self) -> CartSnapshot {
        self.inner.cart.items()
    }

    /// Cart total, with each line priced against the current listings.
    #[must_use]
    pub fn cart_total(&self) -> f64 {
        self.inner.cart.total(&self.inner.catalog.listings())
    }

    /// Number of distinct cart lines.
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.inner.cart.count()
    }

    // ---- Profile ----

    /// Replace the buyer profile wholesale.
    pub fn set_profile(&self, profile: BuyerProfile) {
        self.inner.profile.set(profile);
    }

    /// The buyer profile, if one has been saved.
    #[must_use]
    pub fn profile(&self) -> Option<BuyerProfile> {
        self.inner.profile.get()
    }

    // ---- Subscriptions ----

    /// Subscribe to listing snapshots.
    #[must_use]
    pub fn subscribe_listings(&self) -> watch::Receiver<ListingsSnapshot> {
        self.inner.catalog.subscribe_listings()
    }

    /// Subscribe to farmer snapshots.
    #[must_use]
    pub fn subscribe_farmers(&self) -> watch::Receiver<FarmersSnapshot> {
        self.inner.catalog.subscribe_farmers()
    }

    /// Subscribe to cart snapshots.
    #[must_use]
    pub fn subscribe_cart(&self) -> watch::Receiver<CartSnapshot> {
        self.inner.cart.subscribe()
    }

    /// Subscribe to buyer profile changes.
    #[must_use]
    pub fn subscribe_profile(&self) -> watch::Receiver<Option<BuyerProfile>> {
        self.inner.profile.subscribe()
    }

    /// Subscribe to the query/filtered-results pair.
    #[must_use]
    pub fn subscribe_search(&self) -> watch::Receiver<SearchState> {
        self.inner.search_tx.subscribe()
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngSource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::FixedSource;
    use terracredit_core::{Crop, CropType};

    fn fixed() -> Marketplace {
        Marketplace::new(Arc::new(FixedSource::new(0.0)))
    }

    fn register(marketplace: &Marketplace, name: &str, location: &str) -> Farmer {
        marketplace.register_farmer(NewFarmer {
            name: name.to_string(),
            farm_size_hectares: 40.0,
            crops: vec![Crop::new(CropType::Corn, 25.0)],
            location: location.to_string(),
            email: "farmer@example.com".to_string(),
            phone: None,
            image_url: None,
        })
    }

    #[test]
    fn test_clones_share_state() {
        let marketplace = fixed();
        let clone = marketplace.clone();
        register(&marketplace, "John Kamau", "Nakuru, Kenya");
        assert_eq!(clone.listings().len(), 1);
    }

    #[test]
    fn test_cart_total_resolves_listing_prices() {
        let marketplace = fixed();
        register(&marketplace, "John Kamau", "Nakuru, Kenya");
        let listing = marketplace.listings()[0].clone();

        marketplace.add_to_cart(listing.id, 4.0).unwrap();
        // FixedSource(0.0) pins the price at 15.0.
        assert_eq!(marketplace.cart_total(), 4.0 * 15.0);
        assert_eq!(marketplace.cart_count(), 1);
    }

    #[test]
    fn test_search_publishes_query_and_results() {
        let marketplace = fixed();
        register(&marketplace, "John Kamau", "Nakuru, Kenya");
        register(&marketplace, "Sarah Wanjiru", "Kiambu, Kenya");

        let results = marketplace.search_listings("kamau");
        assert_eq!(results.len(), 1);

        let state = marketplace.subscribe_search().borrow().clone();
        assert_eq!(state.query, "kamau");
        assert_eq!(state.results, results);
    }

    #[test]
    fn test_registration_refreshes_active_search() {
        let marketplace = fixed();
        register(&marketplace, "John Kamau", "Nakuru, Kenya");
        let hits = marketplace.search_listings("Kenya");
        assert_eq!(hits.len(), 1);

        register(&marketplace, "Sarah Wanjiru", "Kiambu, Kenya");
        let state = marketplace.subscribe_search().borrow().clone();
        assert_eq!(state.query, "Kenya");
        assert_eq!(state.results.len(), 2);
    }

    #[test]
    fn test_sample_data_seeds_three_farmers() {
        let marketplace = Marketplace::with_sample_data(Arc::new(FixedSource::new(0.0)));
        assert_eq!(marketplace.farmers().len(), 3);
        assert_eq!(marketplace.listings().len(), 3);
        assert_eq!(marketplace.search_listings("Kenya").len(), 3);
    }

    #[test]
    fn test_profile_round_trip() {
        let marketplace = fixed();
        assert!(marketplace.profile().is_none());
        marketplace.set_profile(BuyerProfile::new(
            "Amina Yusuf",
            "amina@example.com",
            "GreenCo",
            None,
        ));
        assert_eq!(marketplace.profile().unwrap().name, "Amina Yusuf");
    }
}
