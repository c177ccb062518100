//! Catalog store: farmers and their paired listings.

use std::sync::{Arc, Mutex, PoisonError};

use terracredit_core::{CarbonCreditListing, Farmer, ListingId, NewFarmer};
use tokio::sync::watch;
use tracing::info;

use crate::estimator::CreditEstimator;

/// Immutable snapshot of the registered farmers, in registration order.
pub type FarmersSnapshot = Arc<[Farmer]>;

/// Immutable snapshot of the listings, in creation order.
pub type ListingsSnapshot = Arc<[CarbonCreditListing]>;

/// Owns the farmer and listing sequences.
///
/// Both sequences are append-only: registration creates one farmer and one
/// paired listing atomically, and nothing in the core deletes either. Each
/// mutation publishes fresh snapshots on both watch channels.
pub struct CatalogStore {
    estimator: CreditEstimator,
    state: Mutex<CatalogState>,
    farmers_tx: watch::Sender<FarmersSnapshot>,
    listings_tx: watch::Sender<ListingsSnapshot>,
}

#[derive(Default)]
struct CatalogState {
    farmers: Vec<Farmer>,
    listings: Vec<CarbonCreditListing>,
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new(estimator: CreditEstimator) -> Self {
        let (farmers_tx, _) = watch::channel(FarmersSnapshot::from([]));
        let (listings_tx, _) = watch::channel(ListingsSnapshot::from([]));
        Self {
            estimator,
            state: Mutex::new(CatalogState::default()),
            farmers_tx,
            listings_tx,
        }
    }

    /// Register a farmer and create their paired listing.
    ///
    /// Sums the per-crop credit estimates into the listing's total, draws a
    /// price per credit, and publishes both snapshots before returning. By
    /// contract no input validation happens here; the calling layer rejects
    /// blank names, non-positive sizes, and empty crop lists.
    pub fn register_farmer(&self, details: NewFarmer) -> Farmer {
        let farmer = Farmer::new(details);
        let total_credits = self.estimator.total_for(&farmer.crops);
        let listing = CarbonCreditListing::new(
            Arc::new(farmer.clone()),
            total_credits,
            self.estimator.draw_price_per_credit(),
        );

        info!(
            farmer_id = %farmer.id,
            listing_id = %listing.id,
            total_credits,
            price_per_credit = listing.price_per_credit,
            "registered farmer"
        );

        // Publishing under the lock keeps snapshot order consistent with
        // mutation order. watch::Sender::send_replace only stores the value
        // and wakes receivers, so no observer code runs here.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.farmers.push(farmer.clone());
        state.listings.push(listing);
        self.farmers_tx.send_replace(state.farmers.as_slice().into());
        self.listings_tx.send_replace(state.listings.as_slice().into());

        farmer
    }

    /// Current listings snapshot.
    #[must_use]
    pub fn listings(&self) -> ListingsSnapshot {
        self.listings_tx.borrow().clone()
    }

    /// Current farmers snapshot.
    #[must_use]
    pub fn farmers(&self) -> FarmersSnapshot {
        self.farmers_tx.borrow().clone()
    }

    /// Resolve a listing by id against the current snapshot.
    #[must_use]
    pub fn listing(&self, id: ListingId) -> Option<CarbonCreditListing> {
        self.listings().iter().find(|l| l.id == id).cloned()
    }

    /// Subscribe to listing snapshots. Receivers see the latest value only.
    #[must_use]
    pub fn subscribe_listings(&self) -> watch::Receiver<ListingsSnapshot> {
        self.listings_tx.subscribe()
    }

    /// Subscribe to farmer snapshots.
    #[must_use]
    pub fn subscribe_farmers(&self) -> watch::Receiver<FarmersSnapshot> {
        self.farmers_tx.subscribe()
    }
}
