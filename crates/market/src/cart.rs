//! Cart store: line items with merge-on-duplicate semantics.

use std::sync::{Arc, Mutex, PoisonError};

use terracredit_core::{CarbonCreditListing, CartItem, CartItemId, ListingId};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::{MarketError, Result};

/// Immutable snapshot of the cart, in first-added order.
pub type CartSnapshot = Arc<[CartItem]>;

/// Owns the cart line items.
///
/// The governing invariant: at most one item per distinct listing id.
/// Adding credits for a listing already in the cart merges into the
/// existing item rather than appending a duplicate.
///
/// Removal and quantity updates on unknown ids are silent no-ops by design,
/// not errors; the UI may race against its own snapshot and a stale click
/// should not fail.
pub struct CartStore {
    state: Mutex<Vec<CartItem>>,
    tx: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(CartSnapshot::from([]));
        Self {
            state: Mutex::new(Vec::new()),
            tx,
        }
    }

    /// Add credits for a listing, merging into any existing line.
    ///
    /// Returns the resulting line item. Availability is not checked here:
    /// callers are expected to verify `listing.can_fulfill(credits)` first.
    /// Note the catalog never decrements `available_credits` on cart
    /// activity, so repeated adds can exceed a listing's advertised
    /// availability; this mirrors the upstream behavior and is flagged
    /// rather than fixed pending a product decision.
    ///
    /// # Errors
    ///
    /// [`MarketError::NonPositiveCredits`] if `credits <= 0`.
    pub fn add(&self, listing_id: ListingId, credits: f64) -> Result<CartItem> {
        if credits <= 0.0 {
            return Err(MarketError::NonPositiveCredits { credits });
        }

        let mut items = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let item = if let Some(existing) = items.iter_mut().find(|i| i.listing_id == listing_id) {
            existing.credits_purchased += credits;
            info!(
                cart_item_id = %existing.id,
                %listing_id,
                credits = existing.credits_purchased,
                "merged credits into existing cart item"
            );
            existing.clone()
        } else {
            let item = CartItem::new(listing_id, credits);
            info!(cart_item_id = %item.id, %listing_id, credits, "added cart item");
            items.push(item.clone());
            item
        };
        self.tx.send_replace(items.as_slice().into());
        Ok(item)
    }

    /// Remove a line item. No-op if the id is not in the cart.
    pub fn remove(&self, cart_item_id: CartItemId) {
        let mut items = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let before = items.len();
        items.retain(|i| i.id != cart_item_id);
        if items.len() == before {
            debug!(%cart_item_id, "remove ignored, item not in cart");
            return;
        }
        info!(%cart_item_id, "removed cart item");
        self.tx.send_replace(items.as_slice().into());
    }

    /// Replace a line item's credit quantity. No-op if the id is not in the
    /// cart.
    ///
    /// This is the raw setter: clamping to `[1, available_credits]` is the
    /// calling layer's concern, with `listing.can_fulfill` as the checkable
    /// precondition.
    ///
    /// # Errors
    ///
    /// [`MarketError::NonPositiveCredits`] if `new_quantity <= 0`.
    pub fn update_quantity(&self, cart_item_id: CartItemId, new_quantity: f64) -> Result<()> {
        if new_quantity <= 0.0 {
            return Err(MarketError::NonPositiveCredits {
                credits: new_quantity,
            });
        }

        let mut items = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(item) = items.iter_mut().find(|i| i.id == cart_item_id) else {
            debug!(%cart_item_id, "update ignored, item not in cart");
            return Ok(());
        };
        item.credits_purchased = new_quantity;
        info!(%cart_item_id, credits = new_quantity, "updated cart item quantity");
        self.tx.send_replace(items.as_slice().into());
        Ok(())
    }

    /// Empty the cart unconditionally.
    pub fn clear(&self) {
        let mut items = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        items.clear();
        info!("cleared cart");
        self.tx.send_replace(CartSnapshot::from([]));
    }

    /// Sum of each line's `credits * price_per_credit`, resolved against
    /// the given listings snapshot. Lines whose listing cannot be resolved
    /// contribute zero.
    #[must_use]
    pub fn total(&self, listings: &[CarbonCreditListing]) -> f64 {
        self.items()
            .iter()
            .map(|item| {
                listings
                    .iter()
                    .find(|l| l.id == item.listing_id)
                    .map_or_else(
                        || {
                            warn!(
                                cart_item_id = %item.id,
                                listing_id = %item.listing_id,
                                "cart item references unknown listing, counting zero"
                            );
                            0.0
                        },
                        |listing| item.line_total(listing),
                    )
            })
            .sum()
    }

    /// Number of distinct line items (not the credit sum).
    #[must_use]
    pub fn count(&self) -> usize {
        self.items().len()
    }

    /// Current cart snapshot.
    #[must_use]
    pub fn items(&self) -> CartSnapshot {
        self.tx.borrow().clone()
    }

    /// Subscribe to cart snapshots. Receivers see the latest value only.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terracredit_core::{Farmer, NewFarmer};

    fn listing(price: f64) -> CarbonCreditListing {
        let farmer = Arc::new(Farmer::new(NewFarmer {
            name: "Test Farmer".to_string(),
            farm_size_hectares: 10.0,
            crops: Vec::new(),
            location: "Nairobi, Kenya".to_string(),
            email: "farmer@example.com".to_string(),
            phone: None,
            image_url: None,
        }));
        CarbonCreditListing::new(farmer, 100.0, price)
    }

    #[test]
    fn test_add_merges_same_listing() {
        let cart = CartStore::new();
        let listing_id = ListingId::new();

        let first = cart.add(listing_id, 5.0).unwrap();
        let merged = cart.add(listing_id, 3.0).unwrap();

        assert_eq!(cart.count(), 1);
        assert_eq!(merged.id, first.id);
        assert_eq!(merged.credits_purchased, 8.0);
        assert_eq!(cart.items()[0].credits_purchased, 8.0);
    }

    #[test]
    fn test_add_distinct_listings_append() {
        let cart = CartStore::new();
        cart.add(ListingId::new(), 5.0).unwrap();
        cart.add(ListingId::new(), 3.0).unwrap();
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_add_rejects_non_positive_credits() {
        let cart = CartStore::new();
        let err = cart.add(ListingId::new(), 0.0).unwrap_err();
        assert_eq!(err, MarketError::NonPositiveCredits { credits: 0.0 });
        assert!(cart.add(ListingId::new(), -2.0).is_err());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_remove_unknown_id_leaves_cart_unchanged() {
        let cart = CartStore::new();
        cart.add(ListingId::new(), 5.0).unwrap();
        let before = cart.items();

        cart.remove(CartItemId::new());
        assert_eq!(cart.items(), before);
    }

    #[test]
    fn test_remove_does_not_republish_on_miss() {
        let cart = CartStore::new();
        cart.add(ListingId::new(), 5.0).unwrap();
        let mut rx = cart.subscribe();
        rx.borrow_and_update();

        cart.remove(CartItemId::new());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_update_quantity_replaces_value() {
        let cart = CartStore::new();
        let item = cart.add(ListingId::new(), 5.0).unwrap();

        cart.update_quantity(item.id, 10.0).unwrap();
        assert_eq!(cart.items()[0].credits_purchased, 10.0);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let cart = CartStore::new();
        cart.add(ListingId::new(), 5.0).unwrap();
        let before = cart.items();

        cart.update_quantity(CartItemId::new(), 7.0).unwrap();
        assert_eq!(cart.items(), before);
    }

    #[test]
    fn test_update_quantity_rejects_non_positive() {
        let cart = CartStore::new();
        let item = cart.add(ListingId::new(), 5.0).unwrap();
        assert!(cart.update_quantity(item.id, 0.0).is_err());
        assert_eq!(cart.items()[0].credits_purchased, 5.0);
    }

    #[test]
    fn test_clear_empties_cart() {
        let cart = CartStore::new();
        cart.add(ListingId::new(), 5.0).unwrap();
        cart.add(ListingId::new(), 3.0).unwrap();
        cart.clear();
        assert_eq!(cart.count(), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_total_empty_cart_is_zero() {
        let cart = CartStore::new();
        assert_eq!(cart.total(&[]), 0.0);
    }

    #[test]
    fn test_total_resolves_current_prices() {
        let cart = CartStore::new();
        let a = listing(20.0);
        let b = listing(16.0);
        cart.add(a.id, 5.0).unwrap();
        cart.add(b.id, 2.0).unwrap();

        let listings = vec![a, b];
        assert_eq!(cart.total(&listings), 5.0 * 20.0 + 2.0 * 16.0);
    }

    #[test]
    fn test_total_unresolvable_listing_counts_zero() {
        let cart = CartStore::new();
        let a = listing(20.0);
        cart.add(a.id, 5.0).unwrap();
        cart.add(ListingId::new(), 3.0).unwrap();

        assert_eq!(cart.total(&[a]), 100.0);
    }

    #[test]
    fn test_full_cart_lifecycle() {
        let cart = CartStore::new();
        let listing_id = ListingId::new();

        cart.add(listing_id, 5.0).unwrap();
        let item = cart.add(listing_id, 3.0).unwrap();
        cart.update_quantity(item.id, 10.0).unwrap();
        cart.remove(item.id);

        assert!(cart.items().is_empty());
    }
}
