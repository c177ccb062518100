//! Buyer profile store.

use terracredit_core::BuyerProfile;
use tokio::sync::watch;
use tracing::info;

/// Owns the single buyer profile.
///
/// Saving replaces any existing profile wholesale; there is no partial
/// merge and no deletion.
pub struct ProfileStore {
    tx: watch::Sender<Option<BuyerProfile>>,
}

impl ProfileStore {
    /// Create a store with no profile.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    /// Replace the profile.
    pub fn set(&self, profile: BuyerProfile) {
        info!(buyer_id = %profile.id, "saved buyer profile");
        self.tx.send_replace(Some(profile));
    }

    /// The current profile, if one has been saved.
    #[must_use]
    pub fn get(&self) -> Option<BuyerProfile> {
        self.tx.borrow().clone()
    }

    /// Subscribe to profile changes. Receivers see the latest value only.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<BuyerProfile>> {
        self.tx.subscribe()
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert!(ProfileStore::new().get().is_none());
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let store = ProfileStore::new();
        store.set(BuyerProfile::new(
            "Amina Yusuf",
            "amina@example.com",
            "GreenCo",
            Some("+254 700 000 000".to_string()),
        ));
        store.set(BuyerProfile::new("Amina Yusuf", "amina@greenco.example", "GreenCo", None));

        let profile = store.get().unwrap();
        assert_eq!(profile.email, "amina@greenco.example");
        assert!(profile.phone.is_none());
    }

    #[test]
    fn test_subscription_sees_saved_profile() {
        let store = ProfileStore::new();
        let mut rx = store.subscribe();
        store.set(BuyerProfile::new("Amina Yusuf", "amina@example.com", "GreenCo", None));
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_some());
    }
}
