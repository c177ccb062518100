//! Terracredit Market - The marketplace state engine.
//!
//! This crate owns all mutable marketplace state and exposes it reactively:
//!
//! - [`CatalogStore`] - farmers and their paired carbon-credit listings
//! - [`CartStore`] - cart line items with merge-on-duplicate semantics
//! - [`ProfileStore`] - the single buyer profile
//! - [`search`] - pure substring filtering over listing snapshots
//! - [`Marketplace`] - the facade composing the stores for callers
//!
//! # Snapshots
//!
//! Every store publishes its full current state as an immutable snapshot
//! (`Arc<[T]>`) over a [`tokio::sync::watch`] channel after each mutation.
//! Watch channels keep only the latest value, so slow observers coalesce
//! and never see superseded intermediate snapshots.
//!
//! # Randomness
//!
//! Credit estimation and listing prices draw from an injectable
//! [`RandomSource`], so tests can pin the draws while production uses the
//! thread RNG.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod error;
pub mod estimator;
pub mod marketplace;
pub mod profile;
pub mod search;
pub mod seed;

pub use cart::{CartSnapshot, CartStore};
pub use catalog::{CatalogStore, FarmersSnapshot, ListingsSnapshot};
pub use error::{MarketError, Result};
pub use estimator::{CreditEstimator, FixedSource, RandomSource, ThreadRngSource};
pub use marketplace::{Marketplace, SearchState};
pub use profile::ProfileStore;
pub use search::filter_listings;
