//! Core types for Terracredit.
//!
//! This module provides the marketplace domain model.

pub mod cart;
pub mod crop;
pub mod farmer;
pub mod id;
pub mod listing;
pub mod profile;

pub use cart::CartItem;
pub use crop::{Crop, CropType};
pub use farmer::{Farmer, NewFarmer};
pub use id::*;
pub use listing::CarbonCreditListing;
pub use profile::BuyerProfile;
