//! Terracredit Core - Shared domain types.
//!
//! This crate provides the domain model used across all Terracredit
//! components:
//! - `market` - The marketplace state engine (stores, search, facade)
//! - `cli` - Command-line composition root and demo tooling
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no channels, no randomness.
//! Listing prices and credit estimates are computed by the `market` crate and
//! passed in; this keeps the types pure and usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, crops, farmers, listings, cart items, and
//!   buyer profiles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
