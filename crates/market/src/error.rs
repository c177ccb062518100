//! Marketplace error type.
//!
//! The engine is deliberately forgiving: removing or updating a cart item
//! that no longer exists is a silent no-op, and `register_farmer` performs
//! no input validation (the calling layer rejects bad forms before the core
//! is reached). The only condition the stores refuse outright is a
//! non-positive credit quantity, which would corrupt cart totals.

use thiserror::Error;

/// Errors raised by marketplace mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketError {
    /// A cart mutation was given a zero or negative credit quantity.
    #[error("credit quantity must be positive, got {credits}")]
    NonPositiveCredits {
        /// The rejected quantity.
        credits: f64,
    },
}

/// Convenience alias for marketplace results.
pub type Result<T> = core::result::Result<T, MarketError>;
