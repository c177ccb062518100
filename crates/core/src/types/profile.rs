//! Buyer profile.

use serde::{Deserialize, Serialize};

use super::id::BuyerId;

/// The buyer's profile.
///
/// At most one profile exists at a time; saving replaces the previous
/// profile wholesale rather than merging fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerProfile {
    pub id: BuyerId,
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub phone: Option<String>,
}

impl BuyerProfile {
    /// Create a profile with a fresh id.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company_name: impl Into<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            id: BuyerId::new(),
            name: name.into(),
            email: email.into(),
            company_name: company_name.into(),
            phone,
        }
    }
}
