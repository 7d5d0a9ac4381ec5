//! # Domain Types
//!
//! Core domain types used throughout Crumb Clicker.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌─────────────────┐        ┌─────────────────┐                 │
//! │  │      Tier       │        │     Money       │                 │
//! │  │  ─────────────  │        │  ─────────────  │                 │
//! │  │  name           │        │  cents (i64)    │                 │
//! │  │  image          │        │  500 = $5.00    │                 │
//! │  │  price_cents    │        └─────────────────┘                 │
//! │  │  unlock_at      │                                            │
//! │  └─────────────────┘                                            │
//! │                                                                 │
//! │  Tiers are positional: their identity is their index in the     │
//! │  catalog, which is why there is no id field.                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tier
// =============================================================================

/// A pricing/image bracket unlocked after a sales threshold.
///
/// Tiers are static and immutable: the catalog is defined at startup and
/// never changes while the app runs. The frontend receives the full list
/// once (to preload images) and thereafter only the current tier index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    /// Display name shown under the image ("Cupcake", "Donut", ...).
    pub name: String,

    /// Image asset path, resolved by the frontend
    /// (e.g. "desserts/cupcake.png").
    pub image: String,

    /// Unit price in cents (smallest currency unit). Always positive.
    pub price_cents: i64,

    /// Total units sold at which this tier starts production.
    /// Strictly increasing across the catalog.
    pub unlock_at: u64,
}

impl Tier {
    /// Creates a new tier.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        price_cents: i64,
        unlock_at: u64,
    ) -> Self {
        Tier {
            name: name.into(),
            image: image.into(),
            price_cents,
            unlock_at,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_price() {
        let tier = Tier::new("Cupcake", "desserts/cupcake.png", 500, 0);
        assert_eq!(tier.price(), Money::from_cents(500));
        assert_eq!(tier.price().to_string(), "$5.00");
    }

    #[test]
    fn test_tier_serializes_camel_case() {
        let tier = Tier::new("Donut", "desserts/donut.png", 1000, 5);
        let json = serde_json::to_value(&tier).unwrap();
        assert_eq!(json["priceCents"], 1000);
        assert_eq!(json["unlockAt"], 5);
    }
}
