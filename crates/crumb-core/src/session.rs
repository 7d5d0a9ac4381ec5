//! # Session State
//!
//! The mutable counters tracked while the app is running.
//!
//! ## Sale Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    record_sale()                                │
//! │                                                                 │
//! │  1. charge = price of the tier currently displayed              │
//! │  2. units_sold += 1                                             │
//! │  3. revenue   += charge                                         │
//! │  4. current_tier = catalog.tier_index_for(units_sold)           │
//! │                                                                 │
//! │  Order matters for step 1: a tap on the last cupcake before     │
//! │  the donut threshold still charges the cupcake price. The new   │
//! │  tier only applies from the next tap on.                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both counters are monotonically non-decreasing; there is no undo,
//! refund, or reset. The session is discarded when the app exits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::money::Money;

// =============================================================================
// Session
// =============================================================================

/// Transient sales counters for one run of the app.
///
/// ## Invariants
/// - `units_sold` and `revenue` only ever increase
/// - `current_tier` always equals `catalog.tier_index_for(units_sold)`
///   for the catalog the session was created with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Total units sold since the session started.
    pub units_sold: u64,

    /// Total revenue collected, sum of the price charged at each tap.
    pub revenue: Money,

    /// Index into the catalog of the tier currently on display.
    pub current_tier: usize,

    /// When the session started.
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session positioned on the catalog's starting tier.
    pub fn new(catalog: &Catalog) -> Self {
        Session {
            units_sold: 0,
            revenue: Money::zero(),
            current_tier: catalog.tier_index_for(0),
            started_at: Utc::now(),
        }
    }

    /// Registers one sale: charges the price of the currently displayed
    /// tier, then advances the displayed tier if a threshold was crossed.
    ///
    /// Returns the amount charged for this tap. No failure modes: the
    /// catalog invariants guarantee `current_tier` is always in bounds.
    pub fn record_sale(&mut self, catalog: &Catalog) -> Money {
        // Price of the tier active at the moment of the click.
        let charge = catalog.tiers()[self.current_tier].price();

        self.units_sold += 1;
        self.revenue += charge;
        self.current_tier = catalog.tier_index_for(self.units_sold);

        charge
    }

    /// Formats the text summary handed to the host share mechanism.
    ///
    /// ## Example
    /// ```rust
    /// use crumb_core::{Catalog, Session};
    ///
    /// let catalog = Catalog::default();
    /// let mut session = Session::new(&catalog);
    /// session.record_sale(&catalog);
    /// assert_eq!(session.share_message(), "1 desserts sold for $5.00");
    /// ```
    pub fn share_message(&self) -> String {
        format!("{} desserts sold for {}", self.units_sold, self.revenue)
    }
}

// =============================================================================
// Session Summary
// =============================================================================

/// Counters-only view of the session for API responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub units_sold: u64,
    pub revenue_cents: i64,
    pub current_tier: usize,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        SessionSummary {
            units_sold: session.units_sold,
            revenue_cents: session.revenue.cents(),
            current_tier: session.current_tier,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tier;

    #[test]
    fn test_new_session_starts_at_zero() {
        let catalog = Catalog::default();
        let session = Session::new(&catalog);

        assert_eq!(session.units_sold, 0);
        assert!(session.revenue.is_zero());
        assert_eq!(session.current_tier, 0);
    }

    #[test]
    fn test_record_sale_increments_counters() {
        let catalog = Catalog::default();
        let mut session = Session::new(&catalog);

        let charge = session.record_sale(&catalog);

        assert_eq!(charge, Money::from_cents(500)); // cupcake price
        assert_eq!(session.units_sold, 1);
        assert_eq!(session.revenue, Money::from_cents(500));
    }

    #[test]
    fn test_revenue_is_n_times_price_at_constant_tier() {
        // 4 sales, all within the cupcake tier (threshold for donut is 5)
        let catalog = Catalog::default();
        let mut session = Session::new(&catalog);

        for _ in 0..4 {
            session.record_sale(&catalog);
        }

        assert_eq!(session.units_sold, 4);
        assert_eq!(session.revenue, Money::from_cents(500) * 4);
        assert_eq!(session.current_tier, 0);
    }

    #[test]
    fn test_threshold_tap_charges_old_price() {
        // The 5th tap is made while the cupcake is still displayed, so it
        // charges $5.00 even though it crosses the donut threshold.
        let catalog = Catalog::default();
        let mut session = Session::new(&catalog);

        for _ in 0..4 {
            session.record_sale(&catalog);
        }
        let fifth_charge = session.record_sale(&catalog);

        assert_eq!(fifth_charge, Money::from_cents(500));
        assert_eq!(session.units_sold, 5);
        assert_eq!(session.current_tier, 1); // donut now displayed

        // The 6th tap charges the donut price.
        let sixth_charge = session.record_sale(&catalog);
        assert_eq!(sixth_charge, Money::from_cents(1000));
    }

    #[test]
    fn test_tier_never_regresses_over_session() {
        let catalog = Catalog::default();
        let mut session = Session::new(&catalog);

        let mut previous = session.current_tier;
        for _ in 0..50 {
            session.record_sale(&catalog);
            assert!(session.current_tier >= previous);
            previous = session.current_tier;
        }
        assert_eq!(session.current_tier, catalog.len() - 1);
    }

    #[test]
    fn test_session_with_nonzero_first_threshold() {
        // If no threshold qualifies, the first tier is displayed and charged.
        let catalog = Catalog::new(vec![
            Tier::new("Cookie", "desserts/cookie.png", 300, 3),
            Tier::new("Brownie", "desserts/brownie.png", 700, 8),
        ])
        .unwrap();
        let mut session = Session::new(&catalog);

        assert_eq!(session.current_tier, 0);
        let charge = session.record_sale(&catalog);
        assert_eq!(charge, Money::from_cents(300));
    }

    #[test]
    fn test_share_message_format() {
        let catalog = Catalog::default();
        let mut session = Session::new(&catalog);

        assert_eq!(session.share_message(), "0 desserts sold for $0.00");

        for _ in 0..6 {
            session.record_sale(&catalog);
        }
        // 5 cupcakes at $5.00 + 1 donut at $10.00
        assert_eq!(session.share_message(), "6 desserts sold for $35.00");
    }

    #[test]
    fn test_summary_mirrors_session() {
        let catalog = Catalog::default();
        let mut session = Session::new(&catalog);
        session.record_sale(&catalog);

        let summary = SessionSummary::from(&session);
        assert_eq!(summary.units_sold, 1);
        assert_eq!(summary.revenue_cents, 500);
        assert_eq!(summary.current_tier, 0);
    }
}
