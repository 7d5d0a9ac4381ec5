//! # Tier Catalog
//!
//! The ordered, immutable list of tiers and the tier-selection scan.
//!
//! ## Tier Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  units_sold = 12                                                │
//! │                                                                 │
//! │  index   tier      unlock_at                                    │
//! │  ─────   ────────  ─────────                                    │
//! │    0     Cupcake       0      ≤ 12  → candidate                 │
//! │    1     Donut         5      ≤ 12  → candidate                 │
//! │    2     Eclair       10      ≤ 12  → candidate                 │
//! │    3     Froyo        20      > 12  → stop                      │
//! │                                                                 │
//! │  selected: index 2 (Eclair)                                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The scan is a total function over any non-empty catalog: if no threshold
//! qualifies (first threshold above the count), the first tier is used.
//! It assumes the list is pre-sorted and never re-checks it; `Catalog::new`
//! enforces the ordering once, at construction.

use serde::Serialize;

use crate::error::CoreResult;
use crate::types::Tier;
use crate::validation::validate_tier_list;

// =============================================================================
// Catalog
// =============================================================================

/// The ordered tier list.
///
/// ## Invariants (enforced by `new`)
/// - At least one tier
/// - Every price is positive
/// - Unlock thresholds are strictly increasing
///
/// The inner vec is private so the invariants can't be broken after
/// construction. No Deserialize on purpose: a catalog can only come into
/// existence through `new` or `default`.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    tiers: Vec<Tier>,
}

impl Catalog {
    /// Builds a catalog from an ordered tier list, validating the
    /// preconditions the selection scan relies on.
    ///
    /// ## Errors
    /// Returns a validation error for an empty list, a non-positive
    /// price, or thresholds that are not strictly increasing.
    pub fn new(tiers: Vec<Tier>) -> CoreResult<Self> {
        validate_tier_list(&tiers)?;
        Ok(Catalog { tiers })
    }

    /// Returns the tier at `index`, if it exists.
    #[inline]
    pub fn tier(&self, index: usize) -> Option<&Tier> {
        self.tiers.get(index)
    }

    /// Returns all tiers in order.
    #[inline]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Returns the number of tiers.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// A catalog is never empty, but clippy wants the pair.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Selects the index of the tier to display for a given sold count.
    ///
    /// Scans tiers in order, keeping the last tier whose threshold has been
    /// reached, and stops at the first tier whose threshold exceeds the
    /// count. Falls back to the first tier when nothing qualifies.
    pub fn tier_index_for(&self, units_sold: u64) -> usize {
        let mut selected = 0;
        for (index, tier) in self.tiers.iter().enumerate() {
            if units_sold >= tier.unlock_at {
                selected = index;
            } else {
                break;
            }
        }
        selected
    }

    /// Selects the tier to display for a given sold count.
    #[inline]
    pub fn tier_for(&self, units_sold: u64) -> &Tier {
        &self.tiers[self.tier_index_for(units_sold)]
    }
}

/// The built-in dessert progression.
///
/// Thresholds 0 / 5 / 10 / 20: the cupcake is on sale immediately, and each
/// later dessert takes over as the counter crosses its threshold.
impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            tiers: vec![
                Tier::new("Cupcake", "desserts/cupcake.png", 500, 0),
                Tier::new("Donut", "desserts/donut.png", 1000, 5),
                Tier::new("Eclair", "desserts/eclair.png", 1500, 10),
                Tier::new("Froyo", "desserts/froyo.png", 3000, 20),
            ],
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::default()
    }

    #[test]
    fn test_selection_at_thresholds() {
        // Thresholds [0, 5, 10, 20]
        let catalog = test_catalog();

        assert_eq!(catalog.tier_index_for(0), 0);
        assert_eq!(catalog.tier_index_for(4), 0);
        assert_eq!(catalog.tier_index_for(5), 1);
        assert_eq!(catalog.tier_index_for(9), 1);
        assert_eq!(catalog.tier_index_for(10), 2);
        assert_eq!(catalog.tier_index_for(19), 2);
        assert_eq!(catalog.tier_index_for(20), 3);
        assert_eq!(catalog.tier_index_for(1_000_000), 3);
    }

    #[test]
    fn test_selection_returns_matching_tier() {
        let catalog = test_catalog();
        assert_eq!(catalog.tier_for(0).name, "Cupcake");
        assert_eq!(catalog.tier_for(7).name, "Donut");
        assert_eq!(catalog.tier_for(20).name, "Froyo");
    }

    #[test]
    fn test_selection_falls_back_to_first_tier() {
        // First threshold above zero: counts below it still select tier 0
        let catalog = Catalog::new(vec![
            Tier::new("Cookie", "desserts/cookie.png", 300, 3),
            Tier::new("Brownie", "desserts/brownie.png", 700, 8),
        ])
        .unwrap();

        assert_eq!(catalog.tier_index_for(0), 0);
        assert_eq!(catalog.tier_index_for(2), 0);
        assert_eq!(catalog.tier_index_for(3), 0);
        assert_eq!(catalog.tier_index_for(8), 1);
    }

    #[test]
    fn test_tier_never_regresses() {
        let catalog = test_catalog();
        let mut previous = 0;
        for units_sold in 0..100 {
            let index = catalog.tier_index_for(units_sold);
            assert!(
                index >= previous,
                "tier regressed at units_sold={units_sold}"
            );
            previous = index;
        }
    }

    #[test]
    fn test_new_rejects_empty_list() {
        assert!(Catalog::new(vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_unsorted_thresholds() {
        let result = Catalog::new(vec![
            Tier::new("A", "a.png", 100, 10),
            Tier::new("B", "b.png", 200, 5),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_equal_thresholds() {
        let result = Catalog::new(vec![
            Tier::new("A", "a.png", 100, 5),
            Tier::new("B", "b.png", 200, 5),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(Catalog::new(catalog.tiers().to_vec()).is_ok());
        assert_eq!(catalog.len(), 4);
    }
}
