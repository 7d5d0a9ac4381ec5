//! # Validation Module
//!
//! Catalog validation for Crumb Clicker.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                          │
//! │                                                                 │
//! │  Layer 1: Catalog construction (Rust, this module)              │
//! │  ├── non-empty tier list                                        │
//! │  ├── positive prices                                            │
//! │  └── strictly increasing thresholds                             │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 2: Runtime (none needed)                                 │
//! │  └── With the catalog validated once, the selection scan and    │
//! │      sale registration are total functions with no error paths  │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use crumb_core::types::Tier;
//! use crumb_core::validation::validate_tier_list;
//!
//! let tiers = vec![Tier::new("Cupcake", "desserts/cupcake.png", 500, 0)];
//! assert!(validate_tier_list(&tiers).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::Tier;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a tier display name.
const MAX_TIER_NAME_LEN: usize = 50;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a tier display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
///
/// ## Example
/// ```rust
/// use crumb_core::validation::validate_tier_name;
///
/// assert!(validate_tier_name("Cupcake").is_ok());
/// assert!(validate_tier_name("").is_err());
/// ```
pub fn validate_tier_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_TIER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_TIER_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be positive (> 0); a tier always charges something
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an image asset path.
///
/// ## Rules
/// - Must not be empty (the frontend has nothing to render otherwise)
pub fn validate_image_path(image: &str) -> ValidationResult<()> {
    if image.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validator
// =============================================================================

/// Validates a full tier list against the catalog preconditions.
///
/// ## Rules
/// - At least one tier
/// - Every tier passes the field validators
/// - Unlock thresholds strictly increase in list order
///
/// The selection scan assumes all three hold and never re-checks them.
pub fn validate_tier_list(tiers: &[Tier]) -> ValidationResult<()> {
    if tiers.is_empty() {
        return Err(ValidationError::EmptyCatalog);
    }

    for (index, tier) in tiers.iter().enumerate() {
        validate_tier_name(&tier.name)?;
        validate_image_path(&tier.image)?;
        validate_price_cents(tier.price_cents)?;

        if index > 0 {
            let previous = tiers[index - 1].unlock_at;
            if tier.unlock_at <= previous {
                return Err(ValidationError::ThresholdNotIncreasing {
                    index,
                    unlock_at: tier.unlock_at,
                    previous,
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tier_name() {
        assert!(validate_tier_name("Cupcake").is_ok());
        assert!(validate_tier_name("Froyo Deluxe").is_ok());

        assert!(validate_tier_name("").is_err());
        assert!(validate_tier_name("   ").is_err());
        assert!(validate_tier_name(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(500).is_ok());
        assert!(validate_price_cents(1).is_ok());

        assert!(validate_price_cents(0).is_err());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_image_path() {
        assert!(validate_image_path("desserts/cupcake.png").is_ok());
        assert!(validate_image_path("").is_err());
    }

    #[test]
    fn test_validate_tier_list_happy_path() {
        let tiers = vec![
            Tier::new("Cupcake", "desserts/cupcake.png", 500, 0),
            Tier::new("Donut", "desserts/donut.png", 1000, 5),
        ];
        assert!(validate_tier_list(&tiers).is_ok());
    }

    #[test]
    fn test_validate_tier_list_rejects_empty() {
        assert!(matches!(
            validate_tier_list(&[]),
            Err(ValidationError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_validate_tier_list_rejects_bad_order() {
        let tiers = vec![
            Tier::new("A", "a.png", 100, 5),
            Tier::new("B", "b.png", 200, 5),
        ];
        assert!(matches!(
            validate_tier_list(&tiers),
            Err(ValidationError::ThresholdNotIncreasing { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_tier_list_rejects_free_tier() {
        let tiers = vec![Tier::new("Free", "free.png", 0, 0)];
        assert!(validate_tier_list(&tiers).is_err());
    }
}
