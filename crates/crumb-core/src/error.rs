//! # Error Types
//!
//! Domain-specific error types for crumb-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  crumb-core errors (this file)                                  │
//! │  ├── CoreError        - General domain errors                   │
//! │  └── ValidationError  - Catalog/input validation failures       │
//! │                                                                 │
//! │  Tauri API errors (in app)                                      │
//! │  └── ApiError         - What the frontend sees (serialized)     │
//! │                                                                 │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (tier index, field name)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent catalog construction failures or out-of-range
/// lookups. Sale registration itself has no failure modes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A tier index points past the end of the catalog.
    ///
    /// ## When This Occurs
    /// - A frontend asks for a tier by index that the catalog doesn't have
    /// - Never from `Session::record_sale`, which only derives indices
    ///   through the catalog itself
    #[error("Tier {index} not found (catalog has {len} tiers)")]
    TierNotFound { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog and input validation errors.
///
/// These occur when a tier list doesn't meet the catalog preconditions.
/// Used once at startup, before any session exists.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// The catalog has no tiers at all.
    ///
    /// Tier selection is total only over non-empty lists, so an empty
    /// catalog is rejected before a session can be created.
    #[error("catalog must contain at least one tier")]
    EmptyCatalog,

    /// Unlock thresholds are not strictly increasing.
    ///
    /// ## When This Occurs
    /// The tier scan assumes a pre-sorted list; a list where
    /// `tiers[i].unlock_at <= tiers[i-1].unlock_at` would make the
    /// selected tier depend on list order, so we refuse to build it.
    #[error("tier thresholds must be strictly increasing: tier {index} unlocks at {unlock_at}, previous at {previous}")]
    ThresholdNotIncreasing {
        index: usize,
        unlock_at: u64,
        previous: u64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TierNotFound { index: 7, len: 4 };
        assert_eq!(err.to_string(), "Tier 7 not found (catalog has 4 tiers)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::ThresholdNotIncreasing {
            index: 2,
            unlock_at: 5,
            previous: 10,
        };
        assert_eq!(
            err.to_string(),
            "tier thresholds must be strictly increasing: tier 2 unlocks at 5, previous at 10"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::EmptyCatalog;
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
