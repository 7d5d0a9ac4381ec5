//! # crumb-core: Pure Business Logic for Crumb Clicker
//!
//! This crate is the **heart** of Crumb Clicker. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Crumb Clicker Architecture                    │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                  Frontend (webview)                       │  │
//! │  │     Dessert image ──► tap ──► counters ──► share button   │  │
//! │  └───────────────────────────┬───────────────────────────────┘  │
//! │                              │ Tauri IPC                        │
//! │  ┌───────────────────────────▼───────────────────────────────┐  │
//! │  │                  Tauri Commands                           │  │
//! │  │     register_sale, get_session, share_sales_summary       │  │
//! │  └───────────────────────────┬───────────────────────────────┘  │
//! │                              │                                  │
//! │  ┌───────────────────────────▼───────────────────────────────┐  │
//! │  │             ★ crumb-core (THIS CRATE) ★                   │  │
//! │  │                                                           │  │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────────┐      │  │
//! │  │   │  types  │ │  money  │ │ catalog │ │  session   │      │  │
//! │  │   │  Tier   │ │  Money  │ │ Catalog │ │  Session   │      │  │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └────────────┘      │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO WINDOWING • NO NETWORK • PURE FUNCTIONS     │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`Tier`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Ordered tier list and tier selection
//! - [`session`] - Sales counters and sale registration
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog precondition validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Windowing, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Validated Once**: catalog invariants are checked at construction, so
//!    the per-tap path has no error handling at all
//!
//! ## Example Usage
//!
//! ```rust
//! use crumb_core::{Catalog, Session};
//!
//! let catalog = Catalog::default();
//! let mut session = Session::new(&catalog);
//!
//! // Each tap on the dessert image registers one sale
//! for _ in 0..6 {
//!     session.record_sale(&catalog);
//! }
//!
//! // 5 cupcakes at $5.00, then 1 donut at $10.00
//! assert_eq!(session.units_sold, 6);
//! assert_eq!(session.revenue.cents(), 3500);
//! assert_eq!(catalog.tier(session.current_tier).unwrap().name, "Donut");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use crumb_core::Money` instead of
// `use crumb_core::money::Money`

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::{Session, SessionSummary};
pub use types::Tier;
