//! # Session Commands
//!
//! Tauri commands for the sale counter.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                            │
//! │                                                                 │
//! │  ┌──────────┐  tap   ┌──────────┐  tap   ┌──────────┐           │
//! │  │ Cupcake  │───────►│ Cupcake  │─ ... ─►│  Donut   │─ ...      │
//! │  │ 0 sold   │        │ 1 sold   │        │ 5 sold   │           │
//! │  └──────────┘        └──────────┘        └──────────┘           │
//! │                                                                 │
//! │  Every tap is one register_sale call. The displayed tier        │
//! │  changes automatically when its threshold is crossed; there is  │
//! │  no way back and no reset.                                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::state::{CatalogState, SessionState};
use crumb_core::{Catalog, Session, SessionSummary, Tier};

/// Session response including counters and the tier to display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub summary: SessionSummary,
    pub tier: Tier,
}

impl SessionResponse {
    /// Builds the response from the session and the catalog it runs on.
    ///
    /// The unwrap-free indexing is safe: `current_tier` is derived through
    /// the catalog, and the catalog is immutable for the app's lifetime.
    fn from_session(session: &Session, catalog: &Catalog) -> Self {
        SessionResponse {
            summary: SessionSummary::from(session),
            tier: catalog.tiers()[session.current_tier].clone(),
        }
    }
}

/// Gets the current session counters and displayed tier.
///
/// ## When Used
/// - Screen load (initial render)
/// - Window refocus, to re-sync the webview after a reload
///
/// ## Returns
/// Current counters plus the full tier object to display
#[tauri::command]
pub fn get_session(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
) -> SessionResponse {
    debug!("get_session command");
    session.with_session(|s| SessionResponse::from_session(s, catalog.catalog()))
}

/// Registers one sale (one tap on the dessert image).
///
/// ## Behavior
/// - Charges the price of the tier displayed at the moment of the tap
/// - Increments units sold and revenue
/// - Recomputes the displayed tier; the response carries the new one
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │  User taps the dessert image                                    │
/// │                    │                                            │
/// │                    ▼                                            │
/// │  invoke('register_sale')                                        │
/// │                    │                                            │
/// │                    ▼                                            │
/// │  ┌───────────────────────────────────────────────────────────┐  │
/// │  │  1. Lock the session                                      │  │
/// │  │  2. record_sale: charge current tier, bump counters       │  │
/// │  │  3. Re-derive displayed tier from the new count           │  │
/// │  │  4. Return updated snapshot                               │  │
/// │  └───────────────────────────────────────────────────────────┘  │
/// │                    │                                            │
/// │                    ▼                                            │
/// │  Counters update; image swaps if a threshold was crossed        │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Returns
/// Updated counters and the (possibly new) tier to display
#[tauri::command]
pub fn register_sale(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
) -> SessionResponse {
    let catalog = catalog.catalog();
    session.with_session_mut(|s| {
        let charge = s.record_sale(catalog);
        debug!(
            units_sold = s.units_sold,
            charged_cents = charge.cents(),
            tier = s.current_tier,
            "register_sale command"
        );
        SessionResponse::from_session(s, catalog)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_carries_displayed_tier() {
        let catalog = Catalog::default();
        let mut session = Session::new(&catalog);

        for _ in 0..5 {
            session.record_sale(&catalog);
        }

        let response = SessionResponse::from_session(&session, &catalog);
        assert_eq!(response.summary.units_sold, 5);
        assert_eq!(response.tier.name, "Donut");
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let catalog = Catalog::default();
        let session = Session::new(&catalog);

        let response = SessionResponse::from_session(&session, &catalog);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["summary"]["unitsSold"], 0);
        assert_eq!(json["summary"]["revenueCents"], 0);
        assert_eq!(json["tier"]["name"], "Cupcake");
    }
}
