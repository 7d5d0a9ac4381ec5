//! # Session State
//!
//! Manages the current sales session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the session
//! 2. Only one command should modify it at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Session State Operations                       │
//! │                                                                 │
//! │  Frontend Action       Tauri Command          State Change      │
//! │  ───────────────       ─────────────          ────────────      │
//! │                                                                 │
//! │  Tap dessert ─────────► register_sale() ────► counters += 1    │
//! │                                               tier recomputed   │
//! │                                                                 │
//! │  Load screen ─────────► get_session() ──────► (read only)       │
//! │                                                                 │
//! │  Tap share ───────────► share_sales_summary   (read only)       │
//! │                         (share.rs)                              │
//! │                                                                 │
//! │  NOTE: All write operations acquire the Mutex lock exclusively. │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use crumb_core::{Catalog, Session};

/// Tauri-managed session state.
///
/// ## Why Not RwLock?
/// The dominant operation is the tap, which writes. A RwLock would add
/// complexity with minimal benefit.
#[derive(Debug)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a fresh session positioned on the catalog's starting tier.
    pub fn new(catalog: &Catalog) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new(catalog))),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let message = session_state.with_session(|s| s.share_message());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.record_sale(&catalog));
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumb_core::Money;

    #[test]
    fn test_fresh_state_is_zeroed() {
        let catalog = Catalog::default();
        let state = SessionState::new(&catalog);

        state.with_session(|s| {
            assert_eq!(s.units_sold, 0);
            assert!(s.revenue.is_zero());
            assert_eq!(s.current_tier, 0);
        });
    }

    #[test]
    fn test_mutation_through_accessor() {
        let catalog = Catalog::default();
        let state = SessionState::new(&catalog);

        let charge = state.with_session_mut(|s| s.record_sale(&catalog));

        assert_eq!(charge, Money::from_cents(500));
        state.with_session(|s| assert_eq!(s.units_sold, 1));
    }

    #[test]
    fn test_concurrent_taps_all_counted() {
        // Two threads hammering register_sale must never lose a tap.
        let catalog = Arc::new(Catalog::default());
        let state = Arc::new(SessionState::new(&catalog));

        let mut handles = Vec::new();
        for _ in 0..2 {
            let state = Arc::clone(&state);
            let catalog = Arc::clone(&catalog);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    state.with_session_mut(|s| s.record_sale(&catalog));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        state.with_session(|s| assert_eq!(s.units_sold, 200));
    }
}
