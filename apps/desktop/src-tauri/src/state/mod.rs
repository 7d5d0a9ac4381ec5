//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                           │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri Runtime                        │  │
//! │  │  app.manage(session_state);                               │  │
//! │  │  app.manage(catalog_state);                               │  │
//! │  │  app.manage(config_state);                                │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │                              │                                  │
//! │          ┌───────────────────┼───────────────────┐              │
//! │          ▼                   ▼                   ▼              │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐        │
//! │  │ SessionState │   │ CatalogState │   │ ConfigState  │        │
//! │  │              │   │              │   │              │        │
//! │  │  Arc<Mutex<  │   │  Catalog     │   │  bakery_name │        │
//! │  │    Session   │   │  (validated  │   │  currency    │        │
//! │  │  >>          │   │   tier list) │   │  share subj  │        │
//! │  └──────────────┘   └──────────────┘   └──────────────┘        │
//! │                                                                 │
//! │  THREAD SAFETY:                                                 │
//! │  • SessionState: protected by Arc<Mutex<T>> for exclusive use   │
//! │  • CatalogState: read-only after initialization                 │
//! │  • ConfigState: read-only after initialization                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod session;

pub use catalog::CatalogState;
pub use config::ConfigState;
pub use session::SessionState;
