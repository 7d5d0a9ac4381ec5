//! # Crumb Desktop Library
//!
//! Core library for the Crumb Clicker desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! crumb_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session state management
//! │   ├── catalog.rs  ◄─── Tier catalog state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── Tap handling, session snapshot
//! │   ├── catalog.rs  ◄─── Tier list retrieval
//! │   ├── share.rs    ◄─── Share hand-off
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crumb_core::Catalog;
use state::{CatalogState, ConfigState, SessionState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                       │
/// │                                                                 │
/// │  1. Initialize Logging ───────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                        │
/// │     • Default: INFO, can be overridden with RUST_LOG            │
/// │                                                                 │
/// │  2. Build the Tier Catalog ───────────────────────────────────► │
/// │     • Built-in dessert progression, already validated           │
/// │                                                                 │
/// │  3. Initialize State Objects ─────────────────────────────────► │
/// │     • SessionState: zeroed counters behind a Mutex              │
/// │     • CatalogState: read-only tier list                         │
/// │     • ConfigState: defaults + CRUMB_* env overrides             │
/// │                                                                 │
/// │  4. Build & Run Tauri App ────────────────────────────────────► │
/// │     • Register opener plugin and all commands                   │
/// │     • Manage state                                              │
/// │     • Launch window                                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Crumb Clicker Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        // Setup hook runs before the app starts
        .setup(|app| {
            // The built-in catalog upholds the ordering invariant; a
            // config-loaded catalog would go through Catalog::new here
            // and fail fast on a bad tier list.
            let catalog = Catalog::default();
            info!(tiers = catalog.len(), "Tier catalog ready");

            // Initialize state objects
            let session_state = SessionState::new(&catalog);
            let catalog_state = CatalogState::new(catalog);
            let config_state = ConfigState::from_env();

            // Register state with Tauri
            app.manage(session_state);
            app.manage(catalog_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Lifecycle visibility, same events the mobile original logged
        .on_window_event(|_window, event| match event {
            tauri::WindowEvent::Focused(focused) => {
                debug!(focused, "window focus changed");
            }
            tauri::WindowEvent::CloseRequested { .. } => {
                info!("window close requested, session will be discarded");
            }
            tauri::WindowEvent::Destroyed => {
                debug!("window destroyed");
            }
            _ => {}
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Session commands
            commands::session::get_session,
            commands::session::register_sale,
            // Catalog commands
            commands::catalog::get_catalog,
            // Share command
            commands::share::share_sales_summary,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=crumb=trace` - Show trace for crumb crates only
/// - Default: INFO level, DEBUG for our own crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,crumb=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
