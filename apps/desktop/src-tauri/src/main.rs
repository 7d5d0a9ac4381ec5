//! # Crumb Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Crumb Clicker                            │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                     Tauri WebView                         │  │
//! │  │  ┌─────────────────────────────────────────────────────┐  │  │
//! │  │  │                 Frontend                            │  │  │
//! │  │  │  • Dessert image (tap target)  • Counters           │  │  │
//! │  │  │  • Share button                • Transient notices  │  │  │
//! │  │  └─────────────────────────────────────────────────────┘  │  │
//! │  │                         │                                 │  │
//! │  │                  invoke('command')                        │  │
//! │  │                         │                                 │  │
//! │  └─────────────────────────┼─────────────────────────────────┘  │
//! │                            ▼                                    │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 Rust Backend (this crate)                 │  │
//! │  │                                                           │  │
//! │  │  main.rs ────► delegates to lib.rs                        │  │
//! │  │  lib.rs ─────► logging, state, plugins, commands          │  │
//! │  │  commands/ ──► register_sale, share_sales_summary, ...    │  │
//! │  │  state/ ─────► SessionState, CatalogState, ConfigState    │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │                                                                 │
//! │  In-memory only: no database, no network, no persistence.       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // Run the Tauri application
    // The actual setup is in lib.rs for better testability
    crumb_desktop_lib::run();
}
